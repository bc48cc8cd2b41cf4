use yew::prelude::*;

use crate::state::AuthError;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: Option<AuthError>,
}

/// Shown while the session carries a login error; the store clears it
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(error) = props.error else {
        return html! {};
    };
    html! {
        <div class="alert alert-error" role="alert">
            {error.to_string()}
        </div>
    }
}
