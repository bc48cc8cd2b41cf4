// ============================================================================
// SESSION CONTEXT - shares the SessionStore with every component
// ============================================================================

use yew::prelude::*;

use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub store: SessionStore,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionStore> context={props.store.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionStore>>
    }
}
