use yew::prelude::*;

/// Full-screen blocking spinner
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader" role="progressbar" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
