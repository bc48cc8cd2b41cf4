// ============================================================================
// APP - session provider + guarded route switch
// ============================================================================

use yew::prelude::*;

use super::{SignIn, UserTable};
use crate::config::CONFIG;
use crate::hooks::{use_route, use_session, SessionProvider};
use crate::routing::{resolve, Resolution, Route};
use crate::stores::{BrowserScheduler, SessionStore};
use crate::utils::LocalTokenStorage;

#[function_component(App)]
pub fn app() -> Html {
    // Built once; restores a persisted token before the first render
    let store = use_state(|| {
        SessionStore::restore(
            Box::new(LocalTokenStorage::new(CONFIG.token_storage_key.clone())),
            Box::new(BrowserScheduler),
            CONFIG.error_banner_ms,
        )
    });

    html! {
        <SessionProvider store={(*store).clone()}>
            <AppRoutes />
        </SessionProvider>
    }
}

#[function_component(AppRoutes)]
fn app_routes() -> Html {
    let session = use_session();
    let router = use_route();

    let resolution = resolve(router.route, session.session.token.as_deref());

    {
        let redirect = router.redirect.clone();
        use_effect_with(resolution, move |resolution| {
            if let Resolution::Redirect(target) = *resolution {
                log::info!("🧭 [ROUTER] Redirecting to {}", target.path());
                redirect.emit(target);
            }
            || ()
        });
    }

    match resolution {
        Resolution::Render(Route::Home) => html! { <UserTable /> },
        Resolution::Render(Route::SignIn) => html! { <SignIn on_navigate={router.navigate.clone()} /> },
        Resolution::Redirect(_) => html! {},
    }
}
