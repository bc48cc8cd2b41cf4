// ============================================================================
// USE ROUTE HOOK - current Route + navigation callbacks
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routing::{history, Route};

#[derive(Clone)]
pub struct UseRouteHandle {
    pub route: Route,
    /// Push a new history entry
    pub navigate: Callback<Route>,
    /// Replace the current entry (guard redirects)
    pub redirect: Callback<Route>,
}

#[hook]
pub fn use_route() -> UseRouteHandle {
    let route = use_state(history::current_route);

    // back / forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
                    route.set(history::current_route());
                });
                if let Err(e) = win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ [ROUTER] popstate listener not registered: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    if let Err(e) = win.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                        log::warn!("⚠️ [ROUTER] popstate listener not removed: {:?}", e);
                    }
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            history::push(target);
            route.set(target);
        })
    };

    let redirect = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            history::replace(target);
            route.set(target);
        })
    };

    UseRouteHandle {
        route: *route,
        navigate,
        redirect,
    }
}
