// ============================================================================
// HISTORY - browser location <-> Route
// ============================================================================

use wasm_bindgen::JsValue;

use super::Route;

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

/// New history entry (user-initiated navigation)
pub fn push(route: Route) {
    if let Err(e) = with_history(|h| h.push_state_with_url(&JsValue::NULL, "", Some(route.path()))) {
        log::warn!("⚠️ [ROUTER] pushState to {} failed: {:?}", route.path(), e);
    }
}

/// Replaces the current entry, so the back button skips guard redirects
pub fn replace(route: Route) {
    if let Err(e) = with_history(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))) {
        log::warn!("⚠️ [ROUTER] replaceState to {} failed: {:?}", route.path(), e);
    }
}

fn with_history<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce(&web_sys::History) -> Result<(), JsValue>,
{
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    f(&history)
}
