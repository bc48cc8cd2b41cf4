// ============================================================================
// ADMIN CONSOLE - token-authenticated user directory (Rust + Yew)
// ============================================================================
// Layers:
// - Models: wire types shared with the backend
// - Services: ONLY API communication
// - State / Stores: session state with Rc<RefCell> + subscribers
// - ViewModels: pure UI logic (sorting, filtering, form validation)
// - Hooks / Components: yew glue and rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        };
        wasm_logger::init(Config::new(level));
    }
    log::info!(
        "🚀 Admin console starting ({}) against {}",
        CONFIG.environment,
        CONFIG.base_url()
    );

    yew::Renderer::<App>::new().render();
    Ok(())
}
