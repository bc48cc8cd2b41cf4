// ============================================================================
// ROUTING - two destinations and the access guard
// ============================================================================

pub mod guard;
pub mod history;

pub use guard::{resolve, Resolution};

use crate::utils::constants::{ROUTE_HOME, ROUTE_SIGN_IN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// User listing, requires a session token
    Home,
    /// Credential entry
    SignIn,
}

impl Route {
    /// Unknown paths fall back to `Home`, which the guard then gates
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == ROUTE_SIGN_IN {
            Route::SignIn
        } else {
            Route::Home
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => ROUTE_HOME,
            Route::SignIn => ROUTE_SIGN_IN,
        }
    }

    /// Needs a session token to render
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home)
    }
}
