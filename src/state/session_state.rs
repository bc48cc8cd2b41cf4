// ============================================================================
// SESSION STATE - snapshot read by the guard and the views
// ============================================================================

use thiserror::Error;

/// Failure shown to the user after a rejected login. Deliberately says
/// nothing about which half of the credential pair was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No user matches this username and password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub loading: bool,
    pub last_error: Option<AuthError>,
}

impl Session {
    /// Session adopted from persistence at startup
    pub fn restored(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }
}
