pub mod auth;
pub mod user;

pub use auth::{Credentials, LoginRequest, TokenResponse};
pub use user::{UserField, UserRecord};
