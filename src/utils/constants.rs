/// Remote endpoints, relative to `CONFIG.api_base_url`
pub const API_TOKEN_AUTH: &str = "/token-auth";
pub const API_V1_USERS: &str = "/v1/users";

/// Navigation surface
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_SIGN_IN: &str = "/login/sign-in";

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_ERROR_BANNER_MS: u32 = 5_000;

/// Django's `username` column limit
pub const USERNAME_MAX_LEN: usize = 150;
