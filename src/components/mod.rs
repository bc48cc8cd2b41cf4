pub mod app;
pub mod error_banner;
pub mod loader;
pub mod sign_in;
pub mod user_table;

pub use app::App;
pub use error_banner::ErrorBanner;
pub use loader::Loader;
pub use sign_in::SignIn;
pub use user_table::UserTable;
