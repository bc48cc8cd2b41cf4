pub mod session_context;
pub mod use_route;
pub mod use_session;

pub use session_context::SessionProvider;
pub use use_route::{use_route, UseRouteHandle};
pub use use_session::{use_session, UseSessionHandle};
