pub mod scheduler;
pub mod session_store;

pub use scheduler::{BrowserScheduler, Deferred, Scheduler};
pub use session_store::{LoginOutcome, SessionStore};
