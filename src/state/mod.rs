// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;

pub use reactivity::*;
pub use session_state::*;
