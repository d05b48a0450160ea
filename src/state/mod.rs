//! State Management
//!
//! The injected session service shared by all views.

pub mod session;

pub use session::{provide_session_state, use_session, Session, SessionState};
