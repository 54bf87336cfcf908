//! Game session protocol

mod session;

pub use session::{Session, SessionError, SessionState, Turn};
