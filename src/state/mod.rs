//! State Management
//!
//! Session store and transient notice signals, provided as Leptos context.

pub mod notices;
pub mod session;

pub use notices::provide_notices;
pub use session::provide_session;
