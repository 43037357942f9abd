//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod goals;
pub mod journal;
pub mod login;
pub mod profile;
pub mod register;

pub use chat::Chat;
pub use goals::Goals;
pub use journal::Journal;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
