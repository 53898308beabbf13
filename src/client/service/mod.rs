//! Network side of each view.
//!
//! Every method performs at most one API request. Views own the resulting state, the session
//! transitions that follow a successful login or registration happen on
//! [`SessionContext`](crate::client::session::SessionContext).

pub mod application;
pub mod auth;
pub mod job;

pub use application::ApplicationService;
pub use auth::AuthService;
pub use job::JobService;
