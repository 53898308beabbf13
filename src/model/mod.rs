pub mod api;
pub mod application;
pub mod auth;
pub mod job;
