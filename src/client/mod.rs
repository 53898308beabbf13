pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod router;
pub mod routes;
pub mod service;
pub mod session;

pub use app::App;
