//! Test fixtures for tokens and mock API endpoints.
//!
//! - `token` - HS256 JWTs shaped like the ones the API issues
//! - `api` - mock endpoints for the Babysitter Match REST API

pub mod api;
pub mod token;
