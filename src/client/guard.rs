//! Client-side route guard.
//!
//! Protected routes only render for an authenticated session, anonymous visitors are sent to
//! the login view instead. This is a convenience for the user, the API authorizes every write
//! on its own.

use crate::client::router::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Navigation {
    Render,
    Redirect(Route),
}

impl Route {
    /// Whether the route needs an authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::PostJob {} | Route::Apply { .. })
    }
}

pub fn guard(route: &Route, state: AuthState) -> Navigation {
    match state {
        AuthState::Anonymous if route.is_protected() => Navigation::Redirect(Route::Login {}),
        _ => Navigation::Render,
    }
}
