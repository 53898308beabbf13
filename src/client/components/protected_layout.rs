use dioxus::prelude::*;

use crate::client::{
    app::AppContext,
    guard::{guard, Navigation},
    router::Route,
};

/// Layout for routes that need a session, anonymous visitors are sent to login
#[component]
pub fn ProtectedLayout() -> Element {
    let context = use_context::<Signal<AppContext>>();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let navigation = guard(&route, context.read().auth_state());

    // Navigate after render, not while rendering
    use_effect(use_reactive((&navigation,), move |(navigation,)| {
        if let Navigation::Redirect(target) = navigation {
            navigator.replace(target);
        }
    }));

    match navigation {
        Navigation::Render => rsx! {
            Outlet::<Route> {}
        },
        Navigation::Redirect(_) => rsx! {},
    }
}
