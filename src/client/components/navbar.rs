use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{app::AppContext, router::Route};

#[component]
pub fn Navbar() -> Element {
    let mut context = use_context::<Signal<AppContext>>();
    let navigator = use_navigator();

    let display_name = context
        .read()
        .session()
        .map(|session| session.display_name.clone());

    rsx! {
        nav {
            class: "bg-indigo-600 p-4 text-white",
            div {
                class: "max-w-4xl mx-auto flex justify-between items-center",
                Link {
                    to: Route::JobList {},
                    class: "text-xl font-bold",
                    "Babysitter Match"
                }
                if let Some(name) = display_name {
                    div { class: "flex items-center gap-3",
                        span { "{name}" }
                        button {
                            class: "bg-indigo-700 hover:bg-indigo-800 px-3 py-1 rounded flex items-center gap-2",
                            onclick: move |_| {
                                context.write().logout();
                                navigator.push(Route::JobList {});
                            },
                            Icon {
                                width: 16,
                                height: 16,
                                icon: FaRightFromBracket
                            }
                            "Logout"
                        }
                    }
                }
            }
        }

        main { class: "max-w-4xl mx-auto p-4",
            Outlet::<Route> {}
        }
    }
}
