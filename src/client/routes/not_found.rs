use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        div { class: "text-center mt-8",
            p { class: "text-xl mb-4",
                "Nothing found at /{path}"
            }
            Link {
                to: Route::JobList {},
                class: "text-indigo-600 hover:underline",
                "Back to jobs"
            }
        }
    )
}
