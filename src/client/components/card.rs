use dioxus::prelude::*;

/// Centered card with a heading, used by the form views
#[component]
pub fn Card(title: String, children: Element) -> Element {
    rsx!(
        div {
            class: "max-w-lg mx-auto bg-white p-6 rounded shadow",
            h2 { class: "text-2xl font-bold mb-4",
                "{title}"
            }
            {children}
        }
    )
}
