use dioxus::prelude::*;

use crate::client::routes::job_list::JobListing;

#[component]
pub fn JobCard(listing: JobListing) -> Element {
    rsx!(
        div {
            class: "bg-white p-4 rounded shadow",
            h3 { class: "font-semibold text-lg",
                "{listing.job.title}"
            }
            p { class: "text-gray-700",
                "{listing.job.description}"
            }
            Link {
                to: listing.apply_to.clone(),
                class: "mt-2 inline-block text-indigo-600 hover:underline",
                "Apply →"
            }
        }
    )
}
