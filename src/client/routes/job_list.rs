use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        app::AppContext,
        components::JobCard,
        error::Error,
        router::Route,
        service::{job::LOAD_JOBS_FAILED, JobService},
    },
    model::job::JobDto,
};

pub const LOADING_MESSAGE: &str = "Loading jobs...";
pub const NO_JOBS_MESSAGE: &str = "No jobs posted yet.";

/// A job as shown in the list, with the route its Apply link points to
#[derive(Clone, Debug, PartialEq)]
pub struct JobListing {
    pub job: JobDto,
    pub apply_to: Route,
}

impl From<JobDto> for JobListing {
    fn from(job: JobDto) -> Self {
        let apply_to = Route::Apply { job_id: job.id };

        Self { job, apply_to }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum JobListView {
    Loading,
    Failed(String),
    Empty,
    Listings(Vec<JobListing>),
}

impl JobListView {
    /// Map the state of the `GET /jobs` fetch, `None` while it is pending
    pub fn from_state(state: Option<&Result<Vec<JobDto>, Error>>) -> Self {
        match state {
            None => Self::Loading,
            Some(Err(err)) => Self::Failed(err.user_message(LOAD_JOBS_FAILED)),
            Some(Ok(jobs)) if jobs.is_empty() => Self::Empty,
            Some(Ok(jobs)) => Self::Listings(jobs.iter().cloned().map(JobListing::from).collect()),
        }
    }

    pub fn listings(&self) -> &[JobListing] {
        match self {
            Self::Listings(listings) => listings,
            _ => &[],
        }
    }
}

#[component]
pub fn JobList() -> Element {
    let context = use_context::<Signal<AppContext>>();

    // Fetch once on mount, logging in or out does not refetch
    let jobs = use_resource(move || {
        let api = context.peek().api().clone();

        async move { JobService::new(&api).list_jobs().await }
    });

    let view = JobListView::from_state(Option::as_ref(&*jobs.read_unchecked()));

    let content = match view {
        JobListView::Loading => rsx!(
            p { class: "text-center",
                "{LOADING_MESSAGE}"
            }
        ),
        JobListView::Failed(message) => rsx!(
            p { class: "text-red-600",
                "{message}"
            }
        ),
        JobListView::Empty => rsx!(
            p { class: "text-gray-600",
                "{NO_JOBS_MESSAGE}"
            }
        ),
        JobListView::Listings(listings) => rsx!(
            div { class: "space-y-4",
                for listing in listings {
                    JobCard {
                        key: "{listing.job.id}",
                        listing: listing.clone()
                    }
                }
            }
        ),
    };

    rsx!(
        Title { "Available Jobs | Babysitter Match" }
        Meta {
            name: "description",
            content: "Find and post babysitting jobs."
        }
        div {
            div { class: "flex justify-between items-center mb-6",
                h2 { class: "text-2xl font-bold",
                    "Available Jobs"
                }
                Link {
                    to: Route::PostJob {},
                    class: "bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700 flex items-center gap-2",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPlus
                    }
                    "Post a Job"
                }
            }
            {content}
        }
    )
}
