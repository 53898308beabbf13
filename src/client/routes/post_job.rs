use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        app::AppContext,
        components::Card,
        router::Route,
        service::{job::POST_JOB_FAILED, JobService},
    },
    model::job::NewJobDto,
};

#[component]
pub fn PostJob() -> Element {
    let context = use_context::<Signal<AppContext>>();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let (api, session) = {
            let context = context.read();
            (context.api().clone(), context.session().cloned())
        };
        let dto = NewJobDto {
            title: title(),
            description: description(),
        };

        spawn(async move {
            match JobService::new(&api).post_job(session.as_ref(), &dto).await {
                Ok(_) => {
                    navigator.push(Route::JobList {});
                }
                Err(err) => error.set(Some(err.user_message(POST_JOB_FAILED))),
            }
        });
    };

    rsx!(
        Title { "Post a Job | Babysitter Match" }
        Card { title: "Post a New Job",
            if let Some(err) = error() {
                p { class: "text-red-600 mb-3",
                    "{err}"
                }
            }
            form { onsubmit: onsubmit,
                input {
                    r#type: "text",
                    placeholder: "Job title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded",
                    required: true,
                }
                textarea {
                    placeholder: "Description (e.g., 2 kids, Saturday 6-10pm)",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded h-32",
                    required: true,
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-green-600 text-white p-2 rounded hover:bg-green-700",
                    "Post Job"
                }
            }
        }
    )
}
