use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        app::AppContext,
        components::Card,
        router::Route,
        service::{application::APPLY_FAILED, ApplicationService},
    },
    model::application::ApplicationDto,
};

#[component]
pub fn Apply(job_id: i64) -> Element {
    let context = use_context::<Signal<AppContext>>();
    let navigator = use_navigator();

    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let (api, session) = {
            let context = context.read();
            (context.api().clone(), context.session().cloned())
        };
        let dto = ApplicationDto {
            job_id,
            message: message(),
        };

        spawn(async move {
            match ApplicationService::new(&api)
                .apply(session.as_ref(), &dto)
                .await
            {
                Ok(_) => {
                    navigator.push(Route::JobList {});
                }
                Err(err) => error.set(Some(err.user_message(APPLY_FAILED))),
            }
        });
    };

    rsx!(
        Title { "Apply | Babysitter Match" }
        Card { title: "Apply for Job #{job_id}",
            if let Some(err) = error() {
                p { class: "text-red-600 mb-3",
                    "{err}"
                }
            }
            form { onsubmit: onsubmit,
                textarea {
                    placeholder: "Message to parent (optional)",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded h-32",
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-indigo-600 text-white p-2 rounded hover:bg-indigo-700",
                    "Submit Application"
                }
            }
        }
    )
}
