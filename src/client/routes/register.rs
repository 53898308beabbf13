use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        app::AppContext,
        components::Card,
        router::Route,
        service::{auth::REGISTRATION_FAILED, AuthService},
    },
    model::auth::RegisterDto,
};

#[component]
pub fn Register() -> Element {
    let mut context = use_context::<Signal<AppContext>>();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_babysitter = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let api = context.read().api().clone();
        let dto = RegisterDto {
            email: email(),
            password: password(),
            name: name(),
            is_babysitter: is_babysitter(),
        };

        spawn(async move {
            match AuthService::new(&api).register(&dto).await {
                Ok(response) => {
                    let signed_in = context
                        .write()
                        .register(response.token, dto.name, dto.is_babysitter)
                        .map(|_| ());

                    match signed_in {
                        Ok(()) => {
                            navigator.push(Route::JobList {});
                        }
                        Err(err) => error.set(Some(err.user_message(REGISTRATION_FAILED))),
                    }
                }
                Err(err) => error.set(Some(err.user_message(REGISTRATION_FAILED))),
            }
        });
    };

    rsx!(
        Title { "Register | Babysitter Match" }
        Card { title: "Register",
            if let Some(err) = error() {
                p { class: "text-red-600 mb-3",
                    "{err}"
                }
            }
            form { onsubmit: onsubmit,
                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded",
                    required: true,
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded",
                    required: true,
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                    class: "w-full p-2 border mb-3 rounded",
                    required: true,
                }
                label { class: "flex items-center mb-3",
                    input {
                        r#type: "checkbox",
                        checked: is_babysitter(),
                        onchange: move |evt| is_babysitter.set(evt.checked()),
                        class: "mr-2",
                    }
                    "I am a babysitter"
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-indigo-600 text-white p-2 rounded hover:bg-indigo-700",
                    "Register"
                }
            }
            p { class: "mt-4 text-center",
                "Already have an account? "
                Link {
                    to: Route::Login {},
                    class: "text-indigo-600",
                    "Login"
                }
            }
        }
    )
}
