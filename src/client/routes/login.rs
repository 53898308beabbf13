use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        app::AppContext,
        components::Card,
        router::Route,
        service::{
            auth::{display_name_from_email, LOGIN_FAILED},
            AuthService,
        },
    },
    model::auth::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let mut context = use_context::<Signal<AppContext>>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let api = context.read().api().clone();
        let dto = LoginDto {
            email: email(),
            password: password(),
        };

        spawn(async move {
            match AuthService::new(&api).login(&dto).await {
                Ok(response) => {
                    let signed_in = context
                        .write()
                        .login(response.token, display_name_from_email(&dto.email))
                        .map(|_| ());

                    match signed_in {
                        Ok(()) => {
                            navigator.push(Route::JobList {});
                        }
                        Err(err) => error.set(Some(err.user_message(LOGIN_FAILED))),
                    }
                }
                Err(err) => error.set(Some(err.user_message(LOGIN_FAILED))),
            }
        });
    };

    rsx!(
        Title { "Login | Babysitter Match" }
        Card { title: "Login",
            if let Some(err) = error() {
                p { class: "text-red-600 mb-3",
                    "{err}"
                }
            }
            form { onsubmit: onsubmit,
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
                button {
                    r#type: "submit",
                    class: "w-full bg-indigo-600 text-white p-2 rounded hover:bg-indigo-700",
                    "Login"
                }
            }
            p { class: "mt-4 text-center",
                "No account? "
                Link {
                    to: Route::Register {},
                    class: "text-indigo-600",
                    "Register"
                }
            }
        }
    )
}
