use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{Alert, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        router::Route,
        store::user::UserState,
    },
    model::user::LoginDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::{login, request_password_reset};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut username_or_email = use_signal(String::new);
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<(&'static str, String)>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let state = user_state.read().clone();
    let logged_in = state.user.is_some();

    // Redirect users who are already logged in
    use_effect(move || {
        if user_state.read().user.is_some() {
            nav.push(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        #[allow(unused_variables)]
        let payload = LoginDto {
            username_or_email: username_or_email().trim().to_string(),
            password: password(),
        };

        #[cfg(feature = "web")]
        {
            submitting.set(true);
            spawn(async move {
                match login(payload).await {
                    Ok(response) => {
                        user_state.set(UserState {
                            user: Some(response.user),
                            fetched: true,
                        });
                    }
                    Err(err) => {
                        message.set(Some(("error", err.message)));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    let on_forgot = move |_| {
        let email = username_or_email().trim().to_string();
        if !email.contains('@') {
            message.set(Some((
                "warning",
                "Enter your email address above, then request a reset link".to_string(),
            )));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            match request_password_reset(email).await {
                Ok(()) => message.set(Some((
                    "info",
                    "If that address is registered, a reset link is on its way".to_string(),
                ))),
                Err(err) => message.set(Some(("error", err.message))),
            }
        });
    };

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col items-center justify-center",
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-3",
                        h1 { class: "card-title text-2xl", "Log in" }
                        input {
                            class: "input input-bordered",
                            placeholder: "Username or email",
                            autocomplete: "username",
                            value: "{username_or_email}",
                            oninput: move |evt| username_or_email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            placeholder: "Password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some((kind, text)) = message() {
                            Alert { kind, message: text }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Log in"
                        }
                        button {
                            class: "btn btn-link btn-sm",
                            r#type: "button",
                            onclick: on_forgot,
                            "Forgot password?"
                        }
                        p {
                            class: "text-sm text-center",
                            "No account yet? "
                            Link { to: Route::Register {}, class: "link", "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
