use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::Alert, Page},
        constant::SITE_NAME,
        router::Route,
    },
    model::user::RegisterDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::register;

/// Minimum accepted password length, mirrored from the server check.
const MIN_PASSWORD_LEN: usize = 8;

fn validate(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords don't match".to_string());
    }
    Ok(())
}

#[component]
pub fn Register() -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<(&'static str, String)>);
    #[allow(unused_mut)]
    let mut done = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(err) = validate(&username(), &email(), &password(), &confirm()) {
            message.set(Some(("error", err)));
            return;
        }

        #[allow(unused_variables)]
        let payload = RegisterDto {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match register(payload).await {
                Ok(_) => done.set(true),
                Err(err) => message.set(Some(("error", err.message))),
            }
        });
    };

    rsx! {
        Title { "Sign up | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            if done() {
                div {
                    class: "card bg-base-200 w-full max-w-sm",
                    div {
                        class: "card-body gap-3",
                        h1 { class: "card-title", "Check your inbox" }
                        p { "We sent a verification link to {email}." }
                        Link { to: Route::Login {}, class: "btn btn-primary", "Go to login" }
                    }
                }
            } else {
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-3",
                        h1 { class: "card-title text-2xl", "Create an account" }
                        input {
                            class: "input input-bordered",
                            placeholder: "Username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "email",
                            placeholder: "Email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            placeholder: "Password",
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            placeholder: "Confirm password",
                            autocomplete: "new-password",
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                        if let Some((kind, text)) = message() {
                            Alert { kind, message: text }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Sign up" }
                        p {
                            class: "text-sm text-center",
                            "Already registered? "
                            Link { to: Route::Login {}, class: "link", "Log in" }
                        }
                    }
                }
            }
        }
    }
}
