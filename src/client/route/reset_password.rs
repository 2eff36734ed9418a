use dioxus::prelude::*;

use crate::client::{
    component::{page::Alert, Page},
    constant::SITE_NAME,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::reset_password;

#[component]
pub fn ResetPassword(token: String) -> Element {
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<(&'static str, String)>);
    #[allow(unused_mut)]
    let mut done = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if password() != confirm() {
            message.set(Some(("error", "Passwords don't match".to_string())));
            return;
        }

        #[cfg(feature = "web")]
        {
            let token = token.clone();
            spawn(async move {
                match reset_password(token, password()).await {
                    Ok(()) => done.set(true),
                    Err(err) => message.set(Some(("error", err.message))),
                }
            });
        }
    };

    rsx! {
        Title { "Reset Password | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            if done() {
                div {
                    class: "flex flex-col gap-4 items-center",
                    p { class: "text-2xl", "Password updated" }
                    p { class: "opacity-70", "Log in again with your new password." }
                    Link { to: Route::Login {}, class: "btn btn-primary", "Log in" }
                }
            } else {
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-3",
                        h1 { class: "card-title text-2xl", "Choose a new password" }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            placeholder: "New password",
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
                        button { class: "btn btn-primary", r#type: "submit", "Update password" }
                    }
                }
            }
        }
    }
}
