use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    model::error::ApiError,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::verify_email;

#[component]
pub fn VerifyEmail(token: String) -> Element {
    #[allow(unused_mut)]
    let mut outcome = use_signal(|| None::<Result<(), ApiError>>);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|token| {
        spawn(async move {
            outcome.set(Some(verify_email(token).await));
        });
    }));

    rsx! {
        Title { "Verify Email | {SITE_NAME}" }
        match outcome() {
            Some(Ok(())) => rsx! {
                Page {
                    class: "flex flex-col gap-4 items-center justify-center",
                    p { class: "text-2xl", "Email verified" }
                    Link { to: Route::Login {}, class: "btn btn-primary", "Log in" }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }
    }
}
