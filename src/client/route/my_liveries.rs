use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            LiveryCard, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::livery::LiveryDto,
};

#[cfg(feature = "web")]
use crate::client::api::livery::get_my_liveries;

#[component]
pub fn MyLiveries() -> Element {
    #[allow(unused_mut)]
    let mut liveries = use_signal(|| None::<Vec<LiveryDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_my_liveries().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => liveries.set(Some(list.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch own liveries: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "My Liveries | {SITE_NAME}" }
        if let Some(list) = liveries() {
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-6xl flex flex-col gap-6",
                    div {
                        class: "flex items-center justify-between",
                        h1 { class: "text-2xl", "My liveries" }
                        Link { to: Route::Upload {}, class: "btn btn-primary", "Upload" }
                    }
                    if list.is_empty() {
                        p { class: "text-center py-8 opacity-60", "You haven't uploaded anything yet." }
                    } else {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                            for livery in list {
                                LiveryCard { key: "{livery.id}", livery: livery.clone(), show_status: true }
                            }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {  }
        }
    }
}
