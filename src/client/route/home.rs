use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{LiveryCard, Page},
        constant::SITE_NAME,
        router::Route,
    },
    model::livery::{LiveryDto, LiveryFilterDto, Manufacturer},
};

#[cfg(feature = "web")]
use crate::client::api::livery::get_liveries;

const LATEST_COUNT: u64 = 8;

#[component]
pub fn Home() -> Element {
    let mut latest = use_signal(Vec::<LiveryDto>::new);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move {
        get_liveries(&LiveryFilterDto {
            limit: Some(LATEST_COUNT),
            ..Default::default()
        })
        .await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(liveries) => latest.set(liveries.clone()),
                Err(err) => tracing::error!("Failed to fetch latest liveries: {}", err),
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-10",
            div {
                class: "hero bg-base-200 rounded-box w-full max-w-6xl py-12",
                div {
                    class: "hero-content text-center flex-col",
                    h1 { class: "text-4xl font-bold", "Community liveries for MSFS" }
                    p {
                        class: "max-w-xl opacity-80",
                        "Find and share paint schemes for Airbus and Boeing airliners. Every upload is checked before it goes live."
                    }
                    div {
                        class: "flex gap-2 flex-wrap justify-center",
                        Link { to: Route::Liveries {}, class: "btn btn-primary", "Browse liveries" }
                        Link { to: Route::Upload {}, class: "btn btn-outline", "Upload yours" }
                    }
                }
            }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4 w-full max-w-6xl",
                for manufacturer in Manufacturer::ALL {
                    Link {
                        key: "{manufacturer}",
                        to: Route::Liveries {},
                        class: "card bg-base-200 hover:bg-base-300",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "{manufacturer}" }
                        }
                    }
                }
            }
            div {
                class: "w-full max-w-6xl",
                h2 { class: "text-2xl mb-4", "Latest uploads" }
                if latest().is_empty() {
                    p { class: "opacity-60", "No liveries yet." }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                        for livery in latest() {
                            LiveryCard { key: "{livery.id}", livery: livery.clone() }
                        }
                    }
                }
            }
        }
    }
}
