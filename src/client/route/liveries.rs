use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            LiveryCard, Page,
        },
        constant::{LIVERIES_PER_PAGE, SITE_NAME},
        model::error::ApiError,
    },
    model::{
        aircraft::{aircraft_for, allowed_brands},
        livery::{LiveryDto, LiveryFilterDto, Manufacturer},
    },
};

#[cfg(feature = "web")]
use crate::client::api::livery::get_liveries;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn Liveries() -> Element {
    let mut manufacturer = use_signal(|| None::<Manufacturer>);
    let mut aircraft = use_signal(String::new);
    let mut brand = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u64);

    #[allow(unused_mut)]
    let mut liveries = use_signal(|| None::<Vec<LiveryDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    let filter = use_memo(move || LiveryFilterDto {
        manufacturer: manufacturer(),
        aircraft: non_empty(aircraft()),
        brand: non_empty(brand()),
        search: non_empty(search()),
        limit: Some(LIVERIES_PER_PAGE),
        offset: Some(page() * LIVERIES_PER_PAGE),
    });

    // Re-runs whenever a filter or the page changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_liveries(&filter()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    liveries.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch liveries: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let aircraft_options: Vec<&'static str> = match manufacturer() {
        Some(m) => aircraft_for(m).to_vec(),
        None => Manufacturer::ALL
            .iter()
            .flat_map(|m| aircraft_for(*m).iter().copied())
            .collect(),
    };
    let brand_options = allowed_brands(&aircraft());
    let page_label = format!("Page {}", page() + 1);
    let has_next = liveries
        .read()
        .as_ref()
        .is_some_and(|list| list.len() as u64 == LIVERIES_PER_PAGE);

    rsx! {
        Title { "Browse Liveries | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-2xl", "Browse liveries" }
                div {
                    class: "flex flex-wrap gap-2",
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            manufacturer.set(evt.value().parse().ok());
                            aircraft.set(String::new());
                            page.set(0);
                        },
                        option { value: "", "All manufacturers" }
                        for m in Manufacturer::ALL {
                            option { key: "{m}", value: "{m}", selected: manufacturer() == Some(m), "{m}" }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            aircraft.set(evt.value());
                            brand.set(String::new());
                            page.set(0);
                        },
                        option { value: "", "All aircraft" }
                        for a in aircraft_options {
                            option { key: "{a}", value: "{a}", selected: aircraft() == a, "{a}" }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            brand.set(evt.value());
                            page.set(0);
                        },
                        option { value: "", "All brands" }
                        for b in brand_options.iter() {
                            option { key: "{b}", value: "{b}", selected: brand() == *b, "{b}" }
                        }
                    }
                    input {
                        class: "input input-bordered flex-1 min-w-48",
                        r#type: "search",
                        placeholder: "Search by name or description",
                        value: "{search}",
                        oninput: move |evt| {
                            search.set(evt.value());
                            page.set(0);
                        },
                    }
                }
                if let Some(list) = liveries() {
                    if list.is_empty() {
                        p { class: "text-center py-8 opacity-60", "No liveries match these filters." }
                    } else {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                            for livery in list {
                                LiveryCard { key: "{livery.id}", livery: livery.clone() }
                            }
                        }
                    }
                    div {
                        class: "join self-center",
                        button {
                            class: "join-item btn",
                            disabled: page() == 0,
                            onclick: move |_| page.set(page().saturating_sub(1)),
                            "«"
                        }
                        button { class: "join-item btn btn-disabled", "{page_label}" }
                        button {
                            class: "join-item btn",
                            disabled: !has_next,
                            onclick: move |_| page.set(page() + 1),
                            "»"
                        }
                    }
                } else if let Some(err) = error() {
                    ErrorPage { status: err.status, message: err.message }
                } else {
                    LoadingPage {  }
                }
            }
        }
    }
}
