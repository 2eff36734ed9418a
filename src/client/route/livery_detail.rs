use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaDownload, Icon};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{Alert, ErrorPage, LoadingPage},
            Markdown, Page, StatusBadge,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
    },
    model::livery::{LiveryDto, LiveryStatus},
};

#[cfg(feature = "web")]
use crate::client::api::livery::{delete_livery, download_livery, get_livery};

fn format_size(bytes: i64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    format!("{:.1} MB", bytes as f64 / MB)
}

#[component]
pub fn LiveryDetail(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut loaded = use_signal(|| None::<LiveryDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|id| async move { get_livery(id).await }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(found) => {
                    loaded.set(Some(found.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch livery {}: {}", id, err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        if let Some(livery) = loaded() {
            Title { "{livery.livery_name} | {SITE_NAME}" }
            LiveryView {
                livery,
                on_download: move |count: i32| {
                    if let Some(current) = loaded.write().as_mut() {
                        current.download_count = count;
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

#[component]
fn LiveryView(livery: LiveryDto, on_download: EventHandler<i32>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let nav = navigator();
    let mut selected_screenshot = use_signal(|| 0usize);
    #[allow(unused_mut)]
    let mut action_error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| false);

    let is_owner = user_state.read().user_id() == Some(livery.user_id);
    let can_see_status = is_owner || user_state.read().is_admin();
    let id = livery.id;
    let download_count = livery.download_count;

    let on_download_click = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match download_livery(id).await {
                Ok(download) => {
                    on_download.call(download_count + 1);
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href(&download.file_url).is_err() {
                            action_error.set(Some("Failed to start download".to_string()));
                        }
                    }
                }
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_livery(id).await {
                Ok(()) => {
                    nav.push(Route::MyLiveries {});
                }
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let screenshot = livery.screenshots.get(selected_screenshot()).cloned();
    let uploaded_on = livery.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-5xl grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2 flex flex-col gap-3",
                    if let Some(src) = screenshot {
                        img { class: "w-full rounded-box aspect-video object-cover", src: "{src}", alt: "{livery.livery_name}" }
                    } else {
                        div { class: "w-full rounded-box aspect-video bg-base-300" }
                    }
                    if livery.screenshots.len() > 1 {
                        div {
                            class: "flex gap-2",
                            for (index, src) in livery.screenshots.iter().enumerate() {
                                button {
                                    key: "{index}",
                                    class: if index == selected_screenshot() { "ring ring-primary rounded" } else { "opacity-70 rounded" },
                                    onclick: move |_| selected_screenshot.set(index),
                                    img { class: "h-16 w-28 object-cover rounded", src: "{src}" }
                                }
                            }
                        }
                    }
                    if let Some(description) = livery.description.clone() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                h2 { class: "card-title", "Description" }
                                Markdown { content: description }
                            }
                        }
                    }
                    if let Some(install) = livery.install_method.clone() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                h2 { class: "card-title", "Installation" }
                                Markdown { content: install }
                            }
                        }
                    }
                }
                div {
                    class: "flex flex-col gap-4",
                    h1 { class: "text-2xl font-bold", "{livery.livery_name}" }
                    if can_see_status {
                        StatusBadge { status: livery.status }
                        if livery.status == LiveryStatus::Rejected {
                            if let Some(notes) = &livery.review_notes {
                                Alert { kind: "error", message: notes.clone() }
                            }
                        }
                    }
                    table {
                        class: "table table-sm",
                        tbody {
                            tr { th { "Aircraft" } td { "{livery.manufacturer} {livery.aircraft}" } }
                            tr { th { "Brand" } td { "{livery.brand}" } }
                            if let Some(version) = livery.msfs_version {
                                tr { th { "MSFS" } td { "{version}" } }
                            }
                            if let Some(uploader) = &livery.uploader {
                                tr { th { "Uploader" } td { "{uploader.username}" } }
                            }
                            if let Some(size) = livery.file_size {
                                tr { th { "Size" } td { {format_size(size)} } }
                            }
                            tr { th { "Downloads" } td { "{livery.download_count}" } }
                            tr { th { "Uploaded" } td { "{uploaded_on}" } }
                        }
                    }
                    if livery.status == LiveryStatus::Approved {
                        button {
                            class: "btn btn-primary",
                            onclick: on_download_click,
                            Icon { width: 16, height: 16, icon: FaDownload }
                            "Download"
                        }
                    }
                    if is_owner {
                        div {
                            class: "flex gap-2",
                            Link { to: Route::EditLivery { id }, class: "btn btn-outline flex-1", "Edit" }
                            if confirm_delete() {
                                button { class: "btn btn-error flex-1", onclick: on_delete, "Confirm delete" }
                            } else {
                                button {
                                    class: "btn btn-outline btn-error flex-1",
                                    onclick: move |_| confirm_delete.set(true),
                                    "Delete"
                                }
                            }
                        }
                    }
                    Link {
                        to: Route::Contact {},
                        class: "link text-sm opacity-70",
                        "Report this livery"
                    }
                    if let Some(message) = action_error() {
                        Alert { kind: "error", message }
                    }
                }
            }
        }
    }
}
