use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaDownload, FaPlane},
    Icon,
};

use crate::{
    client::router::Route,
    model::livery::{LiveryDto, LiveryStatus},
};

#[component]
pub fn StatusBadge(status: LiveryStatus) -> Element {
    let (class, label) = match status {
        LiveryStatus::Pending => ("badge-warning", "Pending review"),
        LiveryStatus::Approved => ("badge-success", "Approved"),
        LiveryStatus::Rejected => ("badge-error", "Rejected"),
    };

    rsx!(span { class: "badge {class}", "{label}" })
}

/// Catalog tile linking to the livery's detail page.
#[component]
pub fn LiveryCard(livery: LiveryDto, #[props(default)] show_status: bool) -> Element {
    let cover = livery.screenshots.first().cloned();

    rsx!(Link {
        to: Route::LiveryDetail { id: livery.id },
        class: "card bg-base-200 shadow-sm hover:shadow-lg transition-shadow",
        figure {
            class: "aspect-video bg-base-300",
            if let Some(cover) = cover {
                img {
                    class: "w-full h-full object-cover",
                    src: "{cover}",
                    alt: "{livery.livery_name}",
                    loading: "lazy",
                }
            } else {
                Icon { width: 48, height: 48, icon: FaPlane }
            }
        }
        div {
            class: "card-body p-4 gap-1",
            h3 { class: "card-title text-base", "{livery.livery_name}" }
            p {
                class: "text-sm opacity-70",
                "{livery.manufacturer} {livery.aircraft} · {livery.brand}"
            }
            div {
                class: "flex items-center justify-between text-sm",
                if let Some(uploader) = &livery.uploader {
                    span { class: "opacity-70", "by {uploader.username}" }
                } else {
                    span {}
                }
                span {
                    class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaDownload }
                    "{livery.download_count}"
                }
            }
            if show_status {
                StatusBadge { status: livery.status }
            }
        }
    })
}
