use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{Alert, ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{contact::ContactDto, livery::LiveryDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::admin::{get_contacts, get_pending_liveries, review_livery},
    model::livery::ReviewDecisionDto,
};

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Pending,
    Contacts,
}

#[component]
pub fn Admin() -> Element {
    let mut tab = use_signal(|| AdminTab::Pending);

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-2xl", "Admin panel" }
                div {
                    role: "tablist",
                    class: "tabs tabs-boxed w-fit",
                    a {
                        role: "tab",
                        class: if tab() == AdminTab::Pending { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(AdminTab::Pending),
                        "Pending liveries"
                    }
                    a {
                        role: "tab",
                        class: if tab() == AdminTab::Contacts { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(AdminTab::Contacts),
                        "Messages"
                    }
                }
                match tab() {
                    AdminTab::Pending => rsx! { PendingLiveries {} },
                    AdminTab::Contacts => rsx! { ContactMessages {} },
                }
            }
        }
    }
}

#[component]
fn PendingLiveries() -> Element {
    #[allow(unused_mut)]
    let mut liveries = use_signal(|| None::<Vec<LiveryDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    // Re-runs when refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_pending_liveries().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    liveries.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch pending liveries: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        if let Some(list) = liveries() {
            if list.is_empty() {
                p { class: "text-center py-8 opacity-60", "Nothing waiting for review." }
            } else {
                div {
                    class: "flex flex-col gap-3",
                    for livery in list {
                        ReviewRow { key: "{livery.id}", livery: livery.clone(), refetch_trigger }
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
fn ReviewRow(livery: LiveryDto, mut refetch_trigger: Signal<u32>) -> Element {
    let mut notes = use_signal(String::new);
    #[allow(unused_mut)]
    let mut row_error = use_signal(|| None::<String>);
    let id = livery.id;

    #[allow(unused_variables)]
    let decide = move |approved: bool| {
        #[cfg(feature = "web")]
        spawn(async move {
            let decision = ReviewDecisionDto {
                approved,
                notes: notes().trim().to_string(),
            };
            match review_livery(id, decision).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => row_error.set(Some(err.message)),
            }
        });
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body p-4 flex flex-col md:flex-row gap-4",
                if let Some(cover) = livery.screenshots.first() {
                    img { class: "h-24 w-40 object-cover rounded", src: "{cover}" }
                }
                div {
                    class: "flex-1 flex flex-col gap-1",
                    Link {
                        to: Route::LiveryDetail { id },
                        class: "link font-semibold",
                        "{livery.livery_name}"
                    }
                    p { class: "text-sm opacity-70", "{livery.manufacturer} {livery.aircraft} · {livery.brand}" }
                    if let Some(uploader) = &livery.uploader {
                        p { class: "text-sm opacity-70", "by {uploader.username}" }
                    }
                    input {
                        class: "input input-bordered input-sm",
                        placeholder: "Review notes",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                    if let Some(message) = row_error() {
                        Alert { kind: "error", message }
                    }
                }
                div {
                    class: "flex md:flex-col gap-2",
                    button { class: "btn btn-success btn-sm", onclick: move |_| decide(true), "Approve" }
                    button { class: "btn btn-error btn-sm", onclick: move |_| decide(false), "Reject" }
                }
            }
        }
    }
}

#[component]
fn ContactMessages() -> Element {
    #[allow(unused_mut)]
    let mut contacts = use_signal(|| None::<Vec<ContactDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_contacts().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => contacts.set(Some(list.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch contact messages: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        if let Some(list) = contacts() {
            if list.is_empty() {
                p { class: "text-center py-8 opacity-60", "No messages." }
            } else {
                div {
                    class: "flex flex-col gap-3",
                    for contact in list {
                        div {
                            key: "{contact.id}",
                            class: "card bg-base-200",
                            div {
                                class: "card-body p-4 gap-1",
                                div {
                                    class: "flex items-center justify-between gap-2",
                                    h3 { class: "font-semibold", "{contact.title}" }
                                    span { class: "badge", {contact.contact_type.label()} }
                                }
                                p {
                                    class: "text-sm opacity-70",
                                    "{contact.email} · "
                                    {contact.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                }
                                if let Some(livery_id) = contact.related_livery_id {
                                    Link { to: Route::LiveryDetail { id: livery_id }, class: "link text-sm", "Livery #{livery_id}" }
                                }
                                if let Some(info) = &contact.related_livery_info {
                                    p { class: "text-sm", "{info}" }
                                }
                                p { class: "whitespace-pre-wrap", "{contact.content}" }
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
