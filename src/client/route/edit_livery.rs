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
        store::user::UserState,
    },
    model::livery::{LiveryDto, MsfsVersion, UpdateLiveryDto, MAX_SCREENSHOTS},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        livery::{get_livery, update_livery},
        upload::{selected_files, upload_screenshot},
    },
    router::Route,
};

const NEW_SCREENSHOT_INPUT: &str = "new-screenshot-files";

/// Builds the update payload, sending `None` for unchanged fields.
fn changes(original: &LiveryDto, edited: &LiveryDto) -> UpdateLiveryDto {
    fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
        (before != after).then(|| after.clone())
    }

    UpdateLiveryDto {
        livery_name: changed(&original.livery_name, &edited.livery_name),
        description: changed(&original.description, &edited.description).flatten(),
        msfs_version: changed(&original.msfs_version, &edited.msfs_version).flatten(),
        install_method: changed(&original.install_method, &edited.install_method).flatten(),
        screenshots: changed(&original.screenshots, &edited.screenshots),
    }
}

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn EditLivery(id: i32) -> Element {
    let user_state = use_context::<Signal<UserState>>();
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
                Ok(livery) => loaded.set(Some(livery.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch livery {}: {}", id, err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let is_owner = |livery: &LiveryDto| user_state.read().user_id() == Some(livery.user_id);

    rsx! {
        Title { "Edit Livery | {SITE_NAME}" }
        if let Some(livery) = loaded() {
            if is_owner(&livery) {
                EditForm { original: livery }
            } else {
                ErrorPage { status: 403, message: "Only the uploader can edit this livery" }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {  }
        }
    }
}

#[component]
fn EditForm(original: LiveryDto) -> Element {
    let original_copy = original.clone();
    let mut edited = use_signal(move || original_copy);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<(&'static str, String)>);
    #[allow(unused_mut)]
    let mut saving = use_signal(|| false);
    #[allow(unused_variables)]
    let nav = navigator();

    let current = edited();
    let id = original.id;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        #[allow(unused_variables)]
        let payload = changes(&original, &edited());

        #[cfg(feature = "web")]
        {
            let new_files = selected_files(NEW_SCREENSHOT_INPUT);
            if edited().screenshots.len() + new_files.len() > MAX_SCREENSHOTS {
                message.set(Some((
                    "error",
                    format!("At most {} screenshots", MAX_SCREENSHOTS),
                )));
                return;
            }

            saving.set(true);
            spawn(async move {
                let mut payload = payload;
                if !new_files.is_empty() {
                    let mut screenshots = edited().screenshots;
                    for file in &new_files {
                        match upload_screenshot(file).await {
                            Ok(uploaded) => screenshots.push(uploaded.url),
                            Err(err) => {
                                message.set(Some(("error", err.form_message())));
                                saving.set(false);
                                return;
                            }
                        }
                    }
                    payload.screenshots = Some(screenshots);
                }

                match update_livery(id, payload).await {
                    Ok(_) => {
                        message.set(Some(("success", "Changes saved".to_string())));
                        gloo_timers::future::TimeoutFuture::new(1000).await;
                        nav.push(Route::LiveryDetail { id });
                    }
                    Err(err) => {
                        message.set(Some(("error", err.form_message())));
                        saving.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        Page {
            class: "flex flex-col items-center",
            form {
                class: "w-full max-w-2xl flex flex-col gap-4",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "Edit livery" }
                p { class: "opacity-70", "{current.manufacturer} {current.aircraft} · {current.brand}" }
                input {
                    class: "input input-bordered",
                    placeholder: "Livery name",
                    value: "{current.livery_name}",
                    oninput: move |evt| edited.write().livery_name = evt.value(),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| edited.write().msfs_version = evt.value().parse().ok(),
                    option { value: "", "MSFS version" }
                    for v in MsfsVersion::ALL {
                        option { key: "{v}", value: "{v}", selected: current.msfs_version == Some(v), "MSFS {v}" }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered h-28",
                    placeholder: "Description (Markdown)",
                    value: current.description.clone().unwrap_or_default(),
                    oninput: move |evt| edited.write().description = optional(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered h-28",
                    placeholder: "Installation instructions (Markdown)",
                    value: current.install_method.clone().unwrap_or_default(),
                    oninput: move |evt| edited.write().install_method = optional(evt.value()),
                }
                div {
                    class: "flex flex-wrap gap-2",
                    for (index, src) in current.screenshots.iter().enumerate() {
                        div {
                            key: "{src}",
                            class: "relative",
                            img { class: "h-20 w-36 object-cover rounded", src: "{src}" }
                            button {
                                class: "btn btn-xs btn-circle btn-error absolute top-1 right-1",
                                r#type: "button",
                                onclick: move |_| {
                                    edited.write().screenshots.remove(index);
                                },
                                "✕"
                            }
                        }
                    }
                }
                if current.screenshots.len() < MAX_SCREENSHOTS {
                    input {
                        id: NEW_SCREENSHOT_INPUT,
                        class: "file-input file-input-bordered",
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                    }
                }
                if let Some((kind, text)) = message() {
                    Alert { kind, message: text }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Save changes"
                }
            }
        }
    }
}
