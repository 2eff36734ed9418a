use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::Alert, Page},
        constant::SITE_NAME,
    },
    model::{
        aircraft::{aircraft_for, allowed_brands, is_restricted, OTHER_BRAND},
        livery::{Manufacturer, MsfsVersion, MAX_SCREENSHOTS},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::{
            livery::create_livery,
            upload::{selected_files, upload_livery_file, upload_screenshot},
        },
        router::Route,
    },
    model::livery::CreateLiveryDto,
};

const SCREENSHOT_INPUT: &str = "screenshot-files";
const LIVERY_INPUT: &str = "livery-file";

/// Fields of the upload form before any file has been sent.
#[derive(Clone, PartialEq, Default)]
pub struct LiveryForm {
    pub manufacturer: Option<Manufacturer>,
    pub aircraft: String,
    pub brand: String,
    pub custom_brand: String,
    pub livery_name: String,
    pub description: String,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: String,
}

impl LiveryForm {
    /// Brand that will be submitted, resolving the free-text "Other" entry.
    pub fn resolved_brand(&self) -> String {
        if self.brand == OTHER_BRAND {
            self.custom_brand.trim().to_string()
        } else {
            self.brand.clone()
        }
    }

    /// First missing required field, if any.
    pub fn validate(&self) -> Result<Manufacturer, &'static str> {
        let Some(manufacturer) = self.manufacturer else {
            return Err("Choose a manufacturer");
        };
        if self.aircraft.trim().is_empty() {
            return Err("Choose an aircraft");
        }
        if self.resolved_brand().is_empty() {
            return Err("Choose a brand");
        }
        if self.livery_name.trim().is_empty() {
            return Err("Livery name is required");
        }
        Ok(manufacturer)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn Upload() -> Element {
    let mut form = use_signal(LiveryForm::default);
    #[allow(unused_mut)]
    let mut status = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_variables)]
    let nav = navigator();

    let current = form();
    let aircraft_options = current.manufacturer.map(aircraft_for).unwrap_or_default();
    let brand_options = allowed_brands(&current.aircraft);
    let offers_other = !is_restricted(&current.aircraft);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form();
        let manufacturer = match form.validate() {
            Ok(manufacturer) => manufacturer,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        #[cfg(feature = "web")]
        {
            let screenshots = selected_files(SCREENSHOT_INPUT);
            if screenshots.len() > MAX_SCREENSHOTS {
                error.set(Some(format!("At most {} screenshots", MAX_SCREENSHOTS)));
                return;
            }
            let Some(livery_file) = selected_files(LIVERY_INPUT).into_iter().next() else {
                error.set(Some("Choose the livery archive to upload".to_string()));
                return;
            };

            error.set(None);
            submitting.set(true);

            spawn(async move {
                let mut screenshot_urls = Vec::with_capacity(screenshots.len());
                for (index, file) in screenshots.iter().enumerate() {
                    status.set(Some(format!(
                        "Uploading screenshot {} of {}...",
                        index + 1,
                        screenshots.len()
                    )));
                    match upload_screenshot(file).await {
                        Ok(uploaded) => screenshot_urls.push(uploaded.url),
                        Err(err) => {
                            error.set(Some(err.form_message()));
                            status.set(None);
                            submitting.set(false);
                            return;
                        }
                    }
                }

                status.set(Some("Uploading livery file...".to_string()));
                let uploaded = match upload_livery_file(&livery_file).await {
                    Ok(uploaded) => uploaded,
                    Err(err) => {
                        error.set(Some(err.form_message()));
                        status.set(None);
                        submitting.set(false);
                        return;
                    }
                };

                status.set(Some("Saving livery...".to_string()));
                let payload = CreateLiveryDto {
                    manufacturer,
                    aircraft: form.aircraft.trim().to_string(),
                    brand: form.resolved_brand(),
                    livery_name: form.livery_name.trim().to_string(),
                    description: optional(&form.description),
                    msfs_version: form.msfs_version,
                    install_method: optional(&form.install_method),
                    screenshots: screenshot_urls,
                    file_url: uploaded.url,
                    file_key: uploaded.key,
                    file_name: Some(livery_file.name()),
                    file_size: Some(livery_file.size() as i64),
                };

                match create_livery(payload).await {
                    Ok(_) => {
                        status.set(Some(
                            "Upload complete. Your livery is pending review.".to_string(),
                        ));
                        gloo_timers::future::TimeoutFuture::new(1500).await;
                        nav.push(Route::MyLiveries {});
                    }
                    Err(err) => {
                        error.set(Some(err.form_message()));
                        status.set(None);
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = manufacturer;
    };

    rsx! {
        Title { "Upload | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            form {
                class: "w-full max-w-2xl flex flex-col gap-4",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "Upload a livery" }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-3 gap-2",
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            let mut form = form.write();
                            form.manufacturer = evt.value().parse().ok();
                            form.aircraft.clear();
                            form.brand.clear();
                        },
                        option { value: "", "Manufacturer" }
                        for m in Manufacturer::ALL {
                            option { key: "{m}", value: "{m}", selected: current.manufacturer == Some(m), "{m}" }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        disabled: current.manufacturer.is_none(),
                        onchange: move |evt| {
                            let mut form = form.write();
                            form.aircraft = evt.value();
                            form.brand.clear();
                        },
                        option { value: "", "Aircraft" }
                        for a in aircraft_options.iter() {
                            option { key: "{a}", value: "{a}", selected: current.aircraft == *a, "{a}" }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        disabled: current.aircraft.is_empty(),
                        onchange: move |evt| form.write().brand = evt.value(),
                        option { value: "", "Brand" }
                        for b in brand_options.iter() {
                            option { key: "{b}", value: "{b}", selected: current.brand == *b, "{b}" }
                        }
                        if offers_other {
                            option { value: OTHER_BRAND, selected: current.brand == OTHER_BRAND, "{OTHER_BRAND}" }
                        }
                    }
                }
                if current.brand == OTHER_BRAND {
                    input {
                        class: "input input-bordered",
                        placeholder: "Brand name",
                        value: "{current.custom_brand}",
                        oninput: move |evt| form.write().custom_brand = evt.value(),
                    }
                }
                if is_restricted(&current.aircraft) {
                    p {
                        class: "text-sm opacity-70",
                        "Only liveries made for these aircraft by the listed developers are accepted."
                    }
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Livery name",
                    value: "{current.livery_name}",
                    oninput: move |evt| form.write().livery_name = evt.value(),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| form.write().msfs_version = evt.value().parse().ok(),
                    option { value: "", "MSFS version (optional)" }
                    for v in MsfsVersion::ALL {
                        option { key: "{v}", value: "{v}", selected: current.msfs_version == Some(v), "MSFS {v}" }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered h-28",
                    placeholder: "Description (Markdown)",
                    value: "{current.description}",
                    oninput: move |evt| form.write().description = evt.value(),
                }
                textarea {
                    class: "textarea textarea-bordered h-28",
                    placeholder: "Installation instructions (Markdown)",
                    value: "{current.install_method}",
                    oninput: move |evt| form.write().install_method = evt.value(),
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Screenshots (up to {MAX_SCREENSHOTS})" }
                    input {
                        id: SCREENSHOT_INPUT,
                        class: "file-input file-input-bordered",
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Livery archive" }
                    input {
                        id: LIVERY_INPUT,
                        class: "file-input file-input-bordered",
                        r#type: "file",
                        accept: ".zip,.rar,.7z",
                    }
                }
                if let Some(message) = error() {
                    Alert { kind: "error", message }
                }
                if let Some(message) = status() {
                    Alert { kind: "info", message }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner" }
                    }
                    "Upload"
                }
            }
        }
    }
}
