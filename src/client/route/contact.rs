use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::Alert, Page},
        constant::SITE_NAME,
        store::user::UserState,
    },
    model::contact::{ContactType, SubmitContactDto},
};

#[cfg(feature = "web")]
use crate::client::api::contact::submit_contact;

#[component]
pub fn Contact() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let default_email = user_state
        .read()
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    let mut contact_type = use_signal(|| ContactType::General);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut email = use_signal(move || default_email);
    let mut related_livery_id = use_signal(String::new);
    let mut related_livery_info = use_signal(String::new);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<(&'static str, String)>);
    #[allow(unused_mut)]
    let mut sending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let related_id = related_livery_id().trim().to_string();
        let related_livery_id = if related_id.is_empty() {
            None
        } else {
            match related_id.parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    message.set(Some(("error", "Livery ID must be a number".to_string())));
                    return;
                }
            }
        };
        let info = related_livery_info().trim().to_string();

        #[allow(unused_variables)]
        let payload = SubmitContactDto {
            contact_type: contact_type(),
            title: title().trim().to_string(),
            content: content().trim().to_string(),
            email: email().trim().to_string(),
            related_livery_id,
            related_livery_info: (!info.is_empty()).then_some(info),
        };

        #[cfg(feature = "web")]
        {
            sending.set(true);
            spawn(async move {
                match submit_contact(payload).await {
                    Ok(_) => {
                        message.set(Some((
                            "success",
                            "Thanks, we'll get back to you by email.".to_string(),
                        )));
                        title.set(String::new());
                        content.set(String::new());
                    }
                    Err(err) => message.set(Some(("error", err.message))),
                }
                sending.set(false);
            });
        }
    };

    let needs_livery = matches!(
        contact_type(),
        ContactType::UploadError | ContactType::Copyright
    );

    rsx! {
        Title { "Contact | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            form {
                class: "w-full max-w-2xl flex flex-col gap-4",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "Contact us" }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| {
                        if let Ok(kind) = evt.value().parse() {
                            contact_type.set(kind);
                        }
                    },
                    for kind in ContactType::ALL {
                        option { key: "{kind}", value: "{kind}", selected: contact_type() == kind, {kind.label()} }
                    }
                }
                input {
                    class: "input input-bordered",
                    r#type: "email",
                    placeholder: "Your email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Subject",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                if needs_livery {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-3 gap-2",
                        input {
                            class: "input input-bordered",
                            placeholder: "Livery ID",
                            value: "{related_livery_id}",
                            oninput: move |evt| related_livery_id.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered sm:col-span-2",
                            placeholder: "Livery name or link",
                            value: "{related_livery_info}",
                            oninput: move |evt| related_livery_info.set(evt.value()),
                        }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered h-40",
                    placeholder: "Message",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
                if let Some((kind, text)) = message() {
                    Alert { kind, message: text }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    "Send"
                }
            }
        }
    }
}
