use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let user = match get_user().await {
            Ok(user) => user,
            Err(e) => {
                dioxus_logger::tracing::error!("Failed to fetch user: {}", e);
                None
            }
        };
        user_state.set(UserState {
            user,
            fetched: true,
        });
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Share and download community liveries for Microsoft Flight Simulator"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
