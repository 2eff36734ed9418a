use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlaneDeparture, Icon};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let nav = navigator();

    let state = user_state.read().clone();
    let user_logged_in = state.user.is_some();
    let user_is_admin = state.is_admin();
    let fetch_completed = state.fetched;

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(e) = logout().await {
                dioxus_logger::tracing::error!("Failed to log out: {}", e);
            }
            user_state.set(UserState {
                user: None,
                fetched: true,
            });
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 32, height: 32, icon: FaPlaneDeparture }
                    p {
                        class: "md:text-xl text-wrap font-semibold",
                        {SITE_NAME}
                    }
                }
            }
            nav {
                class: "hidden md:flex items-center gap-2",
                Link { to: Route::Liveries {}, class: "btn btn-ghost", "Browse" }
                if user_logged_in {
                    Link { to: Route::Upload {}, class: "btn btn-ghost", "Upload" }
                    Link { to: Route::MyLiveries {}, class: "btn btn-ghost", "My Liveries" }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                if user_is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                if let Some(user) = &state.user {
                    span { class: "hidden sm:inline opacity-70", "{user.username}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    "Logout"
                }
            } else if fetch_completed {
                Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
                Link { to: Route::Register {}, class: "btn btn-primary", "Sign up" }
            }
        }
    })
}
