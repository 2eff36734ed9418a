use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    router::Route,
    store::user::UserState,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(state: &UserState, required_permissions: &[Permission]) -> bool {
    if state.user.is_none() {
        return false;
    }

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => state.is_admin(),
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let state = user_state.read().clone();
    let fetch_completed = state.fetched;
    let user_logged_in = state.user.is_some();
    let has_required_permissions = check_permissions(&state, &permissions);

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
    }
}
