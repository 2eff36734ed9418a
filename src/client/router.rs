use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Admin, Contact, EditLivery, Home, Liveries, LiveryDetail, Login, MyLiveries, NotFound,
    Register, ResetPassword, Upload, VerifyEmail,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/liveries")]
        Liveries {},

        #[route("/livery/:id")]
        LiveryDetail { id: i32 },

        #[route("/contact")]
        Contact {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/verify-email?:token")]
        VerifyEmail { token: String },

        #[route("/reset-password?:token")]
        ResetPassword { token: String },

        #[layout(RequiresLoggedIn)]
            #[route("/upload")]
            Upload {},

            #[route("/my-liveries")]
            MyLiveries {},

            #[route("/livery/:id/edit")]
            EditLivery { id: i32 },
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin")]
            Admin {},
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
