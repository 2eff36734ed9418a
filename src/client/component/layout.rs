use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        div {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 bg-base-200 text-sm opacity-70",
            p {
                "{SITE_NAME} is a community project and is not affiliated with Microsoft or Asobo Studio. "
                Link { to: Route::Contact {}, class: "link", "Contact us" }
            }
        }
    })
}
