use dioxus::prelude::*;

use ui::{use_session, LogoutButton};

use crate::Route;

/// Top bar shared by the signed-in views.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session.state();

    rsx! {
        nav {
            class: "navbar",

            Link { class: "navbar-brand", to: Route::Home {}, "Watchboard" }

            div {
                class: "navbar-links",
                if state.is_authenticated() {
                    Link { class: "navbar-link", to: Route::Profile {}, "Profile" }
                    Link { class: "navbar-link", to: Route::Statistics {}, "Statistics" }
                    LogoutButton { class: "btn btn-secondary" }
                } else {
                    Link { class: "navbar-link", to: Route::Auth {}, "Sign in" }
                }
            }
        }
    }
}
