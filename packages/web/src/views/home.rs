use dioxus::prelude::*;

use ui::use_session;

use crate::views::Navbar;
use crate::Route;

/// Landing page. Signed-in users go straight to their profile.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session.state().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    rsx! {
        Navbar {}

        div {
            class: "hero",

            h1 { class: "hero-title", "Watchboard" }
            p {
                class: "hero-subtitle",
                "Self-hosted activity tracking for all of your devices."
            }
            Link {
                class: "btn btn-primary",
                to: Route::Auth {},
                "Get started"
            }
        }
    }
}
