//! Statistics dashboard fed by the read-only statistics endpoints.

use dioxus::prelude::*;

use api::models::{AppUsage, StatCard};
use ui::components::ErrorBanner;
use ui::use_session;

use crate::views::Navbar;
use crate::Route;

fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[component]
pub fn Statistics() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut days = use_signal(|| 7u32);
    let mut cards = use_signal(Vec::<StatCard>::new);
    let mut top_apps = use_signal(Vec::<AppUsage>::new);
    let mut error = use_signal(|| Option::<String>::None);

    if !session.state().is_authenticated() {
        nav.replace(Route::Auth {});
    }

    // Reload whenever the window changes; use_resource tracks `days`.
    let loader_session = session.clone();
    let _ = use_resource(move || {
        let session = loader_session.clone();
        let window = days();
        async move {
            error.set(None);
            let stats = session.statistics();
            match stats.overview(window).await {
                Ok(list) => cards.set(list),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            }
            match stats.top_apps(window, 10).await {
                Ok(list) => top_apps.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    rsx! {
        Navbar {}

        div {
            class: "page",

            div {
                class: "stats-header",
                h2 { "Statistics" }
                select {
                    class: "input",
                    value: "{days}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(window) = evt.value().parse() {
                            days.set(window);
                        }
                    },
                    option { value: "7", "Last 7 days" }
                    option { value: "30", "Last 30 days" }
                    option { value: "90", "Last 90 days" }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "stats-cards",
                for card in cards() {
                    div {
                        key: "{card.id}",
                        class: "stats-card stats-card-{card.color}",
                        span { class: "stats-card-label", "{card.label}" }
                        span { class: "stats-card-value", "{card.value}" }
                    }
                }
            }

            div {
                class: "stats-apps",
                h3 { "Top applications" }
                if top_apps().is_empty() {
                    p { class: "stats-empty", "No activity recorded in this window." }
                }
                for app in top_apps() {
                    div {
                        key: "{app.app}",
                        class: "stats-app-row",
                        span { class: "stats-app-name", "{app.app}" }
                        span { class: "stats-app-time", "{format_duration(app.duration_secs)}" }
                        div {
                            class: "stats-app-bar",
                            div {
                                class: "stats-app-bar-fill",
                                style: "width: {app.percent}%",
                            }
                        }
                    }
                }
            }
        }
    }
}
