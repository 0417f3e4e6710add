use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Today's clinic at a glance." }
            }
            div { class: "dashboard-grid",
                DashboardCard {
                    to: Route::Patients {},
                    title: "Patients",
                    description: "Look up patient records and contact details.",
                }
                DashboardCard {
                    to: Route::Appointments {},
                    title: "Appointments",
                    description: "See and schedule upcoming visits.",
                }
                DashboardCard {
                    to: Route::Treatments {},
                    title: "Treatments",
                    description: "Track treatment plans and their progress.",
                }
            }
        }
    }
}

#[component]
fn DashboardCard(to: Route, title: String, description: String) -> Element {
    rsx! {
        Link {
            to,
            class: "dashboard-card",
            h3 { class: "dashboard-card-title", "{title}" }
            p { class: "dashboard-card-desc", "{description}" }
        }
    }
}
