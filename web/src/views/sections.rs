//! Dashboard sections. Their content is served by the backend and is not
//! part of the routing shell.

use dioxus::prelude::*;

#[component]
fn SectionPage(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Patients() -> Element {
    rsx! {
        SectionPage { title: "Patients", subtitle: "Everyone registered with the clinic." }
    }
}

#[component]
pub fn Appointments() -> Element {
    rsx! {
        SectionPage { title: "Appointments", subtitle: "Upcoming and past visits." }
    }
}

#[component]
pub fn Treatments() -> Element {
    rsx! {
        SectionPage { title: "Treatments", subtitle: "Active and completed treatment plans." }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        SectionPage { title: "Profile", subtitle: "Your account details." }
    }
}

#[component]
pub fn MedicalHistory() -> Element {
    rsx! {
        SectionPage { title: "Medical history", subtitle: "Diagnoses, allergies and past procedures." }
    }
}
