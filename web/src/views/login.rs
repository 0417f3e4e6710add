use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Clinic" }
                    p { class: "login-subtitle", "Patients, appointments and treatments" }
                }
                p { class: "login-hint", "Sign in with your clinic account to continue." }
            }
        }
    }
}
