use std::sync::Arc;

use dioxus::prelude::*;
use nav::{
    Config, LazyView, Navigation,
    routes::{ViewId, dashboard_routes},
};

mod session;
mod views;

use session::BrowserSession;
use views::{Appointments, DashboardHome, Login, MedicalHistory, Patients, Profile, Treatments};

pub type AppRouter = Arc<nav::Router<ViewId, BrowserSession>>;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationGuard)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[layout(DashboardShell)]
            #[route("/dashboard")]
            DashboardHome {},
            #[route("/dashboard/patients")]
            Patients {},
            #[route("/dashboard/appointments")]
            Appointments {},
            #[route("/dashboard/treatments")]
            Treatments {},
            #[route("/dashboard/profile")]
            Profile {},
            #[route("/dashboard/medical-history")]
            MedicalHistory {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();

    match app_router() {
        #[cfg(feature = "web")]
        Ok(router) => dioxus::LaunchBuilder::new().with_context(router).launch(App),
        #[cfg(not(feature = "web"))]
        Ok(_) => tracing::error!("no renderer: build with the `web` feature"),
        Err(e) => tracing::error!("failed to start router: {}", e),
    }
}

/// Configuration baked in when the bundle is built; wasm has no process environment.
fn build_time_var(name: &str) -> Option<String> {
    let value = match name {
        "CLINIC_GUARD_MODE" => option_env!("CLINIC_GUARD_MODE"),
        "CLINIC_LOGIN_PATH" => option_env!("CLINIC_LOGIN_PATH"),
        "CLINIC_HOME_PATH" => option_env!("CLINIC_HOME_PATH"),
        "CLINIC_MAX_REDIRECTS" => option_env!("CLINIC_MAX_REDIRECTS"),
        "CLINIC_SESSION_KEY" => option_env!("CLINIC_SESSION_KEY"),
        _ => None,
    };
    value.map(String::from)
}

fn app_router() -> types::Result<AppRouter> {
    app_router_with(&Config::from_lookup(build_time_var)?)
}

fn app_router_with(config: &Config) -> types::Result<AppRouter> {
    let table = dashboard_routes(LazyView::ready)?;
    let sessions = BrowserSession::new(&config.session_key);
    Ok(Arc::new(nav::Router::new(config, table, sessions)))
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Clinic Dashboard" }

        Router::<Route> {}
    }
}

/// Runs every navigation through the router before rendering the matched route.
#[component]
fn NavigationGuard() -> Element {
    let route: Route = use_route();
    let requested = route.to_string();
    let router = use_context::<AppRouter>();
    let navigation = use_resource(use_reactive!(|(route,)| {
        let router = router.clone();
        async move { router.navigate(&route.to_string()).await }
    }));

    match &*navigation.read() {
        Some(Ok(Navigation::Completed(resolved)))
            if resolved.was_redirected() || resolved.path() != requested =>
        {
            match resolved.location().to_string().parse::<Route>() {
                Ok(target) => {
                    navigator().replace(target);
                }
                Err(e) => tracing::error!("redirect to {} has no view: {}", resolved.location(), e),
            }
            rsx! {
                div { class: "loading", "Redirecting..." }
            }
        }
        Some(Ok(Navigation::Completed(_))) => rsx! {
            Outlet::<Route> {}
        },
        Some(Ok(Navigation::Superseded)) | None => rsx! {
            div { class: "loading", "Loading..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-banner",
                span { class: "error-banner-message", "{e}" }
            }
        },
    }
}

#[component]
fn DashboardShell() -> Element {
    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Clinic" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::DashboardHome {}, "Overview" }
                    NavLink { to: Route::Patients {}, "Patients" }
                    NavLink { to: Route::Appointments {}, "Appointments" }
                    NavLink { to: Route::Treatments {}, "Treatments" }
                    NavLink { to: Route::MedicalHistory {}, "Medical history" }
                    NavLink { to: Route::Profile {}, "Profile" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

// The guard redirects away from these before they render.

#[component]
fn Root() -> Element {
    rsx! {
        div { class: "loading", "Redirecting..." }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "loading", "Nothing at /{path}, redirecting..." }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
