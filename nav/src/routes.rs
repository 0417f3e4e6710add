//! The clinic dashboard's route table.

use types::Result;

use crate::{
    route::RouteRecord,
    table::RouteTable,
    view::LazyView,
};

/// Identity of every view the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    DashboardShell,
    DashboardHome,
    Patients,
    Appointments,
    Treatments,
    Profile,
    MedicalHistory,
}

pub fn dashboard_routes<V>(load: impl Fn(ViewId) -> LazyView<V>) -> Result<RouteTable<V>> {
    RouteTable::new(vec![
        RouteRecord::redirect("/", "/dashboard"),
        RouteRecord::view("/login", "login", load(ViewId::Login)).requires_auth(false),
        RouteRecord::view("/dashboard", "dashboard", load(ViewId::DashboardShell))
            .requires_auth(true)
            .children(vec![
                RouteRecord::view("", "dashboard-home", load(ViewId::DashboardHome)),
                RouteRecord::view("patients", "patients", load(ViewId::Patients)),
                RouteRecord::view("appointments", "appointments", load(ViewId::Appointments)),
                RouteRecord::view("treatments", "treatments", load(ViewId::Treatments)),
                RouteRecord::view("profile", "profile", load(ViewId::Profile)),
                RouteRecord::view(
                    "medical-history",
                    "medical-history",
                    load(ViewId::MedicalHistory),
                ),
            ]),
        RouteRecord::redirect("/*", "/dashboard").named("not-found"),
    ])
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
