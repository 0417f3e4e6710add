use super::*;
use nav::Location;

#[test]
fn every_route_is_declared_in_the_route_table() {
    let table = dashboard_routes(LazyView::ready).unwrap();
    let cases = [
        (Route::Root {}, None),
        (Route::Login {}, Some("login")),
        (Route::DashboardHome {}, Some("dashboard-home")),
        (Route::Patients {}, Some("patients")),
        (Route::Appointments {}, Some("appointments")),
        (Route::Treatments {}, Some("treatments")),
        (Route::Profile {}, Some("profile")),
        (Route::MedicalHistory {}, Some("medical-history")),
        (
            Route::NotFound {
                segments: vec!["unknown".into(), "path".into()],
            },
            Some("not-found"),
        ),
    ];

    for (route, name) in cases {
        let location = Location::parse(&route.to_string()).unwrap();
        let matched = table.resolve(&location).unwrap();
        assert_eq!(matched.name(), name, "{route}");
    }
}

#[test]
fn redirect_targets_are_routes() {
    assert_eq!("/dashboard".parse::<Route>().unwrap(), Route::DashboardHome {});
    assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
}

#[test]
fn config_comes_from_build_time_values() {
    assert_eq!(
        build_time_var("CLINIC_SESSION_KEY"),
        option_env!("CLINIC_SESSION_KEY").map(String::from)
    );
    assert_eq!(
        build_time_var("CLINIC_GUARD_MODE"),
        option_env!("CLINIC_GUARD_MODE").map(String::from)
    );
    assert_eq!(build_time_var("HOME"), None);

    let config = Config::from_lookup(build_time_var).unwrap();
    let expected_key = option_env!("CLINIC_SESSION_KEY").unwrap_or(nav::DEFAULT_SESSION_KEY);
    assert_eq!(config.session_key, expected_key);
}

#[test]
fn app_router_uses_the_given_config() {
    let config = Config {
        guard_mode: nav::GuardMode::Bypass,
        session_key: "sb-clinic-auth-token".into(),
        ..Config::default()
    };
    let router = app_router_with(&config).unwrap();
    assert_eq!(router.guard().mode(), nav::GuardMode::Bypass);
}

#[test]
fn app_router_builds_from_build_time_config() {
    assert!(app_router().is_ok());
}

#[test]
fn mixed_case_request_is_a_catch_all_route_until_replaced() {
    // The Routable enum matches exactly; the router resolves case-insensitively,
    // so the guard layout replaces the URL with the declared path.
    let route: Route = "/Dashboard/Patients".parse().unwrap();
    assert!(matches!(route, Route::NotFound { .. }));
    assert_eq!("/dashboard/patients".parse::<Route>().unwrap(), Route::Patients {});
}
