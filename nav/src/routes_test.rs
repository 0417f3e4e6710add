use crate::{Location, testing::table};

fn name_of(path: &str) -> Option<String> {
    let table = table();
    let matched = table.resolve(&Location::parse(path).unwrap()).unwrap();
    matched.name().map(String::from)
}

#[test]
fn every_declared_path_resolves_to_its_own_name() {
    let cases = [
        ("/login", "login"),
        ("/dashboard", "dashboard-home"),
        ("/dashboard/patients", "patients"),
        ("/dashboard/appointments", "appointments"),
        ("/dashboard/treatments", "treatments"),
        ("/dashboard/profile", "profile"),
        ("/dashboard/medical-history", "medical-history"),
    ];
    for (path, name) in cases {
        assert_eq!(name_of(path).as_deref(), Some(name), "{path}");
        // Resolution is deterministic.
        assert_eq!(name_of(path), name_of(path));
    }
}

#[test]
fn names_are_unique() {
    let table = table();
    let names = table.names();
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
    assert_eq!(names.len(), 9);
}

#[test]
fn root_redirects_to_dashboard() {
    let table = table();
    let matched = table.resolve(&Location::parse("/").unwrap()).unwrap();
    assert_eq!(matched.name(), None);
    assert_eq!(matched.redirect(), Some("/dashboard"));
}

#[test]
fn unknown_paths_hit_the_catch_all() {
    for path in ["/unknown/path", "/dashboard/patients/42", "/logins"] {
        let table = table();
        let matched = table.resolve(&Location::parse(path).unwrap()).unwrap();
        assert!(matched.is_catch_all(), "{path}");
        assert_eq!(matched.name(), Some("not-found"));
        assert_eq!(matched.redirect(), Some("/dashboard"));
    }
}

#[test]
fn dashboard_children_nest_under_the_shell() {
    let table = table();
    let matched = table
        .resolve(&Location::parse("/dashboard/patients").unwrap())
        .unwrap();
    let chain: Vec<_> = matched.records().iter().map(|r| r.name()).collect();
    assert_eq!(chain, vec![Some("dashboard"), Some("patients")]);
    assert!(matched.requires_auth());
}

#[test]
fn login_is_public() {
    let table = table();
    let matched = table.resolve(&Location::parse("/login").unwrap()).unwrap();
    assert!(!matched.requires_auth());
}

#[test]
fn named_paths() {
    let table = table();
    assert_eq!(table.path_for("medical-history").as_deref(), Some("/dashboard/medical-history"));
    assert_eq!(table.path_for("dashboard").as_deref(), Some("/dashboard"));
}

#[test]
fn paths_match_regardless_of_case() {
    assert_eq!(name_of("/Dashboard/Patients").as_deref(), Some("patients"));
    assert_eq!(name_of("/LOGIN").as_deref(), Some("login"));
    assert_eq!(name_of("/dashboard/Medical-History").as_deref(), Some("medical-history"));
}
