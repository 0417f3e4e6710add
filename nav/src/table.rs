use std::collections::HashSet;

use tracing::debug;
use types::{Result, err};

use crate::{
    location::Location,
    route::{CATCH_ALL, RouteRecord, RouteTarget},
    view::LazyView,
};

/// The ordered, validated route table. Immutable once built.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    records: Vec<RouteRecord<V>>,
}

/// A structural match: the matched records from the outermost parent to the leaf.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    records: Vec<&'a RouteRecord<V>>,
    location: Location,
    path_match: Vec<String>,
}

impl<V> RouteTable<V> {
    pub fn new(records: Vec<RouteRecord<V>>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut catch_alls = 0;
        validate(&records, true, &mut names, &mut catch_alls)?;
        let named = names.len();

        if catch_alls != 1 {
            return Err(err!(
                "route table needs exactly one catch-all route, found {}",
                catch_alls
            ));
        }
        match records.last() {
            Some(last) if last.is_catch_all() => {
                if !matches!(last.target, RouteTarget::Redirect(_)) {
                    return Err(err!("catch-all route `{}` must redirect", last.path));
                }
            }
            _ => return Err(err!("catch-all route must be the last top-level route")),
        }

        let table = Self { records };
        table.check_redirects(&table.records)?;
        debug!(named, "route table built");
        Ok(table)
    }

    pub fn records(&self) -> &[RouteRecord<V>] {
        &self.records
    }

    /// First structural match in table order. Children are tried before their parent.
    pub fn resolve(&self, location: &Location) -> Option<RouteMatch<'_, V>> {
        let segments = location.segments();
        let mut chain = Vec::new();
        let (records, path_match) = match_in(&self.records, &segments, &mut chain)?;
        let matched = RouteMatch {
            records,
            location: location.clone(),
            path_match,
        };
        debug!(path = location.path(), name = ?matched.name(), "resolved route");
        Some(matched)
    }

    /// Full path of a named route. The catch-all has no path of its own.
    pub fn path_for(&self, name: &str) -> Option<String> {
        path_for_in(&self.records, "", name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_names(&self.records, &mut names);
        names
    }

    fn check_redirects(&self, records: &[RouteRecord<V>]) -> Result<()> {
        for record in records {
            if let RouteTarget::Redirect(to) = &record.target {
                let location = Location::parse(to)?;
                match self.resolve(&location) {
                    Some(target) if !target.is_catch_all() => {}
                    _ => {
                        return Err(err!(
                            "redirect from `{}` to `{}` does not reach a declared route",
                            record.path,
                            to
                        ));
                    }
                }
            }
            self.check_redirects(&record.children)?;
        }
        Ok(())
    }
}

fn validate<'a, V>(
    records: &'a [RouteRecord<V>],
    top_level: bool,
    names: &mut HashSet<&'a str>,
    catch_alls: &mut usize,
) -> Result<()> {
    for record in records {
        let path = record.path.as_str();
        if top_level && !path.starts_with('/') {
            return Err(err!("top-level route path `{}` must start with `/`", path));
        }
        if !top_level && path.starts_with('/') {
            return Err(err!("child route path `{}` must be relative", path));
        }
        if path.split('/').rev().skip(1).any(|s| s == CATCH_ALL) {
            return Err(err!("`{}` may only end a route path", CATCH_ALL));
        }

        if let Some(name) = record.name.as_deref() {
            if !names.insert(name) {
                return Err(err!("duplicate route name `{}`", name));
            }
        }
        if record.is_catch_all() {
            *catch_alls += 1;
        }

        if let RouteTarget::Redirect(to) = &record.target {
            if !to.starts_with('/') {
                return Err(err!("redirect target `{}` must be an absolute path", to));
            }
            if !record.children.is_empty() {
                return Err(err!("redirect route `{}` cannot have children", path));
            }
        }

        validate(&record.children, false, names, catch_alls)?;
    }
    Ok(())
}

type Matched<'a, V> = (Vec<&'a RouteRecord<V>>, Vec<String>);

fn match_in<'a, V>(
    records: &'a [RouteRecord<V>],
    segments: &[&str],
    chain: &mut Vec<&'a RouteRecord<V>>,
) -> Option<Matched<'a, V>> {
    for record in records {
        let prefix = record.segments();
        let Some(rest) = strip_segments(segments, &prefix) else {
            continue;
        };

        if record.is_catch_all() {
            let mut matched = chain.clone();
            matched.push(record);
            return Some((matched, rest.iter().map(|s| s.to_string()).collect()));
        }

        chain.push(record);
        if let Some(found) = match_in(&record.children, rest, chain) {
            return Some(found);
        }
        if rest.is_empty() {
            return Some((chain.clone(), Vec::new()));
        }
        chain.pop();
    }
    None
}

/// Segment prefix match, ignoring ASCII case.
fn strip_segments<'s, 'p>(segments: &'s [&'p str], prefix: &[&str]) -> Option<&'s [&'p str]> {
    if segments.len() < prefix.len() {
        return None;
    }
    let (head, rest) = segments.split_at(prefix.len());
    head.iter()
        .zip(prefix)
        .all(|(segment, expected)| segment.eq_ignore_ascii_case(expected))
        .then_some(rest)
}

fn path_for_in<V>(records: &[RouteRecord<V>], parent: &str, name: &str) -> Option<String> {
    for record in records {
        if record.is_catch_all() {
            continue;
        }
        let full = join_path(parent, &record.path);
        if record.name.as_deref() == Some(name) {
            return Some(full);
        }
        if let Some(found) = path_for_in(&record.children, &full, name) {
            return Some(found);
        }
    }
    None
}

fn join_path(parent: &str, path: &str) -> String {
    let joined = if path.starts_with('/') || parent.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        parent.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), path)
    };
    if joined.is_empty() { "/".into() } else { joined }
}

fn collect_names<'a, V>(records: &'a [RouteRecord<V>], names: &mut Vec<&'a str>) {
    for record in records {
        if let Some(name) = record.name.as_deref() {
            names.push(name);
        }
        collect_names(&record.children, names);
    }
}

impl<'a, V> RouteMatch<'a, V> {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn path(&self) -> &str {
        self.location.path()
    }

    /// The matched path as the table declares it, e.g. `/dashboard/patients`
    /// for a request to `/Dashboard/Patients/`.
    pub fn declared_path(&self) -> String {
        self.records
            .iter()
            .fold(String::new(), |parent, record| join_path(&parent, &record.path))
    }

    pub fn records(&self) -> &[&'a RouteRecord<V>] {
        &self.records
    }

    pub fn leaf(&self) -> &'a RouteRecord<V> {
        // A match always holds at least the record that matched.
        self.records[self.records.len() - 1]
    }

    pub fn name(&self) -> Option<&'a str> {
        self.leaf().name()
    }

    /// True if any record in the matched chain requires authentication.
    pub fn requires_auth(&self) -> bool {
        self.records.iter().any(|r| r.meta.requires_auth)
    }

    pub fn redirect(&self) -> Option<&'a str> {
        match &self.leaf().target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.leaf().is_catch_all()
    }

    /// Segments swallowed by a catch-all.
    pub fn path_match(&self) -> &[String] {
        &self.path_match
    }

    /// Views of the matched chain, outermost first.
    pub fn views(&self) -> impl Iterator<Item = &'a LazyView<V>> + '_ {
        self.records.iter().copied().filter_map(|r| match &r.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        })
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
