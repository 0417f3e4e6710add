use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};
use types::{Result, err};

use crate::{
    config::Config,
    guard::{Decision, Guard, SessionProvider},
    location::Location,
    table::{RouteMatch, RouteTable},
};

/// Outcome of a navigation attempt.
#[derive(Debug)]
pub enum Navigation<V> {
    Completed(ResolvedRoute<V>),
    /// A newer navigation started while this one was suspended.
    Superseded,
}

#[derive(Debug)]
pub struct ResolvedRoute<V> {
    location: Location,
    name: Option<String>,
    views: Vec<V>,
    redirected_from: Vec<String>,
}

impl<V> ResolvedRoute<V> {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn path(&self) -> &str {
        self.location.path()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Loaded views, outermost first.
    pub fn views(&self) -> &[V] {
        &self.views
    }

    pub fn redirected_from(&self) -> &[String] {
        &self.redirected_from
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirected_from.is_empty()
    }
}

pub struct Router<V, S> {
    table: RouteTable<V>,
    guard: Guard,
    sessions: S,
    max_redirects: usize,
    latest: AtomicU64,
}

impl<V, S> Router<V, S>
where
    V: Clone + 'static,
    S: SessionProvider,
{
    pub fn new(config: &Config, table: RouteTable<V>, sessions: S) -> Self {
        info!(
            guard = ?config.guard_mode,
            routes = table.names().len(),
            "router ready"
        );
        Self {
            table,
            guard: Guard::from_config(config),
            sessions,
            max_redirects: config.max_redirects,
            latest: AtomicU64::new(0),
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    pub fn resolve(&self, to: &str) -> Result<RouteMatch<'_, V>> {
        let location = Location::parse(to)?;
        self.table
            .resolve(&location)
            .ok_or_else(|| err!("no route matches `{}`", location))
    }

    pub async fn navigate(&self, to: &str) -> Result<Navigation<V>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let mut location = Location::parse(to)?;
        let mut redirected_from = Vec::new();

        loop {
            let target = self
                .table
                .resolve(&location)
                .ok_or_else(|| err!("no route matches `{}`", location))?;

            let next = match target.redirect() {
                Some(to) => Some(to.to_string()),
                None => match self.guard.check(&target, &self.sessions).await {
                    Decision::Allow => None,
                    Decision::Redirect(to) => Some(to),
                },
            };
            if self.superseded(ticket) {
                return Ok(Navigation::Superseded);
            }

            let Some(next) = next else {
                let mut views = Vec::new();
                for view in target.views() {
                    views.push(view.load().await?);
                    if self.superseded(ticket) {
                        return Ok(Navigation::Superseded);
                    }
                }
                return Ok(Navigation::Completed(ResolvedRoute {
                    name: target.name().map(String::from),
                    location: location.with_path(target.declared_path()),
                    views,
                    redirected_from,
                }));
            };

            if redirected_from.len() >= self.max_redirects {
                return Err(err!(
                    "too many redirects navigating to `{}` (last hop `{}`)",
                    to,
                    next
                ));
            }
            debug!(from = %location, to = %next, "redirecting");
            redirected_from.push(location.to_string());
            location = Location::parse(&next)?;
        }
    }

    fn superseded(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) != ticket
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
