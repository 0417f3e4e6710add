use std::future::Future;

use tracing::{debug, warn};
use types::{Result, Session};

use crate::{
    config::{Config, GuardMode},
    table::RouteMatch,
};

/// Read-only access to the backend's current session.
pub trait SessionProvider {
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>>>;
}

/// A fixed session, or none.
impl SessionProvider for Option<Session> {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// Who may see which route.
#[derive(Debug, Clone)]
pub struct AuthPolicy {
    login_path: String,
    home_path: String,
}

impl AuthPolicy {
    pub fn new(login_path: impl Into<String>, home_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            home_path: home_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.login_path, &config.home_path)
    }

    pub fn authorize<V>(&self, target: &RouteMatch<'_, V>, session: Option<&Session>) -> Decision {
        if target.requires_auth() && session.is_none() {
            return Decision::Redirect(self.login_path.clone());
        }
        if target.declared_path() == self.login_path && session.is_some() {
            return Decision::Redirect(self.home_path.clone());
        }
        Decision::Allow
    }
}

/// Pre-navigation hook.
#[derive(Debug, Clone)]
pub struct Guard {
    mode: GuardMode,
    policy: AuthPolicy,
}

impl Guard {
    pub fn new(mode: GuardMode, policy: AuthPolicy) -> Self {
        if mode == GuardMode::Bypass {
            warn!("authentication guard is bypassed: every route is reachable without a session");
        }
        Self { mode, policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.guard_mode, AuthPolicy::from_config(config))
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    pub async fn check<V, S>(&self, target: &RouteMatch<'_, V>, sessions: &S) -> Decision
    where
        S: SessionProvider,
    {
        if self.mode == GuardMode::Bypass {
            if target.requires_auth() {
                warn!(path = target.path(), "guard bypassed for protected route");
            }
            return Decision::Allow;
        }

        let session = match sessions.current_session().await {
            Ok(Some(session)) if session.is_expired() => {
                debug!("stored session has expired");
                None
            }
            Ok(session) => session,
            Err(error) => {
                warn!(%error, "session lookup failed, treating as signed out");
                None
            }
        };

        let decision = self.policy.authorize(target, session.as_ref());
        debug!(path = target.path(), ?decision, "guard decided");
        decision
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
