use std::future::Future;

use types::Result;

use crate::view::LazyView;

/// Segment that turns a path into a catch-all.
pub const CATCH_ALL: &str = "*";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

#[derive(Debug, Clone)]
pub enum RouteTarget<V> {
    View(LazyView<V>),
    /// Absolute path to continue navigating to.
    Redirect(String),
}

/// A path-to-view binding, optionally with nested child routes.
///
/// Top-level paths are absolute (`/login`); child paths are relative to their
/// parent (`patients`, or `""` for the default child). A final `*` segment
/// matches any remaining segments.
#[derive(Debug, Clone)]
pub struct RouteRecord<V> {
    pub(crate) path: String,
    pub(crate) name: Option<String>,
    pub(crate) target: RouteTarget<V>,
    pub(crate) meta: RouteMeta,
    pub(crate) children: Vec<RouteRecord<V>>,
}

impl<V> RouteRecord<V> {
    pub fn view(path: impl Into<String>, name: impl Into<String>, view: LazyView<V>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            target: RouteTarget::View(view),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.meta.requires_auth = requires_auth;
        self
    }

    pub fn children(mut self, children: Vec<RouteRecord<V>>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_catch_all(&self) -> bool {
        self.path.rsplit('/').next() == Some(CATCH_ALL)
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter(|s| !s.is_empty() && *s != CATCH_ALL)
            .collect()
    }
}

impl<V: Clone + 'static> RouteRecord<V> {
    /// Shorthand for a view record whose loader is an async closure.
    pub fn lazy<F, Fut>(path: impl Into<String>, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V>> + 'static,
    {
        Self::view(path, name, LazyView::new(loader))
    }
}
