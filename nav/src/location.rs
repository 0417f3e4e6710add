use std::fmt;

use eyre::WrapErr;
use types::{Result, err};
use url::Url;

/// Origin every in-app location is resolved against.
const APP_ORIGIN: &str = "http://app.invalid/";

/// A normalized in-app location: path plus optional query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Location {
    pub fn parse(input: &str) -> Result<Self> {
        let base = Url::parse(APP_ORIGIN).wrap_err("invalid application origin")?;
        // `//x` is a scheme-relative URL to `Url::join`; in a path it is just `/x`.
        let relative = match input.strip_prefix('/') {
            Some(rest) => format!("/{}", rest.trim_start_matches('/')),
            None => input.to_string(),
        };
        let url = base
            .join(&relative)
            .wrap_err_with(|| format!("invalid location `{}`", input))?;

        if url.origin() != base.origin() {
            return Err(err!("location `{}` leaves the application", input));
        }

        let path = match url.path().trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            path,
            query: url.query().map(String::from),
            fragment: url.fragment().map(String::from),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The same query and fragment at another path.
    pub(crate) fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
