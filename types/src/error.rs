use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed navigation or session lookup, flattened to the text the shell shows.
///
/// Built from an [`eyre::Report`]; the whole context chain is kept on one line,
/// outermost context first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        Self {
            message: format!("{:#}", report),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
