mod error;
mod session;

pub use error::{Error, Result};
pub use session::{Session, SessionUser, decode_session, encode_session};

#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_eyre_dont_use!($($arg)*))
    };
}
