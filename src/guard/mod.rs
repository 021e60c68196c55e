//! Fixed-capacity probabilistic set used to keep treap priorities unique.

mod config;
mod priority_guard;

pub use self::config::GuardConfig;
pub use self::priority_guard::PriorityGuard;

use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for `guard`.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The slot list was empty or contained a zero-sized slot.
    InvalidConfiguration(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => write!(f, "invalid guard configuration: {}", reason),
        }
    }
}

/// Convenience `Result` type for `guard`.
pub type Result<T> = result::Result<T, Error>;
