//! Errors raised by the few fallible entry points of the crate.
//!
//! Path operations themselves never fail; only turning user input
//! into a configuration (such as a dialect name) can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown path dialect {0:?}, expected `posix` or `windows`")]
    UnknownDialect(String),

    #[error("unknown verbatim policy {0:?}, expected `preserve` or `normalize`")]
    UnknownVerbatim(String),
}

pub type Result<T> = std::result::Result<T, Error>;
