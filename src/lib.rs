//! Lexical path manipulation for POSIX and Windows paths.
//!
//! Parses, cleans and splits path strings without touching the
//! filesystem. The dialect is a value, not a build setting, so one
//! binary can handle both kinds of path:
//!
//! ```
//! use pathlex::PathLexer;
//!
//! assert_eq!(PathLexer::POSIX.clean("path/to/../file"), "path/file");
//! assert_eq!(PathLexer::WINDOWS.clean("C:foo/.."), "C:.");
//! assert_eq!(PathLexer::WINDOWS.split("C:"), ("C:", ""));
//! ```
//!
//! The free functions use the dialect of the compilation target.

mod error;
pub mod filepath;

pub use error::{Error, Result};
pub use filepath::{
    base, clean, dir, ext, from_slash, split, to_slash, volume_name, Dialect, PathLexer, Verbatim,
};
