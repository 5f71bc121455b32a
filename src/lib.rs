//! Grab-bag of stateless string, path, file, date, and URL helpers.
//!
//! - `text` - code-point string slicing and random strings
//! - `template` - `{{{key}}}` template substitution
//! - `files` - recursive copy, wildcard delete/list, whole-file IO
//! - `http` - blocking fetch of a remote file
//! - `paths` - text-level path parsing
//! - `datetime` - epoch-second calendar arithmetic and text formats
//! - `urls` - base64url encoding and URL scheme fixup
//! - `slugify` - URL-safe slug generation
//! - `num` - odd check, rounding, identity-ternary
//! - `debug` - timestamped value dumps
//!
//! The library holds no process-wide state; every function is a
//! blocking, immediate computation over its arguments.

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("files", "Skipping {}: {}", path, err);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod datetime;
pub mod debug;
pub mod error;
pub mod files;
pub mod http;
pub mod num;
pub mod paths;
pub mod slugify;
pub mod template;
pub mod text;
pub mod urls;

pub use error::{Error, Result};
