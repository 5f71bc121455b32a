//! Timestamped debug dumps.
//!
//! Appends human-readable snapshots of arbitrary values to a text file.
//! The output is diagnostic only, not machine-parseable.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::error::Result;

/// Append a timestamped, pretty-printed representation of `value` to
/// `file_name`.
///
/// Each entry is a `/** ... */` header carrying the wall-clock time,
/// followed by the JSON rendering of the value. The file is created on
/// first use and the handle is closed on every exit path.
pub fn dump<T: Serialize>(value: &T, file_name: &Path) -> Result<()> {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
    let body = serde_json::to_string_pretty(value)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)?;
    writeln!(file, "/**\n* {}\n*/\n\n{}\n", stamp, body)?;
    Ok(())
}

/// [`dump`] into a date-stamped default file in the current directory.
pub fn dump_default<T: Serialize>(value: &T) -> Result<()> {
    let file_name = format!("dump {}.html", Local::now().format("%Y-%m-%d"));
    dump(value, Path::new(&file_name))
}
