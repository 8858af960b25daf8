//! Log destination validation
//!
//! Runs before any writer task starts: each channel's parent directory must
//! exist and be readable and writable, and a target file that already exists
//! must itself be readable and writable. Failures are reported to the system
//! log and returned as permission errors naming exactly the offending path.

use crate::core::channel::ChannelKind;
use crate::core::error::{LoggerError, Result};
use crate::sinks::syslog;
use std::path::{Path, PathBuf};

/// Substitute the channel's default for an empty or all-whitespace path.
///
/// The substitution is reported to the system log so a misconfigured caller
/// can see which file actually receives its records.
pub(crate) fn resolve_path(kind: ChannelKind, supplied: &str) -> PathBuf {
    if supplied.trim().is_empty() {
        syslog::warning(format!(
            "{} log file path is empty, using default {}",
            kind,
            kind.default_path()
        ));
        PathBuf::from(kind.default_path())
    } else {
        PathBuf::from(supplied)
    }
}

/// Validate one destination: the parent directory first, then the file
/// itself if it already exists.
pub(crate) fn validate_target(kind: ChannelKind, path: &Path) -> Result<()> {
    let dir = parent_dir(path);
    if let Err(reason) = check_access(&dir) {
        let err = LoggerError::permission(
            dir.display().to_string(),
            format!("{} log directory {}", kind, reason),
        );
        syslog::err(err.to_string());
        return Err(err);
    }
    if path.exists() {
        if let Err(reason) = check_access(path) {
            let err = LoggerError::permission(
                path.display().to_string(),
                format!("existing {} log file {}", kind, reason),
            );
            syslog::err(err.to_string());
            return Err(err);
        }
    }
    Ok(())
}

/// Directory that will hold the log file; `.` for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(unix)]
fn check_access(path: &Path) -> std::result::Result<(), &'static str> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let cpath = match CString::new(path.as_os_str().as_bytes()) {
        Ok(cpath) => cpath,
        Err(_) => return Err("path contains an interior NUL byte"),
    };
    if unsafe { libc::access(cpath.as_ptr(), libc::F_OK) } != 0 {
        return Err("does not exist");
    }
    if unsafe { libc::access(cpath.as_ptr(), libc::R_OK) } != 0 {
        return Err("is not readable");
    }
    if unsafe { libc::access(cpath.as_ptr(), libc::W_OK) } != 0 {
        return Err("is not writable");
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_access(path: &Path) -> std::result::Result<(), &'static str> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return Err("does not exist"),
    };
    if metadata.permissions().readonly() {
        return Err("is not writable");
    }
    Ok(())
}
