//! Privilege guard
//!
//! Managing network connections needs administrative rights on Windows,
//! where an unprivileged process relaunches itself elevated and defers the
//! actual work to the new instance. On Linux the connection command performs
//! its own authorization (polkit), so the guard is a pass-through.

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("Failed to query process privileges: {0}")]
    Query(String),
    #[error("Failed to elevate privileges: {0}")]
    Relaunch(String),
}

/// Outcome of the privilege check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privileges {
    /// The current process may proceed to the connection attempt.
    Sufficient,
    /// An elevated relaunch was requested; the current process must exit
    /// with code 0 without connecting. The elevated instance does the work.
    Deferred,
}

/// Ensure the process holds the rights required to manage connections.
///
/// May spawn an elevated copy of this executable (Windows) and may show a
/// native elevation prompt. A declined or failed prompt is an error; the
/// launcher never continues unprivileged after asking for elevation.
pub fn ensure_privileges() -> Result<Privileges, ElevationError> {
    #[cfg(target_os = "linux")]
    {
        linux::ensure_privileges()
    }

    #[cfg(target_os = "windows")]
    {
        windows::ensure_privileges()
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Ok(Privileges::Sufficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_error_display() {
        let err = ElevationError::Relaunch("prompt was declined".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to elevate privileges: prompt was declined"
        );

        let err = ElevationError::Query("no process token".to_string());
        assert!(err.to_string().contains("no process token"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_guard_is_pass_through() {
        // polkit handles authorization at dial time; the guard never defers
        let result = ensure_privileges();
        assert_eq!(result.unwrap(), Privileges::Sufficient);
    }
}
