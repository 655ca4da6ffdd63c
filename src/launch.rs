//! Connection launch orchestration
//!
//! Wires the route parser, privilege guard, and platform dialer into the
//! single flow the binary executes: parse the route, ensure privileges,
//! dial the fixed connection profile. No state survives the process.

use crate::elevation::{self, Privileges};
use crate::platform;
use crate::route::Route;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error(transparent)]
    Elevation(#[from] elevation::ElevationError),
    #[error(transparent)]
    Dial(#[from] platform::DialError),
}

/// How a launch ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The platform primitive reported the connection as established.
    Connected { profile: String },
    /// An elevated relaunch was spawned; this process did not connect and
    /// must exit 0, leaving the outcome to the elevated instance.
    Deferred,
}

/// Launch a connection for the given route string.
///
/// The parsed host is informational only; the dialed identity is always the
/// platform's fixed connection profile. Exactly one connection attempt is
/// made per call.
pub fn launch(route: &str) -> Result<LaunchOutcome, LaunchError> {
    let route = Route::parse(route);
    debug!("Route host: '{}'", route.host);

    match elevation::ensure_privileges()? {
        Privileges::Deferred => {
            debug!("Deferred to elevated instance");
            return Ok(LaunchOutcome::Deferred);
        }
        Privileges::Sufficient => {}
    }

    let dialer = platform::dialer()?;
    debug!("Dialing connection profile '{}'", dialer.profile_name());
    dialer.connect()?;

    Ok(LaunchOutcome::Connected {
        profile: dialer.profile_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::DialError;

    #[test]
    fn test_launch_error_preserves_dial_message() {
        let err: LaunchError = DialError::DialFailed {
            code: 691,
            detail: "Access denied".to_string(),
        }
        .into();

        // transparent: the reporter prints the inner message unchanged
        assert_eq!(
            err.to_string(),
            "Failed to connect VPN: Access denied (code 691)"
        );
    }

    #[test]
    fn test_launch_error_preserves_elevation_message() {
        let err: LaunchError =
            crate::elevation::ElevationError::Relaunch("declined".to_string()).into();
        assert_eq!(err.to_string(), "Failed to elevate privileges: declined");
    }
}
