//! Linux connection dialer backed by NetworkManager
//!
//! Activates the pre-provisioned `horsevpn` connection profile through
//! `nmcli`. The command is executed without a shell and without `sudo`;
//! NetworkManager requests its own authorization via polkit when the caller
//! lacks the `network-control` privilege.

use super::{ConnectionDialer, DialError};
use crate::exec::{CommandRunner, SystemRunner};
use tracing::debug;

/// Name of the pre-provisioned NetworkManager connection profile.
pub const PROFILE_NAME: &str = "horsevpn";

/// nmcli exit status for "connection, device, or access point does not exist"
const NMCLI_NOT_FOUND: i32 = 10;

pub struct NetworkManagerDialer<R = SystemRunner> {
    runner: R,
}

impl NetworkManagerDialer<SystemRunner> {
    pub fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl Default for NetworkManagerDialer<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> NetworkManagerDialer<R> {
    /// Build a dialer over a custom runner (for testing).
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ConnectionDialer for NetworkManagerDialer<R> {
    fn profile_name(&self) -> &str {
        PROFILE_NAME
    }

    fn connect(&self) -> Result<(), DialError> {
        debug!("Activating NetworkManager connection '{}'", PROFILE_NAME);

        let output = self
            .runner
            .run("nmcli", &["connection", "up", PROFILE_NAME])
            .map_err(|e| DialError::Command {
                command: "nmcli".to_string(),
                source: e,
            })?;

        if output.success() {
            return Ok(());
        }

        // Signal-terminated processes have no exit code; report as generic failure
        let code = output.code.unwrap_or(1);
        let detail = first_line(&output.stderr);
        debug!("nmcli exited with code {}: {}", code, detail);

        if code == NMCLI_NOT_FOUND {
            return Err(DialError::ProfileNotFound {
                profile: PROFILE_NAME.to_string(),
            });
        }

        Err(DialError::DialFailed {
            code: code as u32,
            detail,
        })
    }
}

/// First non-empty stderr line, or a placeholder when the command was silent.
fn first_line(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("nmcli reported no error output")
        .to_string()
}
