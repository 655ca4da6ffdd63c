//! Platform-specific connection dialers

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "windows")]
pub mod windows;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialError {
    #[error("Failed to run {command}: {source}")]
    Command {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("VPN connection '{profile}' not found or invalid")]
    ProfileNotFound { profile: String },
    #[error("Failed to connect VPN: {detail} (code {code})")]
    DialFailed { code: u32, detail: String },
    #[error("Connection profile name is empty or exceeds {max} UTF-16 units")]
    InvalidProfileName { max: usize },
    #[error("Unsupported platform")]
    UnsupportedPlatform,
}

/// Platform-agnostic interface to the VPN connection subsystem.
///
/// A dialer activates exactly one pre-existing named connection profile per
/// call. It never creates, modifies, or removes the profile.
pub trait ConnectionDialer {
    /// Name of the fixed connection profile this dialer activates.
    fn profile_name(&self) -> &str;

    /// Attempt a single connection to the named profile.
    fn connect(&self) -> Result<(), DialError>;
}

/// Get the connection dialer for the current platform
pub fn dialer() -> Result<Box<dyn ConnectionDialer>, DialError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(linux::NetworkManagerDialer::new()))
    }

    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(windows::RasDialer::new()))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Err(DialError::UnsupportedPlatform)
    }
}
