//! Windows connection dialer backed by RAS
//!
//! Verifies that the pre-provisioned `HorseVPN` phone-book entry exists via
//! `RasGetEntryPropertiesW`, then dials it synchronously with `RasDialW`
//! using default credentials parameters. The entry name is copied into the
//! fixed-size `RASDIALPARAMSW` buffer through a bounds-checked UTF-16
//! encode; names that do not fit are rejected before any native call.

use super::{ConnectionDialer, DialError};
use tracing::debug;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::NetworkManagement::Ras::{
    RasDialW, RasGetEntryPropertiesW, RasGetErrorStringW, HRASCONN, RASDIALPARAMSW, RASENTRYW,
};

/// Name of the pre-provisioned RAS phone-book entry.
pub const PROFILE_NAME: &str = "HorseVPN";

pub struct RasDialer;

impl RasDialer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasDialer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionDialer for RasDialer {
    fn profile_name(&self) -> &str {
        PROFILE_NAME
    }

    fn connect(&self) -> Result<(), DialError> {
        ensure_entry_exists(PROFILE_NAME)?;
        dial_entry(PROFILE_NAME)
    }
}

/// Check that the phone-book entry exists and is readable.
///
/// A missing or unreadable entry fails the launch before any dial attempt.
fn ensure_entry_exists(profile: &str) -> Result<(), DialError> {
    let mut entry = RASENTRYW::default();
    entry.dwSize = std::mem::size_of::<RASENTRYW>() as u32;
    let mut size = entry.dwSize;

    let name = HSTRING::from(profile);
    let status = unsafe {
        RasGetEntryPropertiesW(
            PCWSTR::null(),
            PCWSTR::from_raw(name.as_ptr()),
            Some(&mut entry as *mut _),
            Some(&mut size as *mut _),
            None,
            None,
        )
    };

    if status != 0 {
        debug!("RasGetEntryPropertiesW returned {}", status);
        return Err(DialError::ProfileNotFound {
            profile: profile.to_string(),
        });
    }

    Ok(())
}

/// Dial the entry synchronously with default credentials parameters.
fn dial_entry(profile: &str) -> Result<(), DialError> {
    let mut params = RASDIALPARAMSW::default();
    params.dwSize = std::mem::size_of::<RASDIALPARAMSW>() as u32;
    params.szEntryName = encode_entry_name(profile)?;

    debug!("Dialing RAS entry '{}'", profile);

    let mut connection = HRASCONN::default();
    // No notifier: RasDial blocks until the connection attempt completes
    let status = unsafe {
        RasDialW(
            None,
            PCWSTR::null(),
            &params,
            0,
            None,
            &mut connection as *mut _,
        )
    };

    if status != 0 {
        return Err(DialError::DialFailed {
            code: status,
            detail: ras_error_string(status),
        });
    }

    Ok(())
}

/// Encode an entry name into a NUL-terminated fixed UTF-16 buffer.
///
/// Rejects empty names and names that would not fit with the terminator,
/// instead of truncating or overrunning the native field.
fn encode_entry_name<const N: usize>(name: &str) -> Result<[u16; N], DialError> {
    let wide: Vec<u16> = name.encode_utf16().collect();
    if wide.is_empty() || wide.len() >= N {
        return Err(DialError::InvalidProfileName { max: N - 1 });
    }

    let mut buf = [0u16; N];
    buf[..wide.len()].copy_from_slice(&wide);
    Ok(buf)
}

/// Human-readable text for a RAS status code.
fn ras_error_string(code: u32) -> String {
    let mut buf = [0u16; 512];
    let status = unsafe { RasGetErrorStringW(code, &mut buf) };

    if status == 0 {
        let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        let text = String::from_utf16_lossy(&buf[..len]).trim().to_string();
        if !text.is_empty() {
            return text;
        }
    }

    format!("RAS error {}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_entry_name_nul_terminated() {
        let buf: [u16; 257] = encode_entry_name(PROFILE_NAME).unwrap();
        let expected: Vec<u16> = PROFILE_NAME.encode_utf16().collect();
        assert_eq!(&buf[..expected.len()], expected.as_slice());
        assert_eq!(buf[expected.len()], 0);
    }

    #[test]
    fn test_encode_entry_name_rejects_empty() {
        let result: Result<[u16; 257], _> = encode_entry_name("");
        assert!(matches!(
            result,
            Err(DialError::InvalidProfileName { max: 256 })
        ));
    }

    #[test]
    fn test_encode_entry_name_rejects_overlong() {
        let long = "x".repeat(257);
        let result: Result<[u16; 257], _> = encode_entry_name(&long);
        assert!(matches!(result, Err(DialError::InvalidProfileName { .. })));
    }

    #[test]
    fn test_encode_entry_name_boundary() {
        // 256 units plus the terminator exactly fills the buffer
        let max = "x".repeat(256);
        let result: Result<[u16; 257], _> = encode_entry_name(&max);
        assert!(result.is_ok());
    }
}
