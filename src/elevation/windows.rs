//! Windows privilege guard
//!
//! RAS connection management requires an elevated token. An unprivileged
//! process relaunches itself through the shell `runas` verb (which shows the
//! UAC prompt), passes its arguments through unchanged, and reports
//! `Deferred` so the caller exits 0. The elevated instance then runs the
//! same code path with `Sufficient` privileges.

use super::{ElevationError, Privileges};
use tracing::debug;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND};
use windows::Win32::Security::{
    GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY,
};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

pub fn ensure_privileges() -> Result<Privileges, ElevationError> {
    if is_elevated()? {
        debug!("Process token is elevated");
        return Ok(Privileges::Sufficient);
    }

    debug!("Token not elevated, requesting relaunch via UAC");
    relaunch_elevated()?;
    Ok(Privileges::Deferred)
}

/// Query the process token for elevation.
fn is_elevated() -> Result<bool, ElevationError> {
    unsafe {
        let mut token = HANDLE::default();
        OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token)
            .map_err(|e| ElevationError::Query(e.to_string()))?;

        let mut elevation = TOKEN_ELEVATION::default();
        let mut returned = 0u32;
        let result = GetTokenInformation(
            token,
            TokenElevation,
            Some(&mut elevation as *mut _ as *mut _),
            std::mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut returned,
        );
        let _ = CloseHandle(token);

        result.map_err(|e| ElevationError::Query(e.to_string()))?;
        Ok(elevation.TokenIsElevated != 0)
    }
}

/// Relaunch this executable elevated, passing the original arguments through.
fn relaunch_elevated() -> Result<(), ElevationError> {
    let exe = std::env::current_exe()
        .map_err(|e| ElevationError::Relaunch(format!("cannot locate executable: {}", e)))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parameters = parameter_string(&args);

    let verb = HSTRING::from("runas");
    let file = HSTRING::from(exe.as_os_str());
    let parameters = HSTRING::from(parameters.as_str());

    let instance = unsafe {
        ShellExecuteW(
            HWND(std::ptr::null_mut()),
            PCWSTR::from_raw(verb.as_ptr()),
            PCWSTR::from_raw(file.as_ptr()),
            PCWSTR::from_raw(parameters.as_ptr()),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // ShellExecuteW reports success with a value greater than 32; anything
    // else covers a declined UAC prompt as well as launch failures
    if instance.0 as usize <= 32 {
        return Err(ElevationError::Relaunch(format!(
            "elevation prompt failed or was declined (ShellExecute code {})",
            instance.0 as usize
        )));
    }

    Ok(())
}

/// Join arguments into a ShellExecute parameter string, quoting as needed.
fn parameter_string(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.contains(' ') {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
