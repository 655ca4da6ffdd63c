//! HorseVPN launcher - connects a host to a pre-provisioned VPN endpoint
//!
//! Given a connection route string (`scheme://host[:port][/path]`), this
//! crate extracts the target host, ensures the process holds sufficient
//! privilege, and activates the platform's pre-existing named VPN profile:
//! the NetworkManager connection `horsevpn` on Linux (via `nmcli`) or the
//! RAS phone-book entry `HorseVPN` on Windows (via `RasDial`).
//!
//! The profile's routing and credentials are provisioned out of band; this
//! crate never creates, edits, or tears down profiles and makes at most one
//! connection attempt per run.
//!
//! # Architecture
//!
//! - `route`: route string parsing (host extraction)
//! - `elevation`: privilege check and elevated self-relaunch (Windows)
//! - `exec`: external command execution with captured output
//! - `platform`: per-platform connection dialers (NetworkManager, RAS)
//! - `launch`: the parse → guard → dial flow
//!
//! # Usage
//!
//! ```bash
//! horse-vpn wss://gateway.example.net:8443
//! ```

pub mod elevation;
pub mod exec;
pub mod launch;
pub mod platform;
pub mod route;

pub use launch::{launch, LaunchError, LaunchOutcome};
pub use route::Route;
