//! Linux privilege guard
//!
//! NetworkManager authorizes connection activation through polkit, which
//! prompts on its own when the caller lacks the network-control privilege.
//! Root is therefore not required up front and no relaunch happens here.

use super::{ElevationError, Privileges};
use nix::unistd::Uid;
use tracing::debug;

pub fn ensure_privileges() -> Result<Privileges, ElevationError> {
    let euid = Uid::effective();
    if euid.is_root() {
        debug!("Running as root");
    } else {
        debug!(
            "Running unprivileged (euid {}); nmcli will authorize via polkit",
            euid
        );
    }

    Ok(Privileges::Sufficient)
}
