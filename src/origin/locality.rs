//! Same-host detection.

use super::ConnectionAddrs;

/// Returns `true` when the request originated on the serving host.
///
/// A missing remote address means a non-IP transport (Unix socket), which is
/// always local. Otherwise the local and remote addresses must be equal.
/// `127.0.0.1` and `::ffff:127.0.0.1` are different values here.
pub fn is_local(addrs: &ConnectionAddrs) -> bool {
    if addrs.remote.is_none() {
        return true;
    }

    addrs.local == addrs.remote
}
