//! Canonical rendering of the caller address.

use std::net::{IpAddr, Ipv4Addr};

use super::ConnectionAddrs;

/// Address reported when the transport supplied no remote address.
pub const FALLBACK_REMOTE: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Unwraps an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`) to plain IPv4.
///
/// IPv4-compatible addresses (`::a.b.c.d`) are left as IPv6.
pub fn normalize_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        IpAddr::V4(_) => ip,
    }
}

/// Canonical string form of the caller address.
///
/// Falls back to `127.0.0.1` when the remote address is absent, so requests
/// injected without a socket still get a deterministic value.
pub fn normalized_remote_ip(addrs: &ConnectionAddrs) -> String {
    normalize_ip(addrs.remote.unwrap_or(FALLBACK_REMOTE)).to_string()
}
