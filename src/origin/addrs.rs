//! Per-request connection address snapshot.

use std::net::IpAddr;

/// Local and remote addresses of the connection a request arrived on.
///
/// `None` means the transport carried no network-layer address, e.g. a Unix
/// domain socket. A default value has both sides absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConnectionAddrs {
    /// Address of the serving side of the connection.
    pub local: Option<IpAddr>,
    /// Address of the caller.
    pub remote: Option<IpAddr>,
}

impl ConnectionAddrs {
    pub fn new(local: Option<IpAddr>, remote: Option<IpAddr>) -> Self {
        Self { local, remote }
    }

    /// Pair for a transport without IP addressing.
    pub fn unaddressed() -> Self {
        Self::default()
    }
}

impl From<(IpAddr, IpAddr)> for ConnectionAddrs {
    fn from((local, remote): (IpAddr, IpAddr)) -> Self {
        Self::new(Some(local), Some(remote))
    }
}
