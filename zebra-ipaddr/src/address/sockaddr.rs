//! Conversions between [`IpAddress`] and `std::net` or platform socket addresses.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::variant::{Ipv4Variant, Ipv6Variant};

#[cfg(unix)]
use crate::{AddressError, Family};

use super::{IpAddress, Variant};

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Variant::from(addr).into()
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Variant::from(addr).into()
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<SocketAddrV4> for IpAddress {
    fn from(addr: SocketAddrV4) -> Self {
        (*addr.ip()).into()
    }
}

impl From<SocketAddrV6> for IpAddress {
    /// Keeps the socket address scope id, and drops the port and flow information.
    fn from(addr: SocketAddrV6) -> Self {
        Ipv6Variant::from(*addr.ip())
            .with_scope(addr.scope_id())
            .into()
    }
}

impl From<SocketAddr> for IpAddress {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => v4.into(),
            SocketAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<IpAddress> for IpAddr {
    /// Converts to a standard library address. The IPv6 scope id is dropped,
    /// because [`Ipv6Addr`] can't represent it.
    fn from(address: IpAddress) -> Self {
        match address.variant {
            Variant::V4(v4) => IpAddr::V4(v4.into()),
            Variant::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}

impl IpAddress {
    /// Returns a socket address for this address and `port`.
    ///
    /// IPv6 socket addresses keep the scope id, and have no flow information.
    pub fn to_socket_addr(&self, port: u16) -> SocketAddr {
        match self.variant {
            Variant::V4(v4) => SocketAddrV4::new(v4.into(), port).into(),
            Variant::V6(v6) => SocketAddrV6::new(v6.into(), port, 0, v6.scope()).into(),
        }
    }
}

#[cfg(unix)]
impl TryFrom<&libc::sockaddr_storage> for IpAddress {
    type Error = AddressError;

    /// Reads the address from a platform socket address.
    ///
    /// `AF_INET` storage is read as a `sockaddr_in`, and `AF_INET6` storage
    /// as a `sockaddr_in6`, including its scope id. Other address families
    /// return [`AddressError::InvalidArgument`].
    #[allow(unsafe_code)]
    fn try_from(storage: &libc::sockaddr_storage) -> Result<Self, Self::Error> {
        let family = Family::from_af(libc::c_int::from(storage.ss_family))?;
        let storage: *const libc::sockaddr_storage = storage;

        // SAFETY for both casts: `sockaddr_storage` is large enough and aligned
        // for every socket address type, and `ss_family` says which type it holds.
        match family {
            Family::Ipv4 => {
                let sin = unsafe { &*storage.cast::<libc::sockaddr_in>() };

                // `s_addr` is stored in network byte order
                Ok(Ipv4Variant::from_octets(sin.sin_addr.s_addr.to_ne_bytes()).into())
            }
            Family::Ipv6 => {
                let sin6 = unsafe { &*storage.cast::<libc::sockaddr_in6>() };

                Ok(Ipv6Variant::new(sin6.sin6_addr.s6_addr, sin6.sin6_scope_id).into())
            }
        }
    }
}
