//! IP address families.

use std::fmt;

use crate::AddressError;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// The family of an [`IpAddress`](crate::IpAddress).
///
/// The family determines the raw byte width of the address,
/// and whether it carries a scope id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Family {
    /// IPv4: 4 bytes, no scope.
    Ipv4,

    /// IPv6: 16 bytes, with a 32-bit scope id.
    Ipv6,
}

impl Family {
    /// The number of raw bytes in an address of this family.
    pub const fn byte_len(self) -> usize {
        match self {
            Family::Ipv4 => 4,
            Family::Ipv6 => 16,
        }
    }

    /// The number of bits in an address of this family.
    ///
    /// This is the largest valid netmask prefix length.
    pub const fn bit_len(self) -> u32 {
        // Byte lengths are tiny, so this can't truncate.
        (self.byte_len() * 8) as u32
    }

    /// The platform address family code used by socket APIs:
    /// `AF_INET` or `AF_INET6`.
    pub fn af(self) -> libc::c_int {
        match self {
            Family::Ipv4 => libc::AF_INET,
            Family::Ipv6 => libc::AF_INET6,
        }
    }

    /// Returns the family for a platform address family code.
    ///
    /// Returns [`AddressError::InvalidArgument`] for codes other than
    /// `AF_INET` and `AF_INET6`.
    pub fn from_af(af: libc::c_int) -> Result<Family, AddressError> {
        match af {
            libc::AF_INET => Ok(Family::Ipv4),
            libc::AF_INET6 => Ok(Family::Ipv6),
            _ => {
                debug!(?af, "rejected unsupported address family code");
                Err(AddressError::InvalidArgument(
                    "invalid or unsupported address family",
                ))
            }
        }
    }

    /// Returns the family whose addresses are `len` bytes long.
    ///
    /// Returns [`AddressError::InvalidArgument`] for lengths other than 4 and 16.
    pub fn from_byte_len(len: usize) -> Result<Family, AddressError> {
        match len {
            4 => Ok(Family::Ipv4),
            16 => Ok(Family::Ipv6),
            _ => Err(AddressError::InvalidArgument("invalid address length")),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Ipv4 => "IPv4",
            Family::Ipv6 => "IPv6",
        })
    }
}
