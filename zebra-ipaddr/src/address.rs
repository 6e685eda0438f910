//! The family-erased IP address value.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    variant::{Ipv4Variant, Ipv6Variant},
    AddressError, Family,
};

mod ops;
mod serialize;
mod sockaddr;

/// The IPv4 wildcard literal, which is always accepted by [`IpAddress::parse`].
pub const IPV4_WILDCARD_LITERAL: &str = "0.0.0.0";

/// The IPv6 wildcard literal, which is always accepted by [`IpAddress::parse`].
pub const IPV6_WILDCARD_LITERAL: &str = "::";

/// An IPv4 or IPv6 address.
///
/// Each value holds exactly one family-specific payload for its whole
/// lifetime. IPv4 payloads are 4 raw bytes, IPv6 payloads are 16 raw bytes
/// and a 32-bit scope id. Bytes are stored in network byte order.
///
/// # Equality and ordering
///
/// Two addresses are equal if they have the same byte length, scope id and
/// raw bytes. Addresses are ordered by byte length, then scope id, then
/// raw bytes, so every IPv4 address sorts before every IPv6 address.
///
/// # Serialization
///
/// Serde uses the canonical text form from [`fmt::Display`].
/// The binary wire format is in [`crate::serialization`].
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, serde_with::SerializeDisplay, serde_with::DeserializeFromStr,
)]
pub struct IpAddress {
    variant: Variant,
}

/// The payload owned by an [`IpAddress`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Variant {
    V4(Ipv4Variant),
    V6(Ipv6Variant),
}

impl IpAddress {
    /// Returns the all-zero address of `family`.
    pub fn wildcard(family: Family) -> IpAddress {
        match family {
            Family::Ipv4 => Ipv4Variant::WILDCARD.into(),
            Family::Ipv6 => Ipv6Variant::default().into(),
        }
    }

    /// Returns the IPv4 "no route" sentinel, `255.255.255.255`.
    ///
    /// This is always an IPv4 address: IPv6 has no broadcast address.
    /// Use [`IpAddress::broadcast_of`] when the family is not known statically.
    pub fn broadcast() -> IpAddress {
        Ipv4Variant::BROADCAST.into()
    }

    /// Returns the broadcast address of `family`.
    ///
    /// Returns [`AddressError::InvalidArgument`] for IPv6,
    /// because IPv6 has no broadcast address.
    pub fn broadcast_of(family: Family) -> Result<IpAddress, AddressError> {
        match family {
            Family::Ipv4 => Ok(IpAddress::broadcast()),
            Family::Ipv6 => Err(AddressError::InvalidArgument(
                "IPv6 does not have a broadcast address",
            )),
        }
    }

    /// Parses an IPv4 or IPv6 address literal.
    ///
    /// Surrounding whitespace is ignored. The family is chosen like this:
    /// - an empty string, or the literal `0.0.0.0`, is the IPv4 wildcard,
    /// - a dotted-quad that is not all zeroes is an IPv4 address,
    /// - the literal `::` is the IPv6 wildcard,
    /// - a colon-hex literal that is not all zeroes is an IPv6 address.
    ///
    /// Any other text returns [`AddressError::InvalidAddress`].
    /// In particular, spellings of the wildcards other than `0.0.0.0` and `::`
    /// are rejected.
    pub fn parse(text: &str) -> Result<IpAddress, AddressError> {
        let trimmed = text.trim();

        if text.is_empty() || trimmed == IPV4_WILDCARD_LITERAL {
            return Ok(IpAddress::wildcard(Family::Ipv4));
        }

        if let Some(v4) = Ipv4Variant::parse(trimmed).filter(|v4| !v4.is_wildcard()) {
            return Ok(v4.into());
        }

        if trimmed == IPV6_WILDCARD_LITERAL {
            return Ok(IpAddress::wildcard(Family::Ipv6));
        }

        // A scoped wildcard like `::%2` is distinct from the unscoped wildcard.
        if let Some(v6) = Ipv6Variant::parse(trimmed).filter(|v6| *v6 != Ipv6Variant::default())
        {
            return Ok(v6.into());
        }

        trace!(?text, "rejected invalid IP address literal");

        Err(AddressError::InvalidAddress(text.to_string()))
    }

    /// Parses an address literal of `family`, without trying the other family.
    ///
    /// Unlike [`IpAddress::parse`], any valid literal of `family` is accepted,
    /// including alternative spellings of the wildcard.
    ///
    /// Returns [`AddressError::InvalidAddress`] if `text` is not a valid
    /// `family` literal.
    pub fn parse_family(text: &str, family: Family) -> Result<IpAddress, AddressError> {
        let parsed = match family {
            Family::Ipv4 => Ipv4Variant::parse(text).map(IpAddress::from),
            Family::Ipv6 => Ipv6Variant::parse(text).map(IpAddress::from),
        };

        parsed.ok_or_else(|| {
            trace!(?text, %family, "rejected invalid IP address literal");
            AddressError::InvalidAddress(text.to_string())
        })
    }

    /// Parses an address like [`IpAddress::parse`], discarding the error.
    pub fn try_parse(text: &str) -> Option<IpAddress> {
        IpAddress::parse(text).ok()
    }

    /// Parses an address like [`IpAddress::parse`], storing it in `result`.
    ///
    /// Returns `true` on success. On failure, returns `false`
    /// and leaves `result` unchanged.
    pub fn try_parse_into(text: &str, result: &mut IpAddress) -> bool {
        match IpAddress::try_parse(text) {
            Some(address) => {
                *result = address;
                true
            }
            None => false,
        }
    }

    /// Copies an address from raw network-order bytes.
    ///
    /// 4 bytes are an IPv4 address, 16 bytes are an unscoped IPv6 address.
    /// Returns [`AddressError::InvalidArgument`] for any other length.
    pub fn from_raw(bytes: &[u8]) -> Result<IpAddress, AddressError> {
        IpAddress::from_raw_with_scope(bytes, 0)
    }

    /// Copies an address from raw network-order bytes, with an IPv6 scope id.
    ///
    /// 4 bytes are an IPv4 address, and `scope` is ignored.
    /// 16 bytes are an IPv6 address with `scope`.
    /// Returns [`AddressError::InvalidArgument`] for any other length.
    pub fn from_raw_with_scope(bytes: &[u8], scope: u32) -> Result<IpAddress, AddressError> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            Ok(Ipv4Variant::from_octets(octets).into())
        } else if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            Ok(Ipv6Variant::new(octets, scope).into())
        } else {
            debug!(len = bytes.len(), "rejected raw IP address bytes");
            Err(AddressError::InvalidArgument(
                "invalid address length: expected 4 or 16 bytes",
            ))
        }
    }

    /// Returns a netmask of `family`, with the leading `prefix` bits set.
    ///
    /// Returns [`AddressError::InvalidArgument`] if `prefix` is longer than
    /// the family's bit width (32 or 128).
    pub fn from_prefix(prefix: u32, family: Family) -> Result<IpAddress, AddressError> {
        let mask = match family {
            Family::Ipv4 => Ipv4Variant::from_prefix(prefix).map(IpAddress::from),
            Family::Ipv6 => Ipv6Variant::from_prefix(prefix).map(IpAddress::from),
        };

        mask.ok_or_else(|| {
            debug!(?prefix, %family, "rejected netmask prefix length");
            AddressError::InvalidArgument("invalid prefix length for address family")
        })
    }

    /// Returns the address family.
    pub fn family(&self) -> Family {
        match self.variant {
            Variant::V4(_) => Family::Ipv4,
            Variant::V6(_) => Family::Ipv6,
        }
    }

    /// Returns the IPv6 scope id, or zero for IPv4 addresses and unscoped IPv6 addresses.
    pub fn scope(&self) -> u32 {
        match &self.variant {
            Variant::V4(_) => 0,
            Variant::V6(v6) => v6.scope(),
        }
    }

    /// Returns the number of raw address bytes: 4 or 16.
    pub fn length(&self) -> usize {
        self.family().byte_len()
    }

    /// Returns the raw address bytes, in network byte order.
    pub fn raw_bytes(&self) -> &[u8] {
        match &self.variant {
            Variant::V4(v4) => &v4.octets()[..],
            Variant::V6(v6) => &v6.octets()[..],
        }
    }

    /// Returns the platform address family code: `AF_INET` or `AF_INET6`.
    pub fn af(&self) -> libc::c_int {
        self.family().af()
    }

    /// Returns the number of leading 1-bits in the address.
    ///
    /// For an address built by [`IpAddress::from_prefix`],
    /// this is the original prefix length.
    pub fn prefix_length(&self) -> u32 {
        match &self.variant {
            Variant::V4(v4) => v4.prefix_length(),
            Variant::V6(v6) => v6.prefix_length(),
        }
    }

    /// Returns true for the all-zero address of either family.
    pub fn is_wildcard(&self) -> bool {
        self.dispatch(Ipv4Variant::is_wildcard, Ipv6Variant::is_wildcard)
    }

    /// Returns true for the IPv4 address `255.255.255.255`.
    /// Always false for IPv6.
    pub fn is_broadcast(&self) -> bool {
        self.dispatch(Ipv4Variant::is_broadcast, Ipv6Variant::is_broadcast)
    }

    /// Returns true for `127.0.0.0/8` and `::1`.
    pub fn is_loopback(&self) -> bool {
        self.dispatch(Ipv4Variant::is_loopback, Ipv6Variant::is_loopback)
    }

    /// Returns true for `224.0.0.0/4` and `ff00::/8`.
    pub fn is_multicast(&self) -> bool {
        self.dispatch(Ipv4Variant::is_multicast, Ipv6Variant::is_multicast)
    }

    /// Returns true if the address is not a wildcard, broadcast or multicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_wildcard() && !self.is_broadcast() && !self.is_multicast()
    }

    /// Returns true for link-local unicast addresses:
    /// `169.254.0.0/16` and `fe80::/10`.
    pub fn is_link_local(&self) -> bool {
        self.dispatch(Ipv4Variant::is_link_local, Ipv6Variant::is_link_local)
    }

    /// Returns true for site-local unicast addresses: the IPv4 private ranges,
    /// IPv6 `fec0::/10`, and IPv6 unique local addresses.
    pub fn is_site_local(&self) -> bool {
        self.dispatch(Ipv4Variant::is_site_local, Ipv6Variant::is_site_local)
    }

    /// Returns true for IPv6 addresses in `::/96`. Always false for IPv4.
    pub fn is_ipv4_compatible(&self) -> bool {
        self.dispatch(|_| false, Ipv6Variant::is_ipv4_compatible)
    }

    /// Returns true for IPv6 addresses in `::ffff:0:0/96`. Always false for IPv4.
    pub fn is_ipv4_mapped(&self) -> bool {
        self.dispatch(|_| false, Ipv6Variant::is_ipv4_mapped)
    }

    /// Returns true for well-known multicast addresses:
    /// `224.0.0.0/24` and `ff00::/12`.
    pub fn is_well_known_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_well_known_mc, Ipv6Variant::is_well_known_mc)
    }

    /// Returns true for node-local multicast addresses. Always false for IPv4.
    pub fn is_node_local_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_node_local_mc, Ipv6Variant::is_node_local_mc)
    }

    /// Returns true for link-local multicast addresses:
    /// `224.0.0.0/8`, and IPv6 multicast scope 2.
    pub fn is_link_local_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_link_local_mc, Ipv6Variant::is_link_local_mc)
    }

    /// Returns true for site-local multicast addresses:
    /// `239.255.0.0/16`, and IPv6 multicast scope 5.
    pub fn is_site_local_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_site_local_mc, Ipv6Variant::is_site_local_mc)
    }

    /// Returns true for organization-local multicast addresses:
    /// `239.192.0.0/16`, and IPv6 multicast scope 8.
    pub fn is_org_local_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_org_local_mc, Ipv6Variant::is_org_local_mc)
    }

    /// Returns true for global multicast addresses:
    /// `224.0.1.0` to `238.0.0.0`, and IPv6 multicast scope e.
    pub fn is_global_mc(&self) -> bool {
        self.dispatch(Ipv4Variant::is_global_mc, Ipv6Variant::is_global_mc)
    }

    /// Clears the host bits of this address: the bits that are not set in `mask`.
    ///
    /// Equivalent to [`IpAddress::mask_with`] using the wildcard address as `set`.
    /// The scope id is unchanged.
    ///
    /// Returns [`AddressError::InvalidArgument`] if `mask` has a different family.
    pub fn mask(&mut self, mask: &IpAddress) -> Result<(), AddressError> {
        self.mask_with(mask, &IpAddress::wildcard(self.family()))
    }

    /// Replaces the host bits of this address with the corresponding bits of `set`.
    ///
    /// Each byte becomes `(self & mask) | (set & !mask)`. The family and
    /// scope id are unchanged.
    ///
    /// Returns [`AddressError::InvalidArgument`] unless all three addresses
    /// have the same family. On error, this address is not modified.
    pub fn mask_with(&mut self, mask: &IpAddress, set: &IpAddress) -> Result<(), AddressError> {
        let masked = match (&self.variant, &mask.variant, &set.variant) {
            (Variant::V4(this), Variant::V4(mask), Variant::V4(set)) => {
                Variant::V4(this.masked(mask, set))
            }
            (Variant::V6(this), Variant::V6(mask), Variant::V6(set)) => {
                Variant::V6(this.masked(mask, set))
            }
            _ => {
                debug!(
                    address = %self,
                    %mask,
                    %set,
                    "rejected mask with mismatched address families",
                );
                return Err(AddressError::InvalidArgument(
                    "mask operands must have the same address family",
                ));
            }
        };

        self.variant = masked;

        Ok(())
    }

    /// Returns the IPv4 address embedded in an IPv4-mapped IPv6 address.
    /// Returns other addresses unchanged.
    ///
    /// Peers often report IPv4 addresses in their mapped IPv6 form,
    /// so canonicalising makes those addresses compare equal to plain IPv4.
    pub fn canonical(&self) -> IpAddress {
        match &self.variant {
            Variant::V6(v6) => match v6.to_ipv4_mapped() {
                Some(octets) => Ipv4Variant::from_octets(octets).into(),
                None => *self,
            },
            Variant::V4(_) => *self,
        }
    }

    /// Calls `v4` or `v6` on the payload.
    fn dispatch<T>(
        &self,
        v4: impl FnOnce(&Ipv4Variant) -> T,
        v6: impl FnOnce(&Ipv6Variant) -> T,
    ) -> T {
        match &self.variant {
            Variant::V4(address) => v4(address),
            Variant::V6(address) => v6(address),
        }
    }
}

impl Default for IpAddress {
    /// The IPv4 wildcard address, `0.0.0.0`.
    fn default() -> Self {
        IpAddress::wildcard(Family::Ipv4)
    }
}

impl From<Ipv4Variant> for IpAddress {
    fn from(v4: Ipv4Variant) -> Self {
        IpAddress {
            variant: Variant::V4(v4),
        }
    }
}

impl From<Ipv6Variant> for IpAddress {
    fn from(v6: Ipv6Variant) -> Self {
        IpAddress {
            variant: Variant::V6(v6),
        }
    }
}

impl Ord for IpAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length()
            .cmp(&other.length())
            .then_with(|| self.scope().cmp(&other.scope()))
            .then_with(|| self.raw_bytes().cmp(other.raw_bytes()))
    }
}

impl PartialOrd for IpAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Variant::V4(v4) => fmt::Display::fmt(v4, f),
            Variant::V6(v6) => fmt::Display::fmt(v6, f),
        }
    }
}

impl fmt::Debug for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IpAddress")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for IpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpAddress::parse(s)
    }
}
