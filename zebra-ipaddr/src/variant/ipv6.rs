//! IPv6 address payloads.

use std::{
    fmt,
    net::Ipv6Addr,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use super::{leading_ones, mask_bytes, prefix_mask, zip_bytes};

/// The separator between an IPv6 address and its zone id.
const ZONE_SEPARATOR: char = '%';

/// An IPv6 address: 16 bytes in network byte order, and a scope id.
///
/// A scope id of zero means the address has no zone.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub(crate) struct Ipv6Variant {
    octets: [u8; 16],
    scope: u32,
}

impl Ipv6Variant {
    /// The number of bits in an IPv6 address.
    pub const BITS: u32 = 128;

    pub const fn new(octets: [u8; 16], scope: u32) -> Ipv6Variant {
        Ipv6Variant { octets, scope }
    }

    /// Returns an unscoped netmask with the leading `prefix` bits set,
    /// or `None` if `prefix` is longer than 128 bits.
    pub fn from_prefix(prefix: u32) -> Option<Ipv6Variant> {
        (prefix <= Self::BITS).then(|| Ipv6Variant::new(prefix_mask(prefix), 0))
    }

    /// Parses a colon-hex literal, ignoring surrounding whitespace.
    ///
    /// Accepts `::` zero compression, an embedded dotted-quad tail,
    /// and a `%<zone>` suffix, where the zone is a decimal interface index.
    /// Interface names are not resolved.
    pub fn parse(text: &str) -> Option<Ipv6Variant> {
        let text = text.trim();

        let (addr, scope) = match text.split_once(ZONE_SEPARATOR) {
            Some((addr, zone)) => (addr, Self::parse_zone(zone)?),
            None => (text, 0),
        };

        let addr = addr.parse::<Ipv6Addr>().ok()?;

        Some(Ipv6Variant::new(addr.octets(), scope))
    }

    /// Parses a decimal zone index, rejecting signs and empty zones.
    fn parse_zone(zone: &str) -> Option<u32> {
        // `u32::from_str` also accepts a leading `+`
        if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        zone.parse().ok()
    }

    pub fn octets(&self) -> &[u8; 16] {
        &self.octets
    }

    pub fn scope(&self) -> u32 {
        self.scope
    }

    /// Returns a copy of this address with `scope` as its scope id.
    pub fn with_scope(self, scope: u32) -> Ipv6Variant {
        Ipv6Variant::new(self.octets, scope)
    }

    /// The 16-bit group at `index`, in host order.
    fn group(&self, index: usize) -> u16 {
        u16::from_be_bytes([self.octets[index * 2], self.octets[index * 2 + 1]])
    }

    pub fn prefix_length(&self) -> u32 {
        leading_ones(&self.octets)
    }

    /// Returns `(self & mask) | (set & !mask)`, keeping this address's scope.
    pub fn masked(&self, mask: &Ipv6Variant, set: &Ipv6Variant) -> Ipv6Variant {
        Ipv6Variant::new(
            mask_bytes(&self.octets, &mask.octets, &set.octets),
            self.scope,
        )
    }

    /// Returns the embedded IPv4 address if this is an IPv4-mapped address.
    pub fn to_ipv4_mapped(&self) -> Option<[u8; 4]> {
        self.is_ipv4_mapped()
            .then(|| [self.octets[12], self.octets[13], self.octets[14], self.octets[15]])
    }

    /// All address bytes are zero. The scope is ignored.
    pub fn is_wildcard(&self) -> bool {
        self.octets == [0; 16]
    }

    /// IPv6 has no broadcast address.
    pub fn is_broadcast(&self) -> bool {
        false
    }

    /// `::1`
    pub fn is_loopback(&self) -> bool {
        Ipv6Addr::from(self.octets) == Ipv6Addr::LOCALHOST
    }

    /// `ff00::/8`
    pub fn is_multicast(&self) -> bool {
        self.octets[0] == 0xff
    }

    /// `fe80::/10`
    pub fn is_link_local(&self) -> bool {
        self.group(0) & 0xffc0 == 0xfe80
    }

    /// The deprecated site-local prefix `fec0::/10`, or a unique local address in `fc00::/7`.
    pub fn is_site_local(&self) -> bool {
        let group = self.group(0);

        group & 0xffc0 == 0xfec0 || group & 0xfe00 == 0xfc00
    }

    /// `::/96`, the deprecated IPv4-compatible prefix.
    pub fn is_ipv4_compatible(&self) -> bool {
        self.octets[..12] == [0; 12]
    }

    /// `::ffff:0:0/96`
    pub fn is_ipv4_mapped(&self) -> bool {
        self.octets[..10] == [0; 10] && self.octets[10..12] == [0xff, 0xff]
    }

    /// Permanently assigned multicast addresses: `ff00::/12`.
    pub fn is_well_known_mc(&self) -> bool {
        self.group(0) & 0xfff0 == 0xff00
    }

    pub fn is_node_local_mc(&self) -> bool {
        self.has_multicast_scope(0x1)
    }

    pub fn is_link_local_mc(&self) -> bool {
        self.has_multicast_scope(0x2)
    }

    pub fn is_site_local_mc(&self) -> bool {
        self.has_multicast_scope(0x5)
    }

    pub fn is_org_local_mc(&self) -> bool {
        self.has_multicast_scope(0x8)
    }

    pub fn is_global_mc(&self) -> bool {
        self.has_multicast_scope(0xe)
    }

    /// Returns true for a well-known or transient multicast address with the
    /// multicast `scope` nibble. Other flag bits must be clear.
    fn has_multicast_scope(&self, scope: u16) -> bool {
        self.group(0) & 0xffef == 0xff00 | scope
    }
}

impl From<Ipv6Addr> for Ipv6Variant {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Variant::new(addr.octets(), 0)
    }
}

impl From<Ipv6Variant> for Ipv6Addr {
    fn from(variant: Ipv6Variant) -> Self {
        Ipv6Addr::from(variant.octets)
    }
}

impl fmt::Display for Ipv6Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding applies to the address and zone together
        if f.width().is_some() || f.precision().is_some() {
            return f.pad(&self.to_string());
        }

        // `Ipv6Addr` already writes the RFC 5952 canonical form
        write!(f, "{}", Ipv6Addr::from(self.octets))?;

        if self.scope != 0 {
            write!(f, "{}{}", ZONE_SEPARATOR, self.scope)?;
        }

        Ok(())
    }
}

// The binary operators keep the left operand's scope.
// `IpAddress` checks that the scopes are compatible before calling them.

impl BitAnd for Ipv6Variant {
    type Output = Ipv6Variant;

    fn bitand(self, rhs: Ipv6Variant) -> Ipv6Variant {
        Ipv6Variant::new(zip_bytes(&self.octets, &rhs.octets, |l, r| l & r), self.scope)
    }
}

impl BitOr for Ipv6Variant {
    type Output = Ipv6Variant;

    fn bitor(self, rhs: Ipv6Variant) -> Ipv6Variant {
        Ipv6Variant::new(zip_bytes(&self.octets, &rhs.octets, |l, r| l | r), self.scope)
    }
}

impl BitXor for Ipv6Variant {
    type Output = Ipv6Variant;

    fn bitxor(self, rhs: Ipv6Variant) -> Ipv6Variant {
        Ipv6Variant::new(zip_bytes(&self.octets, &rhs.octets, |l, r| l ^ r), self.scope)
    }
}

impl Not for Ipv6Variant {
    type Output = Ipv6Variant;

    fn not(self) -> Ipv6Variant {
        Ipv6Variant::new(self.octets.map(|byte| !byte), self.scope)
    }
}
