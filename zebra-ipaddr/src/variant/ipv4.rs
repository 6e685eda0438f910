//! IPv4 address payloads.

use std::{
    fmt,
    net::Ipv4Addr,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use super::{leading_ones, mask_bytes, prefix_mask, zip_bytes};

/// An IPv4 address: 4 bytes in network byte order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub(crate) struct Ipv4Variant {
    octets: [u8; 4],
}

impl Ipv4Variant {
    /// The unspecified address, `0.0.0.0`.
    pub const WILDCARD: Ipv4Variant = Ipv4Variant { octets: [0; 4] };

    /// The "no route" sentinel, `255.255.255.255`.
    pub const BROADCAST: Ipv4Variant = Ipv4Variant { octets: [0xff; 4] };

    /// The number of bits in an IPv4 address.
    pub const BITS: u32 = 32;

    pub const fn from_octets(octets: [u8; 4]) -> Ipv4Variant {
        Ipv4Variant { octets }
    }

    /// Returns a netmask with the leading `prefix` bits set,
    /// or `None` if `prefix` is longer than 32 bits.
    pub fn from_prefix(prefix: u32) -> Option<Ipv4Variant> {
        (prefix <= Self::BITS).then(|| Ipv4Variant::from_octets(prefix_mask(prefix)))
    }

    /// Parses a dotted-quad literal, ignoring surrounding whitespace.
    ///
    /// Each octet must be a decimal number from 0 to 255.
    pub fn parse(text: &str) -> Option<Ipv4Variant> {
        text.trim().parse::<Ipv4Addr>().ok().map(Ipv4Variant::from)
    }

    pub fn octets(&self) -> &[u8; 4] {
        &self.octets
    }

    /// The address as a host-order integer, for range checks.
    fn bits(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    pub fn prefix_length(&self) -> u32 {
        leading_ones(&self.octets)
    }

    /// Returns `(self & mask) | (set & !mask)`.
    pub fn masked(&self, mask: &Ipv4Variant, set: &Ipv4Variant) -> Ipv4Variant {
        Ipv4Variant::from_octets(mask_bytes(&self.octets, &mask.octets, &set.octets))
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::WILDCARD
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// `127.0.0.0/8`
    pub fn is_loopback(&self) -> bool {
        self.bits() & 0xff00_0000 == 0x7f00_0000
    }

    /// `224.0.0.0/4`
    pub fn is_multicast(&self) -> bool {
        self.bits() & 0xf000_0000 == 0xe000_0000
    }

    /// `169.254.0.0/16`
    pub fn is_link_local(&self) -> bool {
        self.bits() & 0xffff_0000 == 0xa9fe_0000
    }

    /// The RFC 1918 private ranges: `10.0.0.0/8`, `172.16.0.0/12` and `192.168.0.0/16`.
    pub fn is_site_local(&self) -> bool {
        let bits = self.bits();

        bits & 0xff00_0000 == 0x0a00_0000
            || bits & 0xfff0_0000 == 0xac10_0000
            || bits & 0xffff_0000 == 0xc0a8_0000
    }

    /// `224.0.0.0/24`
    pub fn is_well_known_mc(&self) -> bool {
        self.bits() & 0xffff_ff00 == 0xe000_0000
    }

    /// IPv4 has no node-local multicast scope.
    pub fn is_node_local_mc(&self) -> bool {
        false
    }

    /// `224.0.0.0/8`
    pub fn is_link_local_mc(&self) -> bool {
        self.bits() & 0xff00_0000 == 0xe000_0000
    }

    /// `239.255.0.0/16`
    pub fn is_site_local_mc(&self) -> bool {
        self.bits() & 0xffff_0000 == 0xefff_0000
    }

    /// `239.192.0.0/16`
    pub fn is_org_local_mc(&self) -> bool {
        self.bits() & 0xffff_0000 == 0xefc0_0000
    }

    /// `224.0.1.0` to `238.0.0.0`
    pub fn is_global_mc(&self) -> bool {
        (0xe000_0100..=0xee00_0000).contains(&self.bits())
    }
}

impl From<Ipv4Addr> for Ipv4Variant {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Variant::from_octets(addr.octets())
    }
}

impl From<Ipv4Variant> for Ipv4Addr {
    fn from(variant: Ipv4Variant) -> Self {
        Ipv4Addr::from(variant.octets)
    }
}

impl fmt::Display for Ipv4Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv4Addr::from(*self), f)
    }
}

impl BitAnd for Ipv4Variant {
    type Output = Ipv4Variant;

    fn bitand(self, rhs: Ipv4Variant) -> Ipv4Variant {
        Ipv4Variant::from_octets(zip_bytes(&self.octets, &rhs.octets, |l, r| l & r))
    }
}

impl BitOr for Ipv4Variant {
    type Output = Ipv4Variant;

    fn bitor(self, rhs: Ipv4Variant) -> Ipv4Variant {
        Ipv4Variant::from_octets(zip_bytes(&self.octets, &rhs.octets, |l, r| l | r))
    }
}

impl BitXor for Ipv4Variant {
    type Output = Ipv4Variant;

    fn bitxor(self, rhs: Ipv4Variant) -> Ipv4Variant {
        Ipv4Variant::from_octets(zip_bytes(&self.octets, &rhs.octets, |l, r| l ^ r))
    }
}

impl Not for Ipv4Variant {
    type Output = Ipv4Variant;

    fn not(self) -> Ipv4Variant {
        Ipv4Variant::from_octets(self.octets.map(|byte| !byte))
    }
}
