//! Randomised property testing for IP addresses.

use proptest::{arbitrary::any, prelude::*};

use crate::{
    variant::{Ipv4Variant, Ipv6Variant},
    Family, IpAddress,
};

impl Arbitrary for IpAddress {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<Family>()
            .prop_flat_map(IpAddress::family_strategy)
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl IpAddress {
    /// Returns a strategy that produces arbitrary addresses of `family`.
    ///
    /// Half of the generated IPv6 addresses have a non-zero scope id.
    pub fn family_strategy(family: Family) -> BoxedStrategy<IpAddress> {
        match family {
            Family::Ipv4 => any::<[u8; 4]>()
                .prop_map(|octets| Ipv4Variant::from_octets(octets).into())
                .boxed(),
            Family::Ipv6 => (
                any::<[u8; 16]>(),
                prop_oneof![Just(0u32), 1..=u32::MAX],
            )
                .prop_map(|(octets, scope)| Ipv6Variant::new(octets, scope).into())
                .boxed(),
        }
    }

    /// Returns a strategy that produces arbitrary addresses without IPv6 scope ids.
    ///
    /// These addresses survive a wire format round-trip unchanged.
    pub fn unscoped_strategy() -> BoxedStrategy<IpAddress> {
        prop_oneof![
            any::<[u8; 4]>().prop_map(|octets| Ipv4Variant::from_octets(octets).into()),
            any::<[u8; 16]>().prop_map(|octets| Ipv6Variant::new(octets, 0).into()),
        ]
        .boxed()
    }

    /// Returns a strategy that produces netmasks of `family`,
    /// with every valid prefix length.
    pub fn netmask_strategy(family: Family) -> BoxedStrategy<IpAddress> {
        (0..=family.bit_len())
            .prop_map(move |prefix| {
                IpAddress::from_prefix(prefix, family).expect("prefix is within the family bit width")
            })
            .boxed()
    }
}
