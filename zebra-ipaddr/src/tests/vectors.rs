//! Fixed test vectors for IP address parsing, classification, arithmetic and serialization.

use std::{
    io::Cursor,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV6},
};

use zebra_test::{
    ip_addr::{
        TEXT_INVALID_IP_VECTORS, TEXT_IP_VECTORS, WIRE_INVALID_LENGTH_VECTORS, WIRE_IP_VECTORS,
        WIRE_TRUNCATED_VECTORS,
    },
    prelude::*,
};

use crate::{
    serialization::{SerializationError, WireDeserialize, WireDeserializeInto, WireSerialize},
    AddressError, Family, IpAddress,
};

/// Parses `text`, panicking if it is not a valid address.
fn ip(text: &str) -> IpAddress {
    IpAddress::parse(text).unwrap_or_else(|error| panic!("{text:?} should parse: {error}"))
}

#[test]
fn text_vectors_parse_to_canonical_form() -> Result<()> {
    let _init_guard = zebra_test::init();

    for (literal, canonical) in TEXT_IP_VECTORS {
        let address: IpAddress = literal.parse()?;
        assert_eq!(address.to_string(), *canonical, "literal: {literal:?}");

        // The canonical form is a fixed point
        let reparsed = IpAddress::parse(canonical)?;
        assert_eq!(reparsed, address, "literal: {literal:?}");
        assert_eq!(reparsed.raw_bytes(), address.raw_bytes());
    }

    Ok(())
}

#[test]
fn invalid_text_vectors_are_rejected() {
    let _init_guard = zebra_test::init();

    for literal in TEXT_INVALID_IP_VECTORS {
        let error = IpAddress::parse(literal).expect_err("invalid literal should be rejected");
        assert_eq!(error, AddressError::InvalidAddress(literal.to_string()));
        assert!(error.is_invalid_address());

        assert_eq!(IpAddress::try_parse(literal), None);
    }
}

#[test]
fn parse_ipv4_address() {
    let _init_guard = zebra_test::init();

    let address = ip("192.168.1.10");

    assert_eq!(address.family(), Family::Ipv4);
    assert_eq!(address.to_string(), "192.168.1.10");
    assert!(!address.is_wildcard());
    assert_eq!(address.length(), 4);
    assert_eq!(address.raw_bytes(), &[192, 168, 1, 10]);
    assert_eq!(address.scope(), 0);
    assert_eq!(address.af(), libc::AF_INET);
}

#[test]
fn parse_empty_string_is_ipv4_wildcard() {
    let _init_guard = zebra_test::init();

    let address = ip("");

    assert_eq!(address.family(), Family::Ipv4);
    assert_eq!(address.to_string(), "0.0.0.0");
    assert!(address.is_wildcard());
    assert_eq!(address, IpAddress::wildcard(Family::Ipv4));
    assert_eq!(address, IpAddress::default());
}

#[test]
fn parse_ipv6_loopback() {
    let _init_guard = zebra_test::init();

    let address = ip("::1");

    assert_eq!(address.family(), Family::Ipv6);
    assert!(address.is_loopback());
    assert_eq!(address.length(), 16);
    assert_eq!(address.af(), libc::AF_INET6);
}

#[test]
fn parse_wildcard_literals() {
    let _init_guard = zebra_test::init();

    let v6_wildcard = ip(" :: ");
    assert_eq!(v6_wildcard.family(), Family::Ipv6);
    assert!(v6_wildcard.is_wildcard());
    assert_eq!(v6_wildcard, IpAddress::wildcard(Family::Ipv6));

    // A scoped wildcard is an IPv6 address, but it is not equal to the unscoped wildcard
    let scoped_wildcard = ip("::%3");
    assert!(scoped_wildcard.is_wildcard());
    assert_eq!(scoped_wildcard.scope(), 3);
    assert_ne!(scoped_wildcard, v6_wildcard);
}

#[test]
fn parse_ipv6_zone() {
    let _init_guard = zebra_test::init();

    let address = ip("fe80::1%4");

    assert_eq!(address.scope(), 4);
    assert!(address.is_link_local());
    assert_eq!(address.to_string(), "fe80::1%4");
    assert_ne!(address, ip("fe80::1"));
    assert_ne!(address, ip("fe80::1%5"));
}

#[test]
fn ipv6_zones_are_unsigned_decimal() {
    let _init_guard = zebra_test::init();

    for literal in ["fe80::1%+5", "fe80::1%-5", "fe80::1%0x5", "fe80::1%5 5"] {
        let error = IpAddress::parse(literal).expect_err("zones must be decimal digits");
        assert!(error.is_invalid_address(), "literal: {literal:?}");

        assert!(IpAddress::parse_family(literal, Family::Ipv6).is_err());
    }

    assert_eq!(ip("fe80::1%05"), ip("fe80::1%5"));
    assert_eq!(ip("fe80::1%4294967295").scope(), u32::MAX);
    assert!(IpAddress::try_parse("fe80::1%4294967296").is_none());
}

#[test]
fn parse_family_does_not_fall_back() {
    let _init_guard = zebra_test::init();

    assert_eq!(
        IpAddress::parse_family("10.0.0.1", Family::Ipv4),
        Ok(ip("10.0.0.1"))
    );
    assert_eq!(
        IpAddress::parse_family("fe80::1%2", Family::Ipv6),
        Ok(ip("fe80::1%2"))
    );

    // Any spelling of the wildcard is valid when the family is known
    assert_eq!(
        IpAddress::parse_family("0:0::0", Family::Ipv6),
        Ok(IpAddress::wildcard(Family::Ipv6))
    );
    assert_eq!(
        IpAddress::parse_family(" 0.0.0.0", Family::Ipv4),
        Ok(IpAddress::wildcard(Family::Ipv4))
    );

    let error = IpAddress::parse_family("10.0.0.1", Family::Ipv6)
        .expect_err("IPv4 literals are not IPv6 addresses");
    assert!(error.is_invalid_address());

    let error =
        IpAddress::parse_family("::1", Family::Ipv4).expect_err("IPv6 literals are not IPv4");
    assert!(error.is_invalid_address());
}

#[test]
fn try_parse_leaves_output_unchanged_on_failure() {
    let _init_guard = zebra_test::init();

    let original = ip("10.1.2.3");
    let mut out = original;

    assert!(!IpAddress::try_parse_into("not-an-address", &mut out));
    assert_eq!(out, original);

    assert!(IpAddress::try_parse_into("::1", &mut out));
    assert_eq!(out, ip("::1"));
}

#[test]
fn raw_bytes_construction() {
    let _init_guard = zebra_test::init();

    assert_eq!(IpAddress::from_raw(&[10, 0, 0, 1]), Ok(ip("10.0.0.1")));

    // IPv4 addresses ignore the scope
    let v4 = IpAddress::from_raw_with_scope(&[10, 0, 0, 1], 7).expect("4 bytes is IPv4");
    assert_eq!(v4.scope(), 0);
    assert_eq!(v4, ip("10.0.0.1"));

    let mut octets = [0; 16];
    octets[0] = 0xfe;
    octets[1] = 0x80;
    octets[15] = 1;
    let v6 = IpAddress::from_raw_with_scope(&octets, 5).expect("16 bytes is IPv6");
    assert_eq!(v6.to_string(), "fe80::1%5");
    assert_eq!(v6.raw_bytes(), &octets);

    for len in [0, 1, 3, 5, 8, 15, 17, 32] {
        let error = IpAddress::from_raw(&vec![0; len]).expect_err("invalid raw address length");
        assert!(error.is_invalid_argument(), "len: {len}");
    }
}

#[test]
fn prefix_length_netmasks() {
    let _init_guard = zebra_test::init();

    let cases = [
        (0, Family::Ipv4, "0.0.0.0"),
        (8, Family::Ipv4, "255.0.0.0"),
        (20, Family::Ipv4, "255.255.240.0"),
        (24, Family::Ipv4, "255.255.255.0"),
        (32, Family::Ipv4, "255.255.255.255"),
        (0, Family::Ipv6, "::"),
        (10, Family::Ipv6, "ffc0::"),
        (64, Family::Ipv6, "ffff:ffff:ffff:ffff::"),
        (
            128,
            Family::Ipv6,
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        ),
    ];

    for (prefix, family, expected) in cases {
        let mask = IpAddress::from_prefix(prefix, family).expect("prefix is in range");

        assert_eq!(mask.family(), family);
        assert_eq!(mask.to_string(), expected);
        assert_eq!(mask.prefix_length(), prefix);
    }

    assert!(IpAddress::from_prefix(33, Family::Ipv4)
        .expect_err("IPv4 prefixes are at most 32 bits")
        .is_invalid_argument());
    assert!(IpAddress::from_prefix(129, Family::Ipv6)
        .expect_err("IPv6 prefixes are at most 128 bits")
        .is_invalid_argument());

    // Only the leading 1-bits count
    assert_eq!(ip("255.0.255.0").prefix_length(), 8);
    assert_eq!(ip("10.0.0.1").prefix_length(), 0);
}

#[test]
fn well_known_constants() {
    let _init_guard = zebra_test::init();

    assert_eq!(IpAddress::wildcard(Family::Ipv4).to_string(), "0.0.0.0");
    assert_eq!(IpAddress::wildcard(Family::Ipv6).to_string(), "::");

    let broadcast = IpAddress::broadcast();
    assert_eq!(broadcast.family(), Family::Ipv4);
    assert_eq!(broadcast.to_string(), "255.255.255.255");
    assert!(broadcast.is_broadcast());
    assert!(!broadcast.is_unicast());

    assert_eq!(IpAddress::broadcast_of(Family::Ipv4), Ok(broadcast));
    assert!(IpAddress::broadcast_of(Family::Ipv6)
        .expect_err("IPv6 has no broadcast address")
        .is_invalid_argument());
}

#[test]
fn ipv4_classification() {
    let _init_guard = zebra_test::init();

    assert!(ip("127.0.0.1").is_loopback());
    assert!(ip("127.255.0.9").is_loopback());
    assert!(!ip("128.0.0.1").is_loopback());

    assert!(ip("169.254.1.1").is_link_local());
    assert!(!ip("169.253.1.1").is_link_local());

    for site_local in ["10.1.2.3", "172.16.0.1", "172.31.255.255", "192.168.0.1"] {
        assert!(ip(site_local).is_site_local(), "{site_local}");
        assert!(ip(site_local).is_unicast(), "{site_local}");
    }
    assert!(!ip("172.32.0.1").is_site_local());
    assert!(!ip("192.169.0.1").is_site_local());

    let well_known = ip("224.0.0.1");
    assert!(well_known.is_multicast());
    assert!(well_known.is_well_known_mc());
    assert!(well_known.is_link_local_mc());
    assert!(!well_known.is_global_mc());
    assert!(!well_known.is_unicast());

    let global = ip("224.0.1.1");
    assert!(global.is_global_mc());
    assert!(!global.is_well_known_mc());
    assert!(ip("238.0.0.0").is_global_mc());
    assert!(!ip("238.0.0.1").is_global_mc());

    let site_local_mc = ip("239.255.0.1");
    assert!(site_local_mc.is_multicast());
    assert!(site_local_mc.is_site_local_mc());
    assert!(!site_local_mc.is_org_local_mc());
    assert!(!site_local_mc.is_global_mc());

    assert!(ip("239.192.7.7").is_org_local_mc());
    assert!(!ip("239.193.7.7").is_org_local_mc());
    assert!(!ip("240.0.0.1").is_multicast());

    // IPv6-only predicates are always false for IPv4
    for text in ["0.0.0.0", "10.0.0.1", "224.0.0.1", "255.255.255.255"] {
        let address = ip(text);
        assert!(!address.is_node_local_mc(), "{text}");
        assert!(!address.is_ipv4_compatible(), "{text}");
        assert!(!address.is_ipv4_mapped(), "{text}");
    }
}

#[test]
fn ipv6_classification() {
    let _init_guard = zebra_test::init();

    let wildcard = ip("::");
    assert!(wildcard.is_wildcard());
    assert!(!wildcard.is_unicast());
    assert!(!wildcard.is_loopback());

    assert!(ip("::1").is_loopback());
    assert!(!ip("::2").is_loopback());

    assert!(ip("fe80::1").is_link_local());
    assert!(ip("febf::1").is_link_local());
    assert!(!ip("fec0::1").is_link_local());

    assert!(ip("fec0::1").is_site_local());
    assert!(ip("fc00::1").is_site_local());
    assert!(ip("fd12:3456::1").is_site_local());
    assert!(!ip("fe80::1").is_site_local());
    assert!(!ip("2001:db8::1").is_site_local());

    let mapped = ip("::ffff:10.0.0.1");
    assert!(mapped.is_ipv4_mapped());
    assert!(!mapped.is_ipv4_compatible());

    let compatible = ip("::10.0.0.1");
    assert!(compatible.is_ipv4_compatible());
    assert!(!compatible.is_ipv4_mapped());

    let all_nodes = ip("ff02::1");
    assert!(all_nodes.is_multicast());
    assert!(all_nodes.is_well_known_mc());
    assert!(all_nodes.is_link_local_mc());
    assert!(!all_nodes.is_unicast());

    // Transient multicast addresses are not well-known
    let transient = ip("ff12::1234");
    assert!(transient.is_link_local_mc());
    assert!(!transient.is_well_known_mc());

    assert!(ip("ff01::1").is_node_local_mc());
    assert!(ip("ff05::2").is_site_local_mc());
    assert!(ip("ff08::1").is_org_local_mc());
    assert!(ip("ff0e::1").is_global_mc());
    assert!(ip("ff1e::1").is_global_mc());

    // Multicast addresses with other flag bits set have no scope predicates
    let prefix_based = ip("ff3e::1");
    assert!(prefix_based.is_multicast());
    assert!(!prefix_based.is_global_mc());

    // IPv6 has no broadcast address
    let all_ones = IpAddress::from_prefix(128, Family::Ipv6).expect("prefix is in range");
    assert!(!all_ones.is_broadcast());
    assert!(all_ones.is_multicast());

    assert!(ip("2001:db8::1").is_unicast());
}

#[test]
fn ordering_and_equality() {
    let _init_guard = zebra_test::init();

    // IPv4 sorts before IPv6, regardless of value
    assert!(ip("255.255.255.255") < ip("::"));

    // Scope sorts before bytes
    assert!(ip("::1") < ip("::1%1"));
    assert!(ip("fe80::1%1") < ip("::1%2"));

    assert!(ip("10.0.0.1") < ip("10.0.0.2"));
    assert!(ip("fe80::1%1") < ip("fe80::2%1"));

    let mut addresses = vec![
        ip("fe80::1%2"),
        ip("::1"),
        ip("192.168.1.10"),
        ip("fe80::1%1"),
        ip("10.0.0.1"),
        ip("ff02::1"),
    ];
    addresses.sort();

    assert_eq!(
        addresses,
        vec![
            ip("10.0.0.1"),
            ip("192.168.1.10"),
            ip("::1"),
            ip("ff02::1"),
            ip("fe80::1%1"),
            ip("fe80::1%2"),
        ]
    );

    // An IPv4-mapped address is a different address to its IPv4 form,
    // until it is canonicalised
    let mapped = ip("::ffff:10.0.0.1");
    assert_ne!(mapped, ip("10.0.0.1"));
    assert_eq!(mapped.canonical(), ip("10.0.0.1"));
    assert_eq!(ip("fe80::1%3").canonical(), ip("fe80::1%3"));
    assert_eq!(ip("10.0.0.1").canonical(), ip("10.0.0.1"));
}

#[test]
fn netmask_and_address() -> Result<()> {
    let _init_guard = zebra_test::init();

    let network = (ip("255.255.255.0") & ip("192.168.1.10"))?;
    assert_eq!(network.to_string(), "192.168.1.0");

    let network = (&ip("192.168.1.10") & &IpAddress::from_prefix(16, Family::Ipv4)?)?;
    assert_eq!(network.to_string(), "192.168.0.0");

    Ok(())
}

#[test]
fn bitwise_operators() -> Result<()> {
    let _init_guard = zebra_test::init();

    assert_eq!((ip("10.0.0.0") | ip("0.0.0.5"))?, ip("10.0.0.5"));
    assert_eq!((ip("10.0.0.5") ^ ip("10.0.0.1"))?, ip("0.0.0.4"));
    assert_eq!(!ip("255.255.255.0"), ip("0.0.0.255"));
    assert_eq!(
        !ip("::"),
        IpAddress::from_prefix(128, Family::Ipv6)?,
    );

    assert_eq!(
        (ip("2001:db8::1") & IpAddress::from_prefix(32, Family::Ipv6)?)?,
        ip("2001:db8::")
    );
    assert_eq!((ip("2001:db8::") | ip("::42"))?, ip("2001:db8::42"));

    // Complement keeps the scope
    assert_eq!((!ip("fe80::1%3")).scope(), 3);

    Ok(())
}

#[test]
fn bitwise_operators_reject_mismatched_families() {
    let _init_guard = zebra_test::init();

    let v4 = ip("10.0.0.1");
    let v6 = ip("::1");

    for result in [v4 & v6, v4 | v6, v4 ^ v6, v6 & v4, v6 | v4, v6 ^ v4] {
        let error = result.expect_err("mismatched families should be rejected");
        assert!(error.is_invalid_argument());
    }
}

#[test]
fn bitwise_operators_ipv6_scopes() -> Result<()> {
    let _init_guard = zebra_test::init();

    let scoped = ip("fe80::1234%2");
    let netmask = IpAddress::from_prefix(64, Family::Ipv6)?;

    // An unscoped operand takes the other operand's scope
    assert_eq!((scoped & netmask)?, ip("fe80::%2"));
    assert_eq!((netmask & scoped)?, ip("fe80::%2"));

    // Matching scopes are kept
    assert_eq!((scoped | ip("::1%2"))?, ip("fe80::1235%2"));

    // Different scopes are rejected
    let error = (scoped ^ ip("fe80::1%3")).expect_err("mismatched scopes should be rejected");
    assert!(error.is_invalid_argument());

    Ok(())
}

#[test]
fn mask_in_place() -> Result<()> {
    let _init_guard = zebra_test::init();

    let netmask = ip("255.255.255.0");

    let mut address = ip("192.168.1.10");
    address.mask(&netmask)?;
    assert_eq!(address, ip("192.168.1.0"));

    // Masking is idempotent
    address.mask(&netmask)?;
    assert_eq!(address, ip("192.168.1.0"));

    let mut address = ip("192.168.1.10");
    address.mask_with(&netmask, &ip("0.0.0.7"))?;
    assert_eq!(address, ip("192.168.1.7"));

    // The scope is kept, even though the mask is unscoped
    let mut address = ip("fe80::1234%4");
    address.mask(&IpAddress::from_prefix(64, Family::Ipv6)?)?;
    assert_eq!(address, ip("fe80::%4"));

    Ok(())
}

#[test]
fn mask_rejects_mismatched_families() {
    let _init_guard = zebra_test::init();

    let original = ip("192.168.1.10");
    let mut address = original;

    let error = address
        .mask(&IpAddress::from_prefix(64, Family::Ipv6).expect("prefix is in range"))
        .expect_err("mismatched families should be rejected");
    assert!(error.is_invalid_argument());
    assert_eq!(address, original);

    let error = address
        .mask_with(&ip("255.255.255.0"), &ip("::1"))
        .expect_err("mismatched families should be rejected");
    assert!(error.is_invalid_argument());
    assert_eq!(address, original);
}

#[test]
fn wire_encoding_of_ipv4_address() -> Result<()> {
    let _init_guard = zebra_test::init();

    let bytes = ip("10.0.0.1").wire_serialize_to_vec()?;
    assert_eq!(bytes, vec![0x04, 0x0a, 0x00, 0x00, 0x01]);

    let address: IpAddress = bytes.as_slice().wire_deserialize_into()?;
    assert_eq!(address.to_string(), "10.0.0.1");

    Ok(())
}

#[test]
fn wire_vectors_round_trip() -> Result<()> {
    let _init_guard = zebra_test::init();

    for (bytes, text) in WIRE_IP_VECTORS.iter() {
        let mut cursor = Cursor::new(bytes.as_slice());
        let address = IpAddress::wire_deserialize(&mut cursor)?;

        assert_eq!(cursor.position() as usize, bytes.len(), "vector: {text}");
        assert_eq!(address.to_string(), *text);
        assert_eq!(address.scope(), 0);

        assert_eq!(&address.wire_serialize_to_vec()?, bytes);
    }

    Ok(())
}

#[test]
fn wire_encoding_drops_ipv6_scope() -> Result<()> {
    let _init_guard = zebra_test::init();

    let scoped = ip("fe80::1%9");
    let bytes = scoped.wire_serialize_to_vec()?;
    assert_eq!(bytes.len(), crate::serialization::IPV6_WIRE_LEN);
    assert_eq!(bytes[0], 16);

    let decoded: IpAddress = bytes.as_slice().wire_deserialize_into()?;
    assert_eq!(decoded.scope(), 0);
    assert_eq!(decoded.raw_bytes(), scoped.raw_bytes());
    assert_ne!(decoded, scoped);

    Ok(())
}

#[test]
fn wire_invalid_lengths_are_rejected_before_reading_the_address() {
    let _init_guard = zebra_test::init();

    for bytes in WIRE_INVALID_LENGTH_VECTORS.iter() {
        let mut cursor = Cursor::new(bytes.as_slice());

        let error = IpAddress::wire_deserialize(&mut cursor)
            .expect_err("invalid address lengths should be rejected");

        assert!(
            matches!(error, SerializationError::Address(AddressError::InvalidArgument(_))),
            "unexpected error: {error:?}",
        );
        assert_eq!(cursor.position(), 1, "only the length byte should be read");
    }
}

#[test]
fn wire_truncated_input_is_an_io_error() {
    let _init_guard = zebra_test::init();

    for bytes in WIRE_TRUNCATED_VECTORS.iter() {
        let error = IpAddress::wire_deserialize(bytes.as_slice())
            .expect_err("truncated input should be rejected");

        match error {
            SerializationError::Io(io_error) => {
                assert_eq!(io_error.kind(), std::io::ErrorKind::UnexpectedEof);
            }
            _ => panic!("truncated input should fail with an io::Error: {error:?}"),
        }
    }
}

#[test]
fn std_net_conversions() {
    let _init_guard = zebra_test::init();

    assert_eq!(IpAddress::from(Ipv4Addr::new(10, 0, 0, 1)), ip("10.0.0.1"));
    assert_eq!(IpAddress::from(Ipv6Addr::LOCALHOST), ip("::1"));
    assert_eq!(
        IpAddress::from(IpAddr::V4(Ipv4Addr::BROADCAST)),
        IpAddress::broadcast()
    );

    let socket_addr = SocketAddrV6::new("fe80::1".parse().expect("valid IPv6"), 8233, 0, 3);
    let address = IpAddress::from(SocketAddr::V6(socket_addr));
    assert_eq!(address, ip("fe80::1%3"));
    assert_eq!(address.to_socket_addr(8233), SocketAddr::V6(socket_addr));

    let socket_addr: SocketAddr = "192.168.1.10:8233".parse().expect("valid socket address");
    assert_eq!(IpAddress::from(socket_addr), ip("192.168.1.10"));
    assert_eq!(ip("192.168.1.10").to_socket_addr(8233), socket_addr);

    // `IpAddr` can't hold a scope
    assert_eq!(
        IpAddr::from(ip("fe80::1%3")),
        IpAddr::V6("fe80::1".parse().expect("valid IPv6"))
    );
}

#[test]
fn address_family_codes() {
    let _init_guard = zebra_test::init();

    assert_eq!(Family::from_af(libc::AF_INET), Ok(Family::Ipv4));
    assert_eq!(Family::from_af(libc::AF_INET6), Ok(Family::Ipv6));
    assert!(Family::from_af(libc::AF_UNIX)
        .expect_err("only IP families are supported")
        .is_invalid_argument());

    assert_eq!(Family::Ipv4.bit_len(), 32);
    assert_eq!(Family::Ipv6.bit_len(), 128);
    assert_eq!(Family::Ipv6.to_string(), "IPv6");
}

#[cfg(unix)]
#[test]
#[allow(unsafe_code)]
fn sockaddr_storage_conversion() {
    let _init_guard = zebra_test::init();

    // SAFETY: all-zero bytes are a valid `sockaddr_storage`,
    // and it is large enough and aligned for every socket address type.
    let mut storage: libc::sockaddr_storage = unsafe { std::mem::zeroed() };
    let storage_ptr: *mut libc::sockaddr_storage = &mut storage;

    {
        let sin = unsafe { &mut *storage_ptr.cast::<libc::sockaddr_in>() };
        sin.sin_family = libc::AF_INET as libc::sa_family_t;
        sin.sin_addr.s_addr = u32::from_ne_bytes([192, 168, 1, 10]);
    }
    assert_eq!(IpAddress::try_from(&storage), Ok(ip("192.168.1.10")));

    // SAFETY: as above
    let mut storage: libc::sockaddr_storage = unsafe { std::mem::zeroed() };
    let storage_ptr: *mut libc::sockaddr_storage = &mut storage;

    {
        let sin6 = unsafe { &mut *storage_ptr.cast::<libc::sockaddr_in6>() };
        sin6.sin6_family = libc::AF_INET6 as libc::sa_family_t;
        sin6.sin6_addr.s6_addr = ip("fe80::1").raw_bytes().try_into().expect("16 bytes");
        sin6.sin6_scope_id = 7;
    }
    assert_eq!(IpAddress::try_from(&storage), Ok(ip("fe80::1%7")));

    // SAFETY: as above
    let mut storage: libc::sockaddr_storage = unsafe { std::mem::zeroed() };
    storage.ss_family = libc::AF_UNIX as libc::sa_family_t;
    assert!(IpAddress::try_from(&storage)
        .expect_err("only IP families are supported")
        .is_invalid_argument());
}

#[test]
fn serde_uses_canonical_text() -> Result<()> {
    let _init_guard = zebra_test::init();

    let address = ip("FE80:0::1%2");

    let json = serde_json::to_string(&address)?;
    assert_eq!(json, "\"fe80::1%2\"");

    let decoded: IpAddress = serde_json::from_str(&json)?;
    assert_eq!(decoded, address);

    serde_json::from_str::<IpAddress>("\"not-an-address\"")
        .expect_err("invalid addresses should not deserialize");

    Ok(())
}

#[test]
fn debug_format_is_compact() {
    let _init_guard = zebra_test::init();

    assert_eq!(format!("{:?}", ip("10.0.0.1")), "IpAddress(10.0.0.1)");
    assert_eq!(format!("{:?}", ip("fe80::1%2")), "IpAddress(fe80::1%2)");
}

#[test]
fn display_padding_is_the_same_for_both_families() {
    let _init_guard = zebra_test::init();

    assert_eq!(format!("[{:>12}]", ip("1.2.3.4")), "[     1.2.3.4]");
    assert_eq!(format!("[{:>12}]", ip("::1")), "[         ::1]");
    assert_eq!(format!("[{:<12}]", ip("fe80::1%2")), "[fe80::1%2   ]");
    assert_eq!(format!("[{:^7}]", ip("::1")), "[  ::1  ]");

    // Padding never truncates
    assert_eq!(format!("[{:4}]", ip("fe80::1%2")), "[fe80::1%2]");

    // Unpadded output is unchanged
    assert_eq!(format!("{}", ip("fe80::1%2")), "fe80::1%2");
}
