//! Contains test vectors for IP addresses:
//! * the length-prefixed binary wire format,
//! * text literals and their canonical forms.
//!
//! These vectors are read by `zebra_ipaddr::IpAddress`,
//! using its `WireDeserialize` and `FromStr` implementations.

use hex::FromHex;
use lazy_static::lazy_static;

lazy_static! {
    /// Array of valid wire format test vectors,
    /// with the canonical text form of each decoded address.
    ///
    /// Each vector should decode successfully, consuming every byte,
    /// and re-encode to the same bytes.
    pub static ref WIRE_IP_VECTORS: Vec<(Vec<u8>, &'static str)> = vec![
        (
            <Vec<u8>>::from_hex(concat!(
                "04",       // address length, 4
                "0a000001", // IPv4, 10.0.0.1
            ))
            .expect("Address bytes are in valid hex representation"),
            "10.0.0.1",
        ),
        (
            <Vec<u8>>::from_hex(concat!(
                "04",       // address length, 4
                "00000000", // IPv4 wildcard, 0.0.0.0
            ))
            .expect("Address bytes are in valid hex representation"),
            "0.0.0.0",
        ),
        (
            <Vec<u8>>::from_hex(concat!(
                "04",       // address length, 4
                "ffffffff", // IPv4 broadcast, 255.255.255.255
            ))
            .expect("Address bytes are in valid hex representation"),
            "255.255.255.255",
        ),
        (
            <Vec<u8>>::from_hex(concat!(
                "10",                               // address length, 16
                "00000000000000000000000000000001", // IPv6 loopback, ::1
            ))
            .expect("Address bytes are in valid hex representation"),
            "::1",
        ),
        (
            <Vec<u8>>::from_hex(concat!(
                "10",                               // address length, 16
                "fe800000000000000202b3fffe1e8329", // IPv6 link-local
            ))
            .expect("Address bytes are in valid hex representation"),
            "fe80::202:b3ff:fe1e:8329",
        ),
        (
            <Vec<u8>>::from_hex(concat!(
                "10",                       // address length, 16
                "00000000000000000000ffff", // IPv4-mapped IPv6 prefix, ::ffff...
                "7f000001",                 // IPv4, 127.0.0.1
            ))
            .expect("Address bytes are in valid hex representation"),
            "::ffff:127.0.0.1",
        ),
    ];

    /// Array of wire format test vectors with invalid address lengths.
    ///
    /// Each vector should be rejected after reading its length byte,
    /// without reading any address bytes.
    pub static ref WIRE_INVALID_LENGTH_VECTORS: Vec<Vec<u8>> = vec![
        // zero length
        <Vec<u8>>::from_hex("00")
            .expect("Address bytes are in valid hex representation"),

        // a length between the two families, followed by enough bytes for it
        <Vec<u8>>::from_hex(concat!(
            "08",               // address length, 8
            "0102030405060708", // not an address
        ))
        .expect("Address bytes are in valid hex representation"),

        // the largest length byte, which would overflow a 16 byte buffer
        <Vec<u8>>::from_hex(concat!(
            "ff",                               // address length, 255
            "00000000000000000000000000000001", // extra bytes
        ))
        .expect("Address bytes are in valid hex representation"),
    ];

    /// Array of wire format test vectors that end before the address bytes do.
    ///
    /// Each vector should fail with an io error.
    pub static ref WIRE_TRUNCATED_VECTORS: Vec<Vec<u8>> = vec![
        // empty input
        Vec::new(),

        <Vec<u8>>::from_hex(concat!(
            "04",     // address length, 4
            "0a0000", // only 3 address bytes
        ))
        .expect("Address bytes are in valid hex representation"),

        <Vec<u8>>::from_hex(concat!(
            "10",     // address length, 16
            "fe80",   // only 2 address bytes
        ))
        .expect("Address bytes are in valid hex representation"),
    ];
}

/// Text literals that parse successfully, with their canonical text forms.
pub const TEXT_IP_VECTORS: &[(&str, &str)] = &[
    // IPv4
    ("192.168.1.10", "192.168.1.10"),
    ("  10.0.0.1\t", "10.0.0.1"),
    ("255.255.255.255", "255.255.255.255"),
    // wildcards
    ("", "0.0.0.0"),
    ("0.0.0.0", "0.0.0.0"),
    (" 0.0.0.0 ", "0.0.0.0"),
    ("::", "::"),
    // IPv6 zero compression
    ("::1", "::1"),
    ("0:0:0:0:0:0:0:1", "::1"),
    ("2001:DB8:0:0:0:0:0:1", "2001:db8::1"),
    ("2001:db8:0:0:1:0:0:1", "2001:db8::1:0:0:1"),
    ("2001:0db8:0000:0000:0000:ff00:0042:8329", "2001:db8::ff00:42:8329"),
    ("fe80:0:0:0:0:0:0:0", "fe80::"),
    ("ff02::1", "ff02::1"),
    // IPv4 tails
    ("::ffff:192.0.2.128", "::ffff:192.0.2.128"),
    // zones
    ("fe80::1%2", "fe80::1%2"),
    ("fe80::1%0", "fe80::1"),
    ("::%3", "::%3"),
];

/// Text that does not parse as an address of either family.
pub const TEXT_INVALID_IP_VECTORS: &[&str] = &[
    "not-an-address",
    "   ",
    "256.0.0.1",
    "1.2.3",
    "1.2.3.4.5",
    "01.2.3.4",
    "1.2.3.4/24",
    "::1::2",
    "12345::",
    "1:2:3:4:5:6:7:8:9",
    "fe80::1%",
    "fe80::1%eth0",
    "fe80::1%-1",
    "fe80::1%+5",
    "fe80::1% 5",
    // zero addresses that aren't the wildcard literals
    "0::0",
    "0:0:0:0:0:0:0:0",
];
