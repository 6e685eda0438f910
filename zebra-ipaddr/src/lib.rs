//! IP address values for Zebra.
//!
//! [`IpAddress`] holds either an IPv4 or an IPv6 address behind a single
//! copyable, comparable value type. The family is chosen once, when the value
//! is constructed, and every later operation dispatches on it.
//!
//! ## Construction
//!
//! Addresses can be built by:
//!  * parsing text, with [`IpAddress::parse`], [`IpAddress::try_parse`] or
//!    [`str::parse`], which picks the family from the literal,
//!  * parsing text into a specific [`Family`], with [`IpAddress::parse_family`],
//!  * copying raw network-order bytes, with [`IpAddress::from_raw`] and
//!    [`IpAddress::from_raw_with_scope`],
//!  * building a netmask from a prefix length, with [`IpAddress::from_prefix`],
//!  * converting `std::net` and `libc` socket addresses, and
//!  * the well-known [`IpAddress::wildcard`] and [`IpAddress::broadcast`] constants.
//!
//! ## Network arithmetic
//!
//! `&`, `|` and `^` combine two addresses of the same family byte by byte, and
//! return an [`AddressError::InvalidArgument`] when the families differ.
//! `!` complements an address. [`IpAddress::mask`] and [`IpAddress::mask_with`]
//! replace host bits in place.
//!
//! ## Ordering
//!
//! Addresses order by byte length, then IPv6 scope id, then raw bytes.
//! So every IPv4 address sorts before every IPv6 address.
//!
//! ## Wire format
//!
//! The [`serialization`] module encodes an address as a single length byte
//! followed by its raw bytes. IPv6 scope ids are not transmitted.
#![doc(html_favicon_url = "https://zfnd.org/wp-content/uploads/2022/03/zebra-favicon-128.png")]
#![doc(html_logo_url = "https://zfnd.org/wp-content/uploads/2022/03/zebra-icon.png")]
#![doc(html_root_url = "https://docs.rs/zebra_ipaddr")]
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![deny(clippy::await_holding_lock)]
#![deny(unsafe_code)]

#[macro_use]
extern crate tracing;

mod address;
mod error;
mod family;
mod variant;

pub mod serialization;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod arbitrary;


pub use address::{IpAddress, IPV4_WILDCARD_LITERAL, IPV6_WILDCARD_LITERAL};
pub use error::AddressError;
pub use family::Family;
