//! Binary wire serialization.
//!
//! This module contains two traits: `WireSerialize` and `WireDeserialize`,
//! analogs of the Serde `Serialize` and `Deserialize` traits, but intended for
//! bit-exact binary formats that are shared with other implementations.
//!
//! An [`IpAddress`](crate::IpAddress) is encoded as:
//! * 1 byte: the raw address length, 4 or 16,
//! * 4 or 16 bytes: the raw address, in network byte order.
//!
//! There is no magic number, version, or scope field. Decoding an IPv6
//! address always produces an unscoped address, so callers that need the
//! scope id must send it separately.

mod error;
mod wire_deserialize;
mod wire_serialize;

pub use error::SerializationError;
pub use wire_deserialize::{WireDeserialize, WireDeserializeInto};
pub use wire_serialize::WireSerialize;

/// The encoded size of an IPv4 address: a length byte and 4 address bytes.
pub const IPV4_WIRE_LEN: usize = 1 + 4;

/// The encoded size of an IPv6 address: a length byte and 16 address bytes.
pub const IPV6_WIRE_LEN: usize = 1 + 16;

/// The largest encoded size of any address.
pub const MAX_ADDRESS_WIRE_LEN: usize = IPV6_WIRE_LEN;
