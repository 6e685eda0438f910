//! Wire format for [`IpAddress`].

use std::io;

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::{
    serialization::{SerializationError, WireDeserialize, WireSerialize},
    Family,
};

use super::IpAddress;

impl WireSerialize for IpAddress {
    /// Writes the address length byte, then the raw address bytes.
    /// The IPv6 scope id is not written.
    fn wire_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        // Address lengths are always 4 or 16, so they fit in a byte.
        writer.write_u8(self.length() as u8)?;
        writer.write_all(self.raw_bytes())
    }
}

impl WireDeserialize for IpAddress {
    /// Reads an address length byte, then that many raw address bytes.
    ///
    /// Lengths other than 4 and 16 are rejected before any address bytes
    /// are read. IPv6 addresses are always unscoped.
    fn wire_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let length = reader.read_u8()?;

        let family = Family::from_byte_len(length.into()).map_err(|error| {
            debug!(?length, "rejected IP address with invalid wire length");
            error
        })?;

        let mut buf = [0; 16];
        let raw = &mut buf[..family.byte_len()];
        reader.read_exact(raw)?;

        Ok(IpAddress::from_raw(raw)?)
    }
}
