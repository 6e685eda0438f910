use std::io;

use super::SerializationError;

/// Bit-exact binary deserialization.
pub trait WireDeserialize: Sized {
    /// Try to read `self` from the given `reader`.
    ///
    /// Implementations must not read past the end of the encoded value,
    /// even when they reject it.
    fn wire_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Helper for deserializing more succinctly via type inference
pub trait WireDeserializeInto {
    /// Deserialize based on type inference
    fn wire_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: WireDeserialize;
}

impl<R: io::Read> WireDeserializeInto for R {
    fn wire_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: WireDeserialize,
    {
        T::wire_deserialize(self)
    }
}
