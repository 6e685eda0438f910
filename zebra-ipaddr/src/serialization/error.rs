use std::io;

use thiserror::Error;

use crate::AddressError;

/// A wire serialization error.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// An io error that prevented deserialization
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The data to be deserialized was well-formed, but it does not describe
    /// a valid address.
    #[error("address error: {0}")]
    Address(#[from] AddressError),
}
