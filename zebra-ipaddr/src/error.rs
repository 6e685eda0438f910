use thiserror::Error;

/// An error constructing or combining [`IpAddress`](crate::IpAddress) values.
#[derive(Error, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AddressError {
    /// The input has the wrong shape for any address family.
    ///
    /// For example: a raw byte buffer that is neither 4 nor 16 bytes long,
    /// a prefix length wider than the family, an unknown address family code,
    /// or operands of different families passed to a bitwise or mask operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The text looks like an address literal, but it does not parse as
    /// an IPv4 or an IPv6 address.
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),
}

impl AddressError {
    /// Returns true if this is an [`AddressError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AddressError::InvalidArgument(_))
    }

    /// Returns true if this is an [`AddressError::InvalidAddress`].
    pub fn is_invalid_address(&self) -> bool {
        matches!(self, AddressError::InvalidAddress(_))
    }
}
