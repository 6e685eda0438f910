//! Bitwise network arithmetic on [`IpAddress`] values.
//!
//! Binary operators return a `Result`, because both operands must have the
//! same family. Mixed-family operands are never truncated or padded.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{
    variant::{Ipv4Variant, Ipv6Variant},
    AddressError,
};

use super::{IpAddress, Variant};

impl IpAddress {
    /// Combines this address with `other` using a byte-wise operator.
    ///
    /// IPv6 operands must have the same scope id, or one of them must be
    /// unscoped. The result has the scope id of the scoped operand.
    fn combine(
        &self,
        other: &IpAddress,
        op_name: &'static str,
        v4_op: impl FnOnce(Ipv4Variant, Ipv4Variant) -> Ipv4Variant,
        v6_op: impl FnOnce(Ipv6Variant, Ipv6Variant) -> Ipv6Variant,
    ) -> Result<IpAddress, AddressError> {
        match (&self.variant, &other.variant) {
            (Variant::V4(left), Variant::V4(right)) => Ok(v4_op(*left, *right).into()),
            (Variant::V6(left), Variant::V6(right)) => {
                let scope = match (left.scope(), right.scope()) {
                    (left, right) if left == right => left,
                    (0, scoped) | (scoped, 0) => scoped,
                    _ => {
                        debug!(
                            left = %self,
                            right = %other,
                            op_name,
                            "rejected bitwise operation with mismatched IPv6 scopes",
                        );
                        return Err(AddressError::InvalidArgument(
                            "bitwise operands have different IPv6 scope ids",
                        ));
                    }
                };

                Ok(v6_op(*left, *right).with_scope(scope).into())
            }
            _ => {
                debug!(
                    left = %self,
                    right = %other,
                    op_name,
                    "rejected bitwise operation with mismatched address families",
                );
                Err(AddressError::InvalidArgument(
                    "bitwise operands must have the same address family",
                ))
            }
        }
    }
}

/// Implements a binary operator for owned and borrowed addresses.
macro_rules! impl_address_op {
    ($op_trait:ident, $op_fn:ident, $op:tt) => {
        impl $op_trait<&IpAddress> for &IpAddress {
            type Output = Result<IpAddress, AddressError>;

            fn $op_fn(self, rhs: &IpAddress) -> Self::Output {
                self.combine(
                    rhs,
                    stringify!($op_fn),
                    |left, right| left $op right,
                    |left, right| left $op right,
                )
            }
        }

        impl $op_trait for IpAddress {
            type Output = Result<IpAddress, AddressError>;

            fn $op_fn(self, rhs: IpAddress) -> Self::Output {
                (&self).$op_fn(&rhs)
            }
        }
    };
}

impl_address_op!(BitAnd, bitand, &);
impl_address_op!(BitOr, bitor, |);
impl_address_op!(BitXor, bitxor, ^);

impl Not for &IpAddress {
    type Output = IpAddress;

    /// Complements every bit of the address. The family and scope id are unchanged.
    fn not(self) -> IpAddress {
        match self.variant {
            Variant::V4(v4) => (!v4).into(),
            Variant::V6(v6) => (!v6).into(),
        }
    }
}

impl Not for IpAddress {
    type Output = IpAddress;

    fn not(self) -> IpAddress {
        !&self
    }
}
