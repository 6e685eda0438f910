//! Family-specific address payloads.
//!
//! Each payload owns its raw network-order bytes inline, and implements the
//! same operations: parsing, formatting, classification, bitwise arithmetic
//! and masking. [`IpAddress`](crate::IpAddress) owns exactly one of them.

mod ipv4;
mod ipv6;

pub(crate) use ipv4::Ipv4Variant;
pub(crate) use ipv6::Ipv6Variant;

/// Returns `N` bytes with the leading `prefix` bits set, and all other bits clear.
///
/// Prefixes longer than `N * 8` set every bit, so callers must check the
/// prefix against the family bit width first.
pub(crate) fn prefix_mask<const N: usize>(prefix: u32) -> [u8; N] {
    let mut remaining = prefix;

    std::array::from_fn(|_| {
        let bits = remaining.min(8);
        remaining -= bits;

        // `checked_shr` handles the 8-bit shift, which would overflow a `u8`
        !0xffu8.checked_shr(bits).unwrap_or(0)
    })
}

/// Counts the leading 1-bits in `bytes`, stopping at the first clear bit.
pub(crate) fn leading_ones(bytes: &[u8]) -> u32 {
    let mut count = 0;

    for byte in bytes {
        let ones = byte.leading_ones();
        count += ones;

        if ones < 8 {
            break;
        }
    }

    count
}

/// Applies `op` to each pair of bytes in `left` and `right`.
pub(crate) fn zip_bytes<const N: usize>(
    left: &[u8; N],
    right: &[u8; N],
    op: impl Fn(u8, u8) -> u8,
) -> [u8; N] {
    std::array::from_fn(|i| op(left[i], right[i]))
}

/// Keeps the bits of `bytes` selected by `mask`, and takes the remaining bits from `set`.
pub(crate) fn mask_bytes<const N: usize>(
    bytes: &[u8; N],
    mask: &[u8; N],
    set: &[u8; N],
) -> [u8; N] {
    std::array::from_fn(|i| (bytes[i] & mask[i]) | (set[i] & !mask[i]))
}
