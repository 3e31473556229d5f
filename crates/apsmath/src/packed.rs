//! Fixed binary layout for bulk-array and FFI interop.
//!
//! A cliffor is serialized as exactly eight consecutive IEEE-754 doubles in
//! the order `[a0, a1, a2, a3, a23, a31, a12, a123]`: 64 bytes, naturally
//! aligned to 8. There is no sparse binary form: packing projects every
//! variant to the full embedding, and unpacking always reconstructs the
//! `Aps` variant. The layout is load-bearing for external consumers; do not
//! reorder.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::{Cliffor, Float};

/// The full 8-coefficient wire form of a [`Cliffor`].
///
/// `Pod`, so bulk slices cast freely: `bytemuck::cast_slice::<PackedCliffor,
/// u8>(..)` and back.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PackedCliffor(pub [Float; 8]);

/// Error unpacking a cliffor from a byte slice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnpackError {
    /// The slice was not exactly 64 bytes.
    #[error("expected 64 bytes, got {0}")]
    BadLength(usize),
}

impl PackedCliffor {
    /// The serialized size in bytes.
    pub const SIZE: usize = 64;

    /// The raw bytes of the eight coefficients, in native endianness.
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        bytemuck::cast_ref(self)
    }

    /// Reads a packed cliffor from exactly 64 bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        bytemuck::pod_read_unaligned(bytes)
    }
}

impl From<Cliffor> for PackedCliffor {
    fn from(value: Cliffor) -> Self {
        Self(value.coefficients())
    }
}

impl From<PackedCliffor> for Cliffor {
    fn from(value: PackedCliffor) -> Self {
        let [a0, a1, a2, a3, a23, a31, a12, a123] = value.0;
        Cliffor::aps(a0, a1, a2, a3, a23, a31, a12, a123)
    }
}

impl TryFrom<&[u8]> for PackedCliffor {
    type Error = UnpackError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: &[u8; Self::SIZE] = bytes
            .try_into()
            .map_err(|_| UnpackError::BadLength(bytes.len()))?;
        Ok(Self::from_bytes(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<PackedCliffor>(), 64);
        assert_eq!(std::mem::align_of::<PackedCliffor>(), 8);

        let packed = PackedCliffor::from(Cliffor::v3(1.0, 2.0, 3.0));
        assert_eq!(packed.0, [0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(&packed.as_bytes()[8..16], &1.0_f64.to_ne_bytes());
    }

    #[test]
    fn test_round_trip() {
        let v = Cliffor::h(1.0, -2.0, 0.5, 4.0);
        let unpacked = Cliffor::from(PackedCliffor::from(v));
        // Always reconstructs as the full variant, equal to the input under
        // the full-embedding equality.
        assert!(matches!(unpacked, Cliffor::Aps { .. }));
        assert_eq!(unpacked, v);
    }

    #[test]
    fn test_bad_length() {
        let bytes = [0_u8; 63];
        assert_eq!(
            PackedCliffor::try_from(&bytes[..]),
            Err(UnpackError::BadLength(63)),
        );

        let bytes = [0_u8; 64];
        let packed = PackedCliffor::try_from(&bytes[..]).unwrap();
        assert_eq!(Cliffor::from(packed), Cliffor::zero());
    }
}
