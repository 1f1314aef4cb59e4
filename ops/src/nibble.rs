//! 4-bit values and the byte <-> nibble conversions used to feed the shift
//! and logic tables.
use anyhow::{ensure, Error, Result};
use derive_more::{Deref, Display, Into};

/// Number of distinct nibble values.
pub const NIBBLE_VALUES: u8 = 16;

/// A 4-bit unsigned value in `0..=15`.
#[derive(Clone, Copy, Debug, Default, Display, Deref, Into, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Nibble(u8);

impl Nibble {
    pub const MAX: Nibble = Nibble(0xF);
    pub const ZERO: Nibble = Nibble(0);

    /// Keep only the low four bits of `value`.
    #[must_use]
    pub fn masked(value: u8) -> Self { Self(value & 0xF) }

    /// All nibbles from `15` down to `0`, the order tables are laid out in.
    pub fn descending() -> impl Iterator<Item = Nibble> + Clone {
        (0..NIBBLE_VALUES).rev().map(Nibble)
    }

    /// Split a byte into its `(high, low)` nibbles.
    #[must_use]
    pub fn split(byte: u8) -> (Self, Self) { (Self(byte >> 4), Self::masked(byte)) }

    /// Inverse of [`Nibble::split`].
    ///
    /// The high nibble is placed with a multiply so the same expression works
    /// on a machine that only has `ADD`/`MUL`.
    #[must_use]
    pub fn join(high: Self, low: Self) -> u8 { high.0 * 16 + low.0 }

    /// Logical shift right by one.
    #[must_use]
    pub fn shr1(self) -> Self { Self(self.0 >> 1) }

    /// Logical shift left by one, overflow past bit 3 discarded.
    #[must_use]
    pub fn shl1(self) -> Self { Self::masked(self.0 << 1) }

    /// Lowercase hexadecimal digit, no prefix.
    #[must_use]
    pub fn to_hex(self) -> String { format!("{:x}", self.0) }

    /// Binary digits, no prefix and no zero padding.
    #[must_use]
    pub fn to_bin(self) -> String { format!("{:b}", self.0) }
}

impl TryFrom<u8> for Nibble {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ensure!(value < NIBBLE_VALUES, "{value:#x} does not fit in a nibble");
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use itertools::{iproduct, Itertools};
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    #[test]
    fn try_from_rejects_wide_values() {
        assert_eq!(*Nibble::try_from(15).unwrap(), 15);
        assert!(Nibble::try_from(16).is_err());
        assert!(Nibble::try_from(u8::MAX).is_err());
    }

    #[test]
    fn descending_covers_every_nibble_once() {
        let values = Nibble::descending().map(u8::from).collect_vec();
        assert_eq!(values, (0..16).rev().collect_vec());
    }

    #[test]
    fn descending_pairs_cover_every_byte() {
        let bytes = iproduct!(Nibble::descending(), Nibble::descending())
            .map(|(high, low)| Nibble::join(high, low))
            .collect_vec();
        assert_eq!(bytes, (0..=u8::MAX).rev().collect_vec());
    }

    #[test_case(0x32, 0x3, 0x2; "0x32")]
    #[test_case(0xAB, 0xA, 0xB; "0xab")]
    #[test_case(0x00, 0x0, 0x0; "zero")]
    #[test_case(0xFF, 0xF, 0xF; "all ones")]
    fn split_byte(byte: u8, high: u8, low: u8) {
        let (h, l) = Nibble::split(byte);
        assert_eq!((*h, *l), (high, low));
        assert_eq!(Nibble::join(h, l), byte);
    }

    #[test_case(0b1111, "f", "1111")]
    #[test_case(0b1010, "a", "1010")]
    #[test_case(0b0001, "1", "1")]
    #[test_case(0b0000, "0", "0")]
    fn renders_without_prefix_or_padding(value: u8, hex: &str, bin: &str) {
        let n = Nibble::masked(value);
        assert_eq!(n.to_hex(), hex);
        assert_eq!(n.to_bin(), bin);
    }

    proptest! {
        #[test]
        fn split_join_is_identity(byte in any::<u8>()) {
            let (h, l) = Nibble::split(byte);
            prop_assert_eq!(Nibble::join(h, l), byte);
        }

        #[test]
        fn shifts_match_native(x in 0..16_u8) {
            let n = Nibble::masked(x);
            prop_assert_eq!(*n.shr1(), x >> 1);
            prop_assert_eq!(*n.shl1(), (x << 1) & 0xF);
        }
    }
}
