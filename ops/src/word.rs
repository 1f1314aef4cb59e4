//! Wider words, handled one big-endian byte at a time.
use itertools::izip;

use crate::byte::BitwiseOp;
use crate::table::HelperTable;

/// Unsigned words that decompose into a fixed number of bytes.
pub trait ByteWord: Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_be_bytes(self) -> Self::Bytes;

    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_byte_word {
    ($($t:ty),*) => {
        $(
            impl ByteWord for $t {
                type Bytes = [u8; core::mem::size_of::<$t>()];

                fn to_be_bytes(self) -> Self::Bytes { <$t>::to_be_bytes(self) }

                fn from_be_bytes(bytes: Self::Bytes) -> Self { <$t>::from_be_bytes(bytes) }
            }
        )*
    };
}

impl_byte_word!(u8, u16, u32, u64);

/// Apply `op` to every byte pair of `a` and `b` through the helper table.
#[must_use]
pub fn apply<W: ByteWord>(table: &HelperTable, op: BitwiseOp, a: W, b: W) -> W {
    let (a, b) = (a.to_be_bytes(), b.to_be_bytes());
    let mut out = W::Bytes::default();
    for (o, &x, &y) in izip!(out.as_mut(), a.as_ref(), b.as_ref()) {
        *o = table.apply(op, x, y);
    }
    W::from_be_bytes(out)
}

#[must_use]
pub fn xor<W: ByteWord>(table: &HelperTable, a: W, b: W) -> W { apply(table, BitwiseOp::Xor, a, b) }

#[must_use]
pub fn or<W: ByteWord>(table: &HelperTable, a: W, b: W) -> W { apply(table, BitwiseOp::Or, a, b) }

#[must_use]
pub fn and<W: ByteWord>(table: &HelperTable, a: W, b: W) -> W { apply(table, BitwiseOp::And, a, b) }
