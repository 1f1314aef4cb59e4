//! Lookup-table versions of the byte and nibble logic operations.
//!
//! A machine without AND or shift opcodes cannot evaluate
//! [`isolate_even`](crate::byte::isolate_even) directly, so its 256 results
//! are preloaded and picked by index. Like the shift tables, entries are
//! stored for `255` down to `0`. Doubling is written as `v + v`.
use itertools::{iproduct, Itertools};
use log::trace;

use crate::byte::{isolate_even, BitwiseOp};
use crate::nibble::Nibble;

/// `isolate_even(x)` for every byte, stored in descending order of `x`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HelperTable {
    entries: Vec<u8>,
}

impl Default for HelperTable {
    fn default() -> Self { Self::new() }
}

impl HelperTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: (0..=u8::MAX).rev().map(isolate_even).collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[u8] { &self.entries }

    #[must_use]
    pub fn isolate_even(&self, x: u8) -> u8 { self.entries[usize::from(u8::MAX - x)] }

    fn split(&self, v: u8) -> (u8, u8) {
        let even = self.isolate_even(v);
        (even, v - (even + even))
    }

    /// Same lane arithmetic as [`BitwiseOp::arithmetic`], with every use of
    /// the helper served from the table.
    #[must_use]
    pub fn apply(&self, op: BitwiseOp, a: u8, b: u8) -> u8 {
        let (a_even, a_odd) = self.split(a);
        let (b_even, b_odd) = self.split(b);
        let reduce = |sum: u8| {
            let carry = self.isolate_even(sum);
            match op {
                BitwiseOp::Xor => sum - (carry + carry),
                BitwiseOp::Or => sum - carry,
                BitwiseOp::And => carry,
            }
        };
        let even = reduce(a_even + b_even);
        let odd = reduce(a_odd + b_odd);
        let out = odd + (even + even);
        trace!("table {op}({a:#04x}, {b:#04x}) = {out:#04x}");
        out
    }

    #[must_use]
    pub fn xor(&self, a: u8, b: u8) -> u8 { self.apply(BitwiseOp::Xor, a, b) }

    #[must_use]
    pub fn or(&self, a: u8, b: u8) -> u8 { self.apply(BitwiseOp::Or, a, b) }

    #[must_use]
    pub fn and(&self, a: u8, b: u8) -> u8 { self.apply(BitwiseOp::And, a, b) }
}

/// `x & y` for every pair of nibbles, indexed by `255 - join(x, y)`.
///
/// Joining the two nibbles into one byte turns a two-operand lookup into a
/// single pick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NibbleAndTable {
    entries: Vec<Nibble>,
}

impl Default for NibbleAndTable {
    fn default() -> Self { Self::new() }
}

impl NibbleAndTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: iproduct!(Nibble::descending(), Nibble::descending())
                .map(|(x, y)| Nibble::masked(*x & *y))
                .collect_vec(),
        }
    }

    #[must_use]
    pub fn and(&self, x: Nibble, y: Nibble) -> Nibble {
        self.entries[usize::from(u8::MAX - Nibble::join(x, y))]
    }

    /// `x ^ y == x + y - 2 * (x & y)`.
    #[must_use]
    pub fn xor(&self, x: Nibble, y: Nibble) -> Nibble {
        let both = *self.and(x, y);
        Nibble::masked(*x + *y - (both + both))
    }
}
