//! Bitwise XOR, OR and AND of two bytes using only `+`, `-` and the helper
//!
//! ```text
//! f(x) = (x & 0b1010_1010) >> 1
//! ```
//!
//! Each byte is split into the bits at odd indices (the "even" part, which
//! `f` right-aligns) and the bits at even indices (the "odd" part). Adding two
//! such parts sums one bit of `a` and one bit of `b` inside every 2-bit lane
//! without carries leaking into the neighbouring lane, so a lane holds `0`,
//! `1` or `2`. `f` of that sum is the lane's AND, and subtracting it (or twice
//! it) recovers OR (or XOR).
use std::fmt;

use derive_more::Display;
use log::debug;

/// Bits at indices 1, 3, 5 and 7.
pub const EVEN_MASK: u8 = 0b1010_1010;

/// Demonstration inputs.
pub const DEMO_A: u8 = 0b0010_1010;
pub const DEMO_B: u8 = 0b1010_0100;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash)]
pub enum BitwiseOp {
    #[display("xor")]
    Xor,
    #[display("or")]
    Or,
    #[display("and")]
    And,
}

impl BitwiseOp {
    pub const ALL: [BitwiseOp; 3] = [BitwiseOp::Xor, BitwiseOp::Or, BitwiseOp::And];

    /// Reference result using the native operator.
    #[must_use]
    pub fn native(self, a: u8, b: u8) -> u8 {
        match self {
            BitwiseOp::Xor => a ^ b,
            BitwiseOp::Or => a | b,
            BitwiseOp::And => a & b,
        }
    }

    /// Result using only addition, subtraction and [`isolate_even`].
    #[must_use]
    pub fn arithmetic(self, a: u8, b: u8) -> u8 {
        match self {
            BitwiseOp::Xor => xor(a, b),
            BitwiseOp::Or => or(a, b),
            BitwiseOp::And => and(a, b),
        }
    }

    /// Fold a lane sum (each 2-bit lane holding `0..=2`) into the lane's
    /// result bit.
    fn reduce_lanes(self, sum: u8) -> u8 {
        match self {
            BitwiseOp::Xor => sum - (isolate_even(sum) << 1),
            BitwiseOp::Or => sum - isolate_even(sum),
            BitwiseOp::And => isolate_even(sum),
        }
    }
}

#[must_use]
pub fn isolate_even(x: u8) -> u8 { (x & EVEN_MASK) >> 1 }

/// A byte split into its two interleaved halves, both right-aligned in
/// their lanes, so that `value == odd + (even << 1)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lanes {
    pub even: u8,
    pub odd: u8,
}

impl From<u8> for Lanes {
    fn from(value: u8) -> Self {
        let even = isolate_even(value);
        Self {
            even,
            odd: value - (even << 1),
        }
    }
}

fn combine(op: BitwiseOp, a: u8, b: u8) -> u8 {
    let (a, b) = (Lanes::from(a), Lanes::from(b));
    let even = op.reduce_lanes(a.even + b.even);
    let odd = op.reduce_lanes(a.odd + b.odd);
    odd + (even << 1)
}

#[must_use]
pub fn xor(a: u8, b: u8) -> u8 { combine(BitwiseOp::Xor, a, b) }

#[must_use]
pub fn or(a: u8, b: u8) -> u8 { combine(BitwiseOp::Or, a, b) }

#[must_use]
pub fn and(a: u8, b: u8) -> u8 { combine(BitwiseOp::And, a, b) }

/// Every intermediate of the arithmetic XOR, kept for display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct XorDerivation {
    pub a: u8,
    pub b: u8,
    pub f_a: u8,
    pub a_even: u8,
    pub a_odd: u8,
    pub f_b: u8,
    pub b_even: u8,
    pub b_odd: u8,
    pub sum_even: u8,
    pub xor_even: u8,
    pub sum_odd: u8,
    pub xor_odd: u8,
    pub result: u8,
    pub reference: u8,
}

impl Default for XorDerivation {
    fn default() -> Self { Self::new(DEMO_A, DEMO_B) }
}

impl XorDerivation {
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        let f_a = isolate_even(a);
        let a_even = f_a << 1;
        let a_odd = a - a_even;

        let f_b = isolate_even(b);
        let b_even = f_b << 1;
        let b_odd = b - b_even;

        let sum_even = f_a + f_b;
        let xor_even = sum_even - (isolate_even(sum_even) << 1);

        let sum_odd = a_odd + b_odd;
        let xor_odd = sum_odd - (isolate_even(sum_odd) << 1);

        let derivation = Self {
            a,
            b,
            f_a,
            a_even,
            a_odd,
            f_b,
            b_even,
            b_odd,
            sum_even,
            xor_even,
            sum_odd,
            xor_odd,
            result: xor_odd + (xor_even << 1),
            reference: a ^ b,
        };
        debug!("{derivation:?}");
        derivation
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool { self.result == self.reference }
}

impl fmt::Display for XorDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "expect: {:#b}", self.result)?;
        writeln!(f, "actual: {:#b}", self.reference)
    }
}
