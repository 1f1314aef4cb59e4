//! Nibble shift tables.
//!
//! The target machine has no shift opcodes, so `x >> 1` and `x << 1` on a
//! nibble are answered by a 16 entry table. Tables are laid out from `15`
//! down to `0`: pushed onto a stack in that order, the entry for `x` sits at
//! depth `x`, which is what the `15 - x` index below models.
use anyhow::{ensure, Result};
use derive_more::Display;
use itertools::Itertools;
use log::trace;

use crate::nibble::{Nibble, NIBBLE_VALUES};

const BYTE_BITS: u8 = 8;

/// Largest shift amount a nibble table lookup chain is used for.
pub const MAX_ROUNDS: u8 = 3;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Direction {
    #[display("right")]
    Right,
    #[display("left")]
    Left,
}

impl Direction {
    #[must_use]
    pub fn apply(self, x: Nibble) -> Nibble {
        match self {
            Direction::Right => x.shr1(),
            Direction::Left => x.shl1(),
        }
    }
}

/// Precomputed single-bit shift results for every nibble, stored in
/// descending order of the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShiftTable {
    direction: Direction,
    entries: [Nibble; NIBBLE_VALUES as usize],
}

impl ShiftTable {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        let mut entries = [Nibble::ZERO; NIBBLE_VALUES as usize];
        for (entry, x) in entries.iter_mut().zip(Nibble::descending()) {
            *entry = direction.apply(x);
        }
        Self { direction, entries }
    }

    #[must_use]
    pub fn shr() -> Self { Self::new(Direction::Right) }

    #[must_use]
    pub fn shl() -> Self { Self::new(Direction::Left) }

    #[must_use]
    pub fn direction(&self) -> Direction { self.direction }

    /// Entries in storage order, i.e. the results for `15, 14, ..., 0`.
    #[must_use]
    pub fn entries(&self) -> &[Nibble] { &self.entries }

    /// `(x, shifted)` pairs in storage order.
    pub fn rows(&self) -> impl Iterator<Item = (Nibble, Nibble)> + '_ {
        Nibble::descending().zip_eq(self.entries.iter().copied())
    }

    #[must_use]
    pub fn lookup(&self, x: Nibble) -> Nibble { self.entries[usize::from(*Nibble::MAX - *x)] }

    /// Shift `x` by `rounds` bits by chaining single-bit lookups.
    ///
    /// # Errors
    ///
    /// Errors if `rounds` exceeds [`MAX_ROUNDS`].
    pub fn shift_by(&self, x: Nibble, rounds: u8) -> Result<Nibble> {
        ensure!(
            rounds <= MAX_ROUNDS,
            "cannot shift a nibble {} by {rounds} bits, at most {MAX_ROUNDS} allowed",
            self.direction
        );
        Ok((0..rounds).fold(x, |cur, round| {
            let next = self.lookup(cur);
            trace!("{} shift round {round}: {cur} -> {next}", self.direction);
            next
        }))
    }
}

/// Right and left tables together, the pair a program preloads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShiftTables {
    pub shr: ShiftTable,
    pub shl: ShiftTable,
}

impl Default for ShiftTables {
    fn default() -> Self {
        Self {
            shr: ShiftTable::shr(),
            shl: ShiftTable::shl(),
        }
    }
}

impl ShiftTables {
    /// `byte >> 1` using only nibble tables and addition.
    #[must_use]
    pub fn byte_shr1(&self, byte: u8) -> u8 {
        let (high, low) = Nibble::split(byte);
        // bit 0 of the high nibble moves to bit 3 of the low nibble
        let carried = self.shl.lookup(self.shl.lookup(self.shl.lookup(high)));
        Nibble::join(
            self.shr.lookup(high),
            Nibble::masked(*carried + *self.shr.lookup(low)),
        )
    }

    /// `byte << 1` using only nibble tables and addition.
    #[must_use]
    pub fn byte_shl1(&self, byte: u8) -> u8 {
        let (high, low) = Nibble::split(byte);
        // bit 3 of the low nibble moves to bit 0 of the high nibble
        let carried = self.shr.lookup(self.shr.lookup(self.shr.lookup(low)));
        Nibble::join(
            Nibble::masked(*self.shl.lookup(high) + *carried),
            self.shl.lookup(low),
        )
    }

    /// `byte >> amount` for `amount < 8`, one bit at a time.
    ///
    /// # Errors
    ///
    /// Errors if `amount` is 8 or more.
    pub fn byte_shr(&self, byte: u8, amount: u8) -> Result<u8> {
        ensure!(amount < BYTE_BITS, "byte shift amount {amount} out of range");
        Ok((0..amount).fold(byte, |acc, _| self.byte_shr1(acc)))
    }

    /// `byte << amount` for `amount < 8`, one bit at a time.
    ///
    /// # Errors
    ///
    /// Errors if `amount` is 8 or more.
    pub fn byte_shl(&self, byte: u8, amount: u8) -> Result<u8> {
        ensure!(amount < BYTE_BITS, "byte shift amount {amount} out of range");
        Ok((0..amount).fold(byte, |acc, _| self.byte_shl1(acc)))
    }
}
