#![deny(clippy::pedantic)]

//! Bit identities for instruction sets that lack native shift and XOR
//! opcodes.
//!
//! Shifts on nibbles are served from small precomputed tables, and byte-wide
//! XOR / OR / AND are rebuilt out of addition, subtraction and a single
//! masking helper. Wider words are handled one byte at a time.

pub mod byte;
pub mod nibble;
pub mod report;
pub mod shift;
pub mod table;
#[cfg(any(feature = "test", test))]
pub mod test_utils;
pub mod word;
