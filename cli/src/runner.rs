//! Command implementations shared by the `limb-ops` CLI and the two
//! stand-alone demonstration binaries.
use std::io::Write;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::ValueEnum;
use itertools::{iproduct, Itertools};
use limb_ops::byte::{BitwiseOp, XorDerivation};
use limb_ops::report::ShiftReport;
use limb_ops::shift::Direction;
use limb_ops::table::HelperTable;
use limb_ops::word;
use log::{debug, info};

/// Operation selector for `eval`, mirrors [`BitwiseOp`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpArg {
    Xor,
    Or,
    And,
}

impl From<OpArg> for BitwiseOp {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Xor => BitwiseOp::Xor,
            OpArg::Or => BitwiseOp::Or,
            OpArg::And => BitwiseOp::And,
        }
    }
}

/// Word width for `eval`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Width {
    #[default]
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl Width {
    #[must_use]
    pub fn max(self) -> u64 {
        match self {
            Width::W8 => u8::MAX.into(),
            Width::W16 => u16::MAX.into(),
            Width::W32 => u32::MAX.into(),
            Width::W64 => u64::MAX,
        }
    }
}

/// Parse a decimal, `0x` hex or `0b` binary literal. Underscores are ignored.
///
/// # Errors
///
/// Errors if the literal is malformed or does not fit in 64 bits.
pub fn parse_literal(s: &str) -> Result<u64> {
    let cleaned = s.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse()
    };
    parsed.with_context(|| format!("invalid integer literal {s:?}"))
}

/// [`parse_literal`], restricted to a byte. Used as a clap value parser.
///
/// # Errors
///
/// Errors if the literal is malformed or larger than 255.
pub fn parse_byte(s: &str) -> Result<u8> {
    let value = parse_literal(s)?;
    u8::try_from(value).map_err(|_| anyhow!("{s} does not fit in a byte"))
}

/// Print both nibble shift tables.
///
/// # Errors
///
/// Errors if writing to `out` fails.
pub fn shift_table(out: &mut impl Write) -> Result<()> {
    write!(out, "{}", ShiftReport::new())?;
    Ok(())
}

/// Print the arithmetic XOR of `a` and `b` next to the native result.
///
/// # Errors
///
/// Errors if writing to `out` fails.
pub fn xor_demo(out: &mut impl Write, a: u8, b: u8) -> Result<()> {
    let derivation = XorDerivation::new(a, b);
    debug!(
        "a = {a:#010b} (even {:#010b}, odd {:#010b}), b = {b:#010b} (even {:#010b}, odd {:#010b})",
        derivation.a_even, derivation.a_odd, derivation.b_even, derivation.b_odd
    );
    write!(out, "{derivation}")?;
    Ok(())
}

/// Evaluate `op` on `a` and `b` at the given width and print the derived and
/// native results.
///
/// # Errors
///
/// Errors if an operand does not fit in `width`, or if the derived result
/// differs from the native one.
#[allow(clippy::cast_possible_truncation)]
pub fn eval(out: &mut impl Write, op: OpArg, a: u64, b: u64, width: Width) -> Result<()> {
    ensure!(
        a <= width.max() && b <= width.max(),
        "operands must fit in {} bits",
        width.max().count_ones()
    );
    let op = BitwiseOp::from(op);
    let table = HelperTable::new();
    let derived = match width {
        Width::W8 => u64::from(word::apply(&table, op, a as u8, b as u8)),
        Width::W16 => u64::from(word::apply(&table, op, a as u16, b as u16)),
        Width::W32 => u64::from(word::apply(&table, op, a as u32, b as u32)),
        Width::W64 => word::apply(&table, op, a, b),
    };
    let native = match op {
        BitwiseOp::Xor => a ^ b,
        BitwiseOp::Or => a | b,
        BitwiseOp::And => a & b,
    };
    writeln!(out, "derived: {derived:#b}")?;
    writeln!(out, "native:  {native:#b}")?;
    ensure!(
        derived == native,
        "{op} mismatch: derived {derived:#x}, native {native:#x}"
    );
    Ok(())
}

/// Exhaustively check every byte pair and both shift tables.
///
/// # Errors
///
/// Errors on the first disagreement with a native operator.
pub fn verify(out: &mut impl Write) -> Result<()> {
    let table = HelperTable::new();
    let mut checked = 0_usize;
    for (op, a, b) in iproduct!(BitwiseOp::ALL, 0..=u8::MAX, 0..=u8::MAX) {
        let native = op.native(a, b);
        let arithmetic = op.arithmetic(a, b);
        let looked_up = table.apply(op, a, b);
        if arithmetic != native || looked_up != native {
            bail!(
                "{a:#04x} {op} {b:#04x}: native {native:#04x}, arithmetic {arithmetic:#04x}, table {looked_up:#04x}"
            );
        }
        checked += 1;
    }
    debug!("checked {checked} byte pairs");

    let report = ShiftReport::new();
    for shift in report.tables() {
        let bad = shift
            .rows()
            .filter(|&(x, v)| {
                let native = match shift.direction() {
                    Direction::Right => *x >> 1,
                    Direction::Left => (*x << 1) & 0xF,
                };
                *v != native
            })
            .map(|(x, _)| *x)
            .collect_vec();
        ensure!(
            bad.is_empty(),
            "{} shift table wrong at {bad:?}",
            shift.direction()
        );
        checked += shift.entries().len();
    }

    info!("verification passed");
    writeln!(out, "ok: {checked} checks passed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use limb_ops::test_utils::{u32_extra, u64_extra};
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut buf = Vec::new();
        f(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test_case("42", 42; "decimal")]
    #[test_case("0x2A", 42; "hex")]
    #[test_case("0b0010_1010", 42; "binary with separators")]
    #[test_case("0xffff_ffff_ffff_ffff", u64::MAX; "u64 max")]
    fn literals(s: &str, expected: u64) {
        assert_eq!(parse_literal(s).unwrap(), expected);
    }

    #[test]
    fn bad_literals() {
        assert!(parse_literal("0xzz").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_byte("256").is_err());
        assert_eq!(parse_byte("0b10100100").unwrap(), 164);
    }

    #[test]
    fn xor_demo_prints_both_results() {
        let text = capture(|out| xor_demo(out, 42, 164)).unwrap();
        assert_eq!(text, "expect: 0b10001110\nactual: 0b10001110\n");
    }

    #[test]
    fn shift_table_output_is_stable() {
        let first = capture(shift_table).unwrap();
        let second = capture(shift_table).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Left Shifting table\n"));
    }

    #[test_case(OpArg::Xor, 0x5553_ff55, 0xa1a2_ffa3, Width::W32)]
    #[test_case(OpArg::Or, 0x5553_ff55_0a04_d2c8, 0xa1a2_ffa3_da3f_f550, Width::W64)]
    #[test_case(OpArg::And, 0xd8, 0xb6, Width::W8)]
    #[test_case(OpArg::Xor, 0xd8b6, 0x1234, Width::W16)]
    fn eval_agrees(op: OpArg, a: u64, b: u64, width: Width) {
        let text = capture(|out| eval(out, op, a, b, width)).unwrap();
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].trim_start_matches("derived: "),
            lines[1].trim_start_matches("native:  ")
        );
    }

    #[test]
    fn eval_rejects_wide_operands() {
        assert!(capture(|out| eval(out, OpArg::Xor, 0x100, 1, Width::W8)).is_err());
    }

    #[test]
    fn verify_passes() {
        let text = capture(verify).unwrap();
        assert_eq!(text, format!("ok: {} checks passed\n", 3 * 256 * 256 + 2 * 16));
    }

    proptest! {
        #[test]
        fn eval_u32_never_mismatches(a in u32_extra(), b in u32_extra()) {
            for op in [OpArg::Xor, OpArg::Or, OpArg::And] {
                let result = capture(|out| eval(out, op, a.into(), b.into(), Width::W32));
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn eval_u64_never_mismatches(a in u64_extra(), b in u64_extra()) {
            prop_assert!(capture(|out| eval(out, OpArg::Xor, a, b, Width::W64)).is_ok());
        }
    }
}
