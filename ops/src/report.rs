//! Printable forms of the two demonstrations.
//!
//! The shift report reproduces the reference tables exactly, titles
//! included: the right-shift table is printed under "Left Shifting table",
//! the left-shift table under "Right Shifting table", and both share the
//! `X>>1` column header.
use std::fmt;

use crate::shift::{Direction, ShiftTable};

const SEPARATOR: &str = " \t|\t ";
const HEADER: &str =
    "X(dec) \t| X(hex) \t| X(bin) \t| X>>1(dec) \t| X>>1(bin) \t| X>>1(hex)  ";

fn title(direction: Direction) -> &'static str {
    match direction {
        Direction::Right => "Left Shifting table",
        Direction::Left => "Right Shifting table",
    }
}

/// Both nibble shift tables, right shift first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShiftReport {
    tables: [ShiftTable; 2],
}

impl Default for ShiftReport {
    fn default() -> Self { Self::new() }
}

impl ShiftReport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: [ShiftTable::shr(), ShiftTable::shl()],
        }
    }

    #[must_use]
    pub fn tables(&self) -> &[ShiftTable] { &self.tables }
}

impl fmt::Display for ShiftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            writeln!(f, "{}", title(table.direction()))?;
            writeln!(f, "{HEADER}")?;
            for (x, v) in table.rows() {
                let fields = [
                    x.to_string(),
                    x.to_hex(),
                    x.to_bin(),
                    v.to_string(),
                    v.to_bin(),
                    v.to_hex(),
                ];
                writeln!(f, "{}", fields.join(SEPARATOR))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn layout() {
        let text = ShiftReport::new().to_string();
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 2 * (2 + 16));
        assert_eq!(lines[0], "Left Shifting table");
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[2], "15 \t|\t f \t|\t 1111 \t|\t 7 \t|\t 111 \t|\t 7");
        assert_eq!(lines[17], "0 \t|\t 0 \t|\t 0 \t|\t 0 \t|\t 0 \t|\t 0");
        assert_eq!(lines[18], "Right Shifting table");
        assert_eq!(lines[19], HEADER);
        assert_eq!(lines[20], "15 \t|\t f \t|\t 1111 \t|\t 14 \t|\t 1110 \t|\t e");
        assert_eq!(lines[27], "8 \t|\t 8 \t|\t 1000 \t|\t 0 \t|\t 0 \t|\t 0");
        assert_eq!(lines[35], "0 \t|\t 0 \t|\t 0 \t|\t 0 \t|\t 0 \t|\t 0");
    }

    #[test]
    fn rows_descend_in_both_sections() {
        let text = ShiftReport::new().to_string();
        let xs = text
            .lines()
            .filter_map(|line| line.split(SEPARATOR).next()?.parse::<u8>().ok())
            .collect_vec();
        let expected = (0..16).rev().collect_vec();
        assert_eq!(xs, [expected.clone(), expected].concat());
    }

    #[test]
    fn tables_right_then_left() {
        let report = ShiftReport::new();
        let directions = report.tables().iter().map(ShiftTable::direction).collect_vec();
        assert_eq!(directions, [Direction::Right, Direction::Left]);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(ShiftReport::new().to_string(), ShiftReport::default().to_string());
    }
}
