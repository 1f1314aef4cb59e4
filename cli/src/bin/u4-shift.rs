//! Prints the nibble shift lookup tables.
use std::io::stdout;

use anyhow::Result;
use limb_ops_cli::runner::shift_table;

fn main() -> Result<()> {
    let _ = env_logger::try_init();
    shift_table(&mut stdout().lock())
}
