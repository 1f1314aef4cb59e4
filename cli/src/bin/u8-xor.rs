//! Derives `A ^ B` for the two fixed demonstration bytes using only
//! addition, subtraction and masking, and prints it next to the native XOR.
use std::io::stdout;

use anyhow::Result;
use limb_ops::byte::{DEMO_A, DEMO_B};
use limb_ops_cli::runner::xor_demo;

fn main() -> Result<()> {
    let _ = env_logger::try_init();
    xor_demo(&mut stdout().lock(), DEMO_A, DEMO_B)
}
