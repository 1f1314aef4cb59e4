#![deny(clippy::pedantic)]
use std::io::stdout;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_derive::Args;
use limb_ops::byte::{DEMO_A, DEMO_B};
use limb_ops_cli::runner::{self, parse_byte, parse_literal, OpArg, Width};
use log::debug;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Args)]
pub struct XorDemoArgs {
    /// First operand, decimal, 0x or 0b literal
    #[arg(long, default_value_t = DEMO_A, value_parser = parse_byte)]
    a: u8,
    /// Second operand, decimal, 0x or 0b literal
    #[arg(long, default_value_t = DEMO_B, value_parser = parse_byte)]
    b: u8,
}

#[derive(Clone, Debug, Args)]
pub struct EvalArgs {
    #[arg(value_enum)]
    op: OpArg,
    #[arg(value_parser = parse_literal)]
    a: u64,
    #[arg(value_parser = parse_literal)]
    b: u64,
    /// Operand width in bits
    #[arg(long, value_enum, default_value = "8")]
    width: Width,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the right and left nibble shift tables
    ShiftTable,
    /// Derive a ^ b from additions and subtractions and print it next to the
    /// native result
    XorDemo(XorDemoArgs),
    /// Evaluate xor, or, and on words through the byte lookup table
    Eval(EvalArgs),
    /// Check every byte pair and both shift tables against native operators
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    debug!("{cli:?}");
    let mut out = stdout().lock();
    match cli.command {
        Command::ShiftTable => runner::shift_table(&mut out),
        Command::XorDemo(XorDemoArgs { a, b }) => runner::xor_demo(&mut out, a, b),
        Command::Eval(EvalArgs { op, a, b, width }) => runner::eval(&mut out, op, a, b, width),
        Command::Verify => runner::verify(&mut out),
    }
}
