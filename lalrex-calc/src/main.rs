//! Command-line interface for the calculator.
//!
//! Evaluates arithmetic expressions either straight from the command line or
//! line by line from a file.

use anyhow::Context;
use clap::{Parser as ClapParser, Subcommand};
use lalrex_calc::CalcParser;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates a single expression
    Eval {
        /// Expression, e.g. "1 + 2 * 3"
        expr: String,
    },
    /// Evaluates a file with one expression per line
    Parse {
        /// Input file
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut parser = CalcParser::new();
    match args.command {
        Commands::Eval { expr } => {
            println!("{}", parser.eval(&expr)?);
        }
        Commands::Parse { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("unable to read {input}"))?;
            for (no, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                match parser.eval(line) {
                    Ok(value) => println!("{value}"),
                    Err(err) => eprintln!("{}:{}: {err:#}", input, no + 1),
                }
            }
        }
    }
    Ok(())
}
