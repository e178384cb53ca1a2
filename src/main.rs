//! Logicalizer - logic description front end
//!
//! Parses and elaborates a DSL source file and prints a structural summary.
//!
//! # Usage
//!
//! ```bash
//! logicalizer adder.lgc
//! RUST_LOG=trace logicalizer adder.lgc --module GenericAdder
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use logicalizer_core::{error::HdlError, error::Result, Simulator};

/// Logic description parser and elaborator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the DSL source file
    #[arg(value_name = "SOURCE_FILE")]
    source_file: PathBuf,

    /// Print ports and nets of a single module instead of the overview
    #[arg(short, long, value_name = "NAME")]
    module: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let simulator = Simulator::from_file(&args.source_file)?;

    match args.module {
        Some(name) => {
            let module = simulator
                .model()
                .module(&name)
                .ok_or_else(|| HdlError::ModuleNotFound { name: name.clone() })?;
            print!("{}", module.describe());
        }
        None => println!("{}", simulator.get_info()),
    }

    Ok(())
}
