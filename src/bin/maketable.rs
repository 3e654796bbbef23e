// src/bin/maketable.rs

use anyhow::Result;
use clap::Parser;
use log::info;

/// Convert a raw cross-section table into Spectrum input files
///
/// Writes `<base>`, `<base>_data.txt`, `<base>_hadcorr.txt` and
/// `<base>_ewcorr.txt` to the working directory.
#[derive(Parser)]
#[command(name = "maketable")]
#[command(author, version, about = "Convert a raw cross-section table into Spectrum input files", long_about = None)]
struct Cli {
    /// Raw whitespace-delimited data table
    input: String,

    /// Base name for the generated files
    base: String,

    /// Directory string embedded into the metadata data_file reference
    ///
    /// Descriptive only; all outputs are written to the working directory.
    datadir: String,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .verbosity(cli.verbose as usize + 1)
        .init()?;

    info!("input = {}, base = {}, datadir = {}", cli.input, cli.base, cli.datadir);
    sptools_table::convert(&cli.input, &cli.base, &cli.datadir)?;

    println!("end");
    Ok(())
}
