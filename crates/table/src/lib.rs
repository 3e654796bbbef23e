//! Converter for raw cross-section tables into Spectrum input files
//!
//! Reads one whitespace-delimited experimental data table (per-bin
//! cross-section values with 69 named +/- systematic uncertainty sources in
//! a fixed 149-column layout) and rewrites it into the four text files the
//! Spectrum plotting tool consumes:
//!
//! | File                | Content                                            |
//! | ------------------- | -------------------------------------------------- |
//! | `<base>`            | metadata block describing the dataset              |
//! | `<base>_data.txt`   | systematics block + per-bin combined data block    |
//! | `<base>_hadcorr.txt`| hadronisation correction factors, up/down          |
//! | `<base>_ewcorr.txt` | electroweak correction values, tree/loop           |
//!
//! The conversion is a single linear pass. All state lives for one run and
//! the outputs are regenerated from scratch each time, so re-running after a
//! failure with corrected input produces a correct result.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! // Produce x, x_data.txt, x_hadcorr.txt and x_ewcorr.txt
//! sptools_table::convert("orgtable.txt", "x", "Data/jet/atlas/incljets2011/").unwrap();
//! ```
//!
//! For finer control the parsed [Table] gives access to the per-bin records
//! and the block writers individually:
//!
//! ```rust, no_run
//! # use sptools_table::Table;
//! let table = Table::from_file("orgtable.txt").unwrap();
//! let total = table.bins[0].combined_syst();
//! println!("bin 0: +{} -{}", total.plus, total.minus);
//! ```

mod error;
mod metadata;
mod parsers;
mod reader;
mod record;
mod source;
mod table;
mod writer;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use metadata::Metadata;

#[doc(inline)]
pub use record::{column, BinRecord, SystTotal, NUM_COLUMNS, NUM_SOURCES, NUM_SYST_COLUMNS};

#[doc(inline)]
pub use source::{Sign, SourceName};

#[doc(inline)]
pub use table::Table;

use std::fs::File;
use std::io::{BufWriter, Write};

use log::info;
use sptools_utils::f;

/// Convert a raw data table into the four Spectrum input files
///
/// `base` names the outputs, written to the working directory. `datadir` is
/// embedded verbatim into the metadata `data_file` value as the path the
/// plotting tool will later resolve; it is never touched on the filesystem
/// by this tool.
pub fn convert(input: impl AsRef<std::path::Path>, base: &str, datadir: &str) -> Result<()> {
    let table = Table::from_file(input)?;
    info!("{} bins read, writing '{base}' outputs", table.bins.len());

    let metadata = Metadata::for_data_file(f!("{datadir}{base}_data.txt"));
    let mut out = create(base)?;
    metadata.write(&mut out)?;
    out.flush()?;

    let mut out = create(&f!("{base}_data.txt"))?;
    table.write_data(&mut out)?;
    out.flush()?;

    let mut out = create(&f!("{base}_hadcorr.txt"))?;
    table.write_hadcorr(&mut out)?;
    out.flush()?;

    let mut out = create(&f!("{base}_ewcorr.txt"))?;
    table.write_ewcorr(&mut out)?;
    out.flush()?;

    Ok(())
}

fn create(path: &str) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
