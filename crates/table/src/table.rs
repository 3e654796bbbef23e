use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::reader::Reader;
use crate::record::BinRecord;
use crate::source::SourceName;

/// A fully parsed cross-section table
///
/// Systematic names come from the single `xlow` header row and are matched to
/// the per-bin values purely by column position, in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Ordered systematic source names, one per systematic column
    pub names: Vec<SourceName>,
    /// One record per accepted data row, in input order
    pub bins: Vec<BinRecord>,
}

impl Table {
    /// Read and parse a raw data table from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("reading {}", path.as_ref().display());
        let file = File::open(path)?;
        Reader::new(BufReader::new(file)).read()
    }
}
