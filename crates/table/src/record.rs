// internal modules
use crate::error::{Error, Result};
use crate::parsers;

/// Number of named systematic sources in the raw table
pub const NUM_SOURCES: usize = 69;

/// Number of systematic columns, alternating +/- per source
pub const NUM_SYST_COLUMNS: usize = 2 * NUM_SOURCES;

/// Total number of columns a line must have to count as a data row
pub const NUM_COLUMNS: usize = column::SYST + NUM_SYST_COLUMNS;

/// Fixed positional layout of the raw table
///
/// Names are matched to values purely by column position. The layout is the
/// entire contract with the upstream tables, so keep it in one place.
pub mod column {
    /// Bin lower edge
    pub const XMIN: usize = 0;
    /// Bin upper edge
    pub const XMAX: usize = 1;
    /// Central cross-section value
    pub const CROSS: usize = 2;
    /// Hadronisation correction factor
    pub const HAD: usize = 3;
    /// Hadronisation correction relative up variation (%)
    pub const HAD_UP: usize = 4;
    /// Hadronisation correction relative down variation (%)
    pub const HAD_DOWN: usize = 5;
    /// Electroweak correction value
    pub const EW: usize = 6;
    /// Electroweak correction, tree level
    pub const EW_TREE: usize = 7;
    /// Electroweak correction, loop level
    pub const EW_LOOP: usize = 8;
    /// Statistical uncertainty
    pub const STAT: usize = 9;
    /// Monte-Carlo statistical uncertainty
    pub const STAT_MC: usize = 10;
    /// First systematic column, +/- pairs from here on
    pub const SYST: usize = 11;
}

/// One measurement bin parsed from a data row
///
/// Keeps both the parsed values needed for arithmetic and the raw tokens,
/// since several output columns pass the original text through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct BinRecord {
    /// Bin lower edge
    pub xmin: f64,
    /// Bin upper edge
    pub xmax: f64,
    /// Central cross-section value
    pub cross: f64,
    /// Hadronisation correction factor
    pub had: f64,
    /// Hadronisation up variation (%)
    pub had_up_pct: f64,
    /// Hadronisation down variation (%)
    pub had_down_pct: f64,
    /// Statistical uncertainty
    pub stat: f64,
    /// Monte-Carlo statistical uncertainty
    pub stat_mc: f64,
    /// Systematic values in header order, alternating +/- per source
    pub syst: Vec<f64>,
    /// The raw row, one token per column
    tokens: Vec<String>,
}

/// Combined positive/negative systematic uncertainty for one bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystTotal {
    /// Quadrature sum of the "+"-side values, square-rooted
    pub plus: f64,
    /// Quadrature sum of the "-"-side values, square-rooted
    pub minus: f64,
}

impl SystTotal {
    /// Reported total systematic, the arithmetic mean of the two sides
    pub fn total(&self) -> f64 {
        (self.plus + self.minus) / 2.0
    }
}

impl BinRecord {
    /// Parse one data row from its whitespace-split tokens
    ///
    /// The caller has already checked the row predicate, so any token that
    /// fails to parse here is a malformed field and aborts the conversion.
    pub(crate) fn from_tokens(tokens: &[&str], line: usize) -> Result<Self> {
        let value = |index: usize| -> Result<f64> {
            parsers::float(tokens[index]).ok_or_else(|| Error::MalformedNumber {
                token: tokens[index].to_string(),
                line,
            })
        };

        let syst = (column::SYST..NUM_COLUMNS)
            .map(|index| value(index))
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self {
            xmin: value(column::XMIN)?,
            xmax: value(column::XMAX)?,
            cross: value(column::CROSS)?,
            had: value(column::HAD)?,
            had_up_pct: value(column::HAD_UP)?,
            had_down_pct: value(column::HAD_DOWN)?,
            stat: value(column::STAT)?,
            stat_mc: value(column::STAT_MC)?,
            syst,
            tokens: tokens[..NUM_COLUMNS].iter().map(|t| t.to_string()).collect(),
        })
    }

    /// Bin centre, `xmin + (xmax - xmin)/2`
    pub fn centre(&self) -> f64 {
        self.xmin + (self.xmax - self.xmin) / 2.0
    }

    /// Combine the systematic columns in quadrature
    ///
    /// Both running sums are seeded with the MC-stat value squared before the
    /// +/- column pairs are added. The seed is deliberate, matching the
    /// published tables, and the plain statistical uncertainty is never
    /// folded in.
    pub fn combined_syst(&self) -> SystTotal {
        let mut plus = self.stat_mc * self.stat_mc;
        let mut minus = plus;
        for pair in self.syst.chunks_exact(2) {
            plus += pair[0] * pair[0];
            minus += pair[1] * pair[1];
        }
        SystTotal {
            plus: plus.sqrt(),
            minus: minus.sqrt(),
        }
    }

    /// Hadronisation factor corrected up by its relative variation
    pub fn had_up(&self) -> f64 {
        self.had * (1.0 + self.had_up_pct / 100.0)
    }

    /// Hadronisation factor corrected down by its relative variation
    pub fn had_down(&self) -> f64 {
        self.had * (1.0 + self.had_down_pct / 100.0)
    }

    /// Raw token for a column, exactly as it appeared in the input
    pub fn raw(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}
