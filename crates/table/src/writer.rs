use std::io::Write;

use itertools::Itertools;
use log::warn;

use sptools_utils::ValueExt;

use crate::error::Result;
use crate::record::column;
use crate::table::Table;

/// Provenance comment at the top of the combined data file
const PROVENANCE: &str = "; Data taken from arxiv1410.8857";

impl Table {
    /// Write the combined data file
    ///
    /// A provenance comment, then the systematics block, then the per-bin
    /// block. The plotting tool reads the blocks by their comment markers, so
    /// the order is part of the format.
    pub fn write_data<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{PROVENANCE}")?;
        self.write_systematics(w)?;
        self.write_bins(w)?;
        Ok(())
    }

    /// One line per signed source holding that column's value for every bin.
    ///
    /// The MC-stat component is folded into the combined totals rather than
    /// kept as a labelled source, so it is repeated here as a synthetic
    /// `syst_statmc` +/- pair.
    fn write_systematics<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "; systematics")?;

        let statmc = self.bins.iter().map(|b| b.raw(column::STAT_MC)).join(" ");
        writeln!(w, "syst_statmc+ {statmc}")?;
        writeln!(w, "syst_statmc- {statmc}")?;

        for (offset, name) in self.names.iter().enumerate() {
            let Some(label) = name.label() else {
                warn!("source '{name}' carries no +sys/-sys suffix, skipped");
                continue;
            };
            let values = self
                .bins
                .iter()
                .map(|b| b.raw(column::SYST + offset))
                .join(" ");
            writeln!(w, "{label} {values}")?;
        }
        Ok(())
    }

    /// Per-bin block: centre, raw edges/value/stat, combined +/- systematics
    fn write_bins<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, ";mean xmin xmax cross staterr   +syst    -syst")?;
        for bin in &self.bins {
            let syst = bin.combined_syst();
            writeln!(
                w,
                "{} {} {} {} {} {} {}",
                bin.centre(),
                bin.raw(column::XMIN),
                bin.raw(column::XMAX),
                bin.raw(column::CROSS),
                bin.raw(column::STAT),
                syst.plus.dec(2),
                syst.minus.dec(2)
            )?;
        }
        Ok(())
    }

    /// Write the hadronisation correction table
    pub fn write_hadcorr<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "; hadronisation corrections")?;
        writeln!(w, "; mean xmin xmax npc npc_up npc_down")?;
        for bin in &self.bins {
            writeln!(
                w,
                "{} {} {} {} {} {}",
                bin.centre(),
                bin.xmin,
                bin.xmax,
                bin.raw(column::HAD),
                bin.had_up().dec(3),
                bin.had_down().dec(3)
            )?;
        }
        Ok(())
    }

    /// Write the electroweak correction table, values passed through raw
    pub fn write_ewcorr<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "; electroweak corrections")?;
        writeln!(w, "; mean xmin xmax ewc ewc_tree ewc_loop")?;
        for bin in &self.bins {
            writeln!(
                w,
                "{} {} {} {} {} {}",
                bin.centre(),
                bin.xmin,
                bin.xmax,
                bin.raw(column::EW),
                bin.raw(column::EW_TREE),
                bin.raw(column::EW_LOOP)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::reader::Reader;
    use crate::record::NUM_SYST_COLUMNS;
    use crate::table::Table;
    use crate::test_table::{data_row, header_row};
    use std::io::Cursor;

    fn table() -> Table {
        let input = format!(
            "{}\n{}\n{}\n",
            header_row(),
            data_row(100.0, 120.0),
            data_row(120.0, 150.0)
        );
        Reader::new(Cursor::new(input)).read().unwrap()
    }

    fn render<F>(write: F) -> Vec<String>
    where
        F: Fn(&Table, &mut Vec<u8>),
    {
        let mut buffer = Vec::new();
        write(&table(), &mut buffer);
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn data_file_layout() {
        let lines = render(|t, w| t.write_data(w).unwrap());

        assert_eq!(lines[0], "; Data taken from arxiv1410.8857");
        assert_eq!(lines[1], "; systematics");
        assert!(lines[2].starts_with("syst_statmc+ "));
        assert!(lines[3].starts_with("syst_statmc- "));
        assert!(lines[4].starts_with("src1syst_sys+ "));
        assert!(lines[5].starts_with("src1syst_sys- "));

        // two synthetic statmc rows plus one row per signed source
        let header = 4 + NUM_SYST_COLUMNS;
        assert!(lines[header].starts_with(";mean "));

        // one line per bin, each with 7 fields
        let bins: Vec<_> = lines[header + 1..].to_vec();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].split_whitespace().count(), 7);
        assert!(bins[0].starts_with("110 100 120 "));
    }

    #[test]
    fn systematic_rows_hold_one_value_per_bin() {
        let lines = render(|t, w| t.write_data(w).unwrap());
        // label + 2 bins
        assert_eq!(lines[2].split_whitespace().count(), 3);
        assert_eq!(lines[4].split_whitespace().count(), 3);
    }

    #[test]
    fn hadcorr_values_are_three_decimals() {
        let lines = render(|t, w| t.write_hadcorr(w).unwrap());
        assert_eq!(lines[0], "; hadronisation corrections");
        assert_eq!(lines[2], "110 100 120 1.00 1.050 0.970");
    }

    #[test]
    fn ewcorr_values_pass_through_raw() {
        let lines = render(|t, w| t.write_ewcorr(w).unwrap());
        assert_eq!(lines[0], "; electroweak corrections");
        assert_eq!(lines[2], "110 100 120 0.99 0.98 1.01");
    }
}
