use std::io::Write;

use sptools_utils::ValueExt;

use crate::error::Result;

/// Dataset description embedded in the generated metadata file
///
/// These are fixed literals describing the measurement, not quantities
/// derived from the input table. Only `data_file` changes per run, pointing
/// the plotting tool at the generated data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Verbose parser output in the plotting tool
    pub debug: bool,
    /// Dataset identifier
    pub name: String,
    /// Experiment label
    pub experiment: String,
    /// Reaction in plain text
    pub reaction: String,
    /// Year of the measurement
    pub year: u32,
    /// Rapidity range lower edge
    pub yrap_min: f64,
    /// Rapidity range upper edge
    pub yrap_max: f64,
    /// Collision energy (GeV)
    pub sqrt_s: f64,
    /// Legend label shown on the plot
    pub legend_label: String,
    /// x-axis label
    pub x_label: String,
    /// y-axis label
    pub y_label: String,
    /// x-axis units
    pub x_units: String,
    /// y-axis units
    pub y_units: String,
    /// Units of the bin width the values are divided by
    pub y_bin_width_units: String,
    /// Jet algorithm label
    pub jet_algorithm_label: String,
    /// Jet radius parameter (tenths)
    pub jet_algorithm_radius: u32,
    /// Legend stub for the double-differential bin
    pub doublediff_binname: String,
    /// Data file layout understood by the plotting tool
    pub data_format: String,
    /// Path reference to the generated data file
    pub data_file: String,
    /// Values are divided by the bin width
    pub divided_by_bin_width: bool,
    /// Values are divided by the double-differential bin width
    pub divided_by_doublediff_bin_width: bool,
    /// Uncertainties are relative percentages
    pub error_in_percent: bool,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            debug: false,
            name: "ATLAS_2011_incljets".to_string(),
            experiment: "ATLAS".to_string(),
            reaction: "p p --> jet jet".to_string(),
            year: 2011,
            yrap_min: 0.0,
            yrap_max: 0.5,
            sqrt_s: 7000.0,
            legend_label: "ATLAS 2011".to_string(),
            x_label: "p_{T,jet}".to_string(),
            y_label: "d[s]/dp_{T,jet}".to_string(),
            x_units: "GeV".to_string(),
            y_units: "pb".to_string(),
            y_bin_width_units: "GeV".to_string(),
            jet_algorithm_label: "Anti-k_{t}".to_string(),
            jet_algorithm_radius: 4,
            doublediff_binname: "#leq |y| < ".to_string(),
            data_format: "spectrum".to_string(),
            data_file: String::new(),
            divided_by_bin_width: true,
            divided_by_doublediff_bin_width: false,
            error_in_percent: true,
        }
    }
}

impl Metadata {
    /// Default dataset description pointing at the given data file
    pub fn for_data_file(data_file: impl Into<String>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Default::default()
        }
    }

    /// Write the metadata block: blank-line-separated bracketed sections of
    /// `key = value` lines
    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "[GEN]")?;
        writeln!(w, "debug = {}", self.debug)?;
        writeln!(w)?;

        writeln!(w, "[DESC]")?;
        writeln!(w, "name = {}", self.name)?;
        writeln!(w, "experiment = {}", self.experiment)?;
        writeln!(w, "reaction = {}", self.reaction)?;
        writeln!(w, "year = {}", self.year)?;
        writeln!(w, "yrap = {} {}", self.yrap_min, self.yrap_max)?;
        writeln!(w)?;

        writeln!(w, "[GRAPH]")?;
        writeln!(w, "sqrt_s = {}", self.sqrt_s.dec(1))?;
        writeln!(w, "legend_label = {}", self.legend_label)?;
        writeln!(w, "x_label = {}", self.x_label)?;
        writeln!(w, "y_label = {}", self.y_label)?;
        writeln!(w, "x_units = {}", self.x_units)?;
        writeln!(w, "y_units = {}", self.y_units)?;
        writeln!(w, "y_bin_width_units = {}", self.y_bin_width_units)?;
        writeln!(w, "jet_algorithm_label = {}", self.jet_algorithm_label)?;
        writeln!(w, "jet_algorithm_radius = {}", self.jet_algorithm_radius)?;
        writeln!(w, "doublediff_binname = {}", self.doublediff_binname)?;
        writeln!(w, "doublediff_bin_value_min = {}", self.yrap_min)?;
        writeln!(w, "doublediff_bin_value_max = {}", self.yrap_max)?;
        writeln!(
            w,
            "doublediff_bin_value_width = {}",
            self.yrap_max - self.yrap_min
        )?;
        writeln!(w)?;

        writeln!(w, "[DATA]")?;
        writeln!(w, "data_format = {}", self.data_format)?;
        writeln!(w, "data_file = {}", self.data_file)?;
        writeln!(w, "divided_by_bin_width = {}", self.divided_by_bin_width)?;
        writeln!(
            w,
            "divided_by_doublediff_bin_width = {}",
            self.divided_by_doublediff_bin_width
        )?;
        writeln!(w, "error_in_percent = {}", self.error_in_percent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(metadata: &Metadata) -> String {
        let mut buffer = Vec::new();
        metadata.write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn sections_in_order() {
        let text = render(&Metadata::default());
        let gen = text.find("[GEN]").unwrap();
        let desc = text.find("[DESC]").unwrap();
        let graph = text.find("[GRAPH]").unwrap();
        let data = text.find("[DATA]").unwrap();
        assert!(gen < desc && desc < graph && graph < data);
    }

    #[test]
    fn data_file_reference_is_embedded() {
        let metadata = Metadata::for_data_file("Data/jet/atlas/incljets2011/x_data.txt");
        let text = render(&metadata);
        assert!(text.contains("data_file = Data/jet/atlas/incljets2011/x_data.txt"));
        assert!(text.contains("sqrt_s = 7000.0"));
        assert!(text.contains("divided_by_bin_width = true"));
    }

    #[test]
    fn sections_are_blank_line_separated() {
        let text = render(&Metadata::default());
        assert!(text.contains("debug = false\n\n[DESC]"));
        assert!(text.contains("yrap = 0 0.5\n\n[GRAPH]"));
    }
}
