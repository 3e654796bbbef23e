use crate::error::{Error, Result};
use crate::section::{Section, Steering};

/// Maximum number of ratio entries the plotting tool reads per plot
pub const MAX_RATIOS: usize = 10;

/// One ratio panel entry: a style and the ratio expression
#[derive(Debug, Clone, PartialEq)]
pub struct Ratio {
    /// Style of the ratio curve, e.g. `data / !data`
    pub style: String,
    /// The ratio expression, e.g. `data_0 / data_0`
    pub expr: String,
}

/// Fill/edge/marker styling for one uncertainty band
///
/// Style and colour values are the plotting tool's own style codes; zero
/// means "use the tool default" and is omitted from the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandStyle {
    /// Fill style code
    pub fill_style: f64,
    /// Fill colour code
    pub fill_color: f64,
    /// Edge style code
    pub edge_style: f64,
    /// Edge colour code
    pub edge_color: f64,
    /// Marker style code
    pub marker_style: f64,
    /// Marker colour code
    pub marker_color: f64,
}

impl BandStyle {
    fn push_into(&self, prefix: &str, section: &mut Section) {
        section.push(format!("{prefix}_fill_style"), self.fill_style);
        section.push(format!("{prefix}_fill_color"), self.fill_color);
        section.push(format!("{prefix}_edge_style"), self.edge_style);
        section.push(format!("{prefix}_edge_color"), self.edge_color);
        section.push(format!("{prefix}_marker_style"), self.marker_style);
        section.push(format!("{prefix}_marker_color"), self.marker_color);
    }
}

/// Per-plot options, one `[Plot_<index>]` section per instance
///
/// Several plots may share one steering file; the index keeps the repeated
/// sections apart in the output stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// Index used in the section label
    pub index: usize,
    /// What the plot shows (data, grid, ...)
    pub plot_type: String,
    /// Directory holding PDF steering files
    pub pdf_directory: String,
    /// Directory holding grid steering files
    pub grid_directory: String,
    /// Directory holding data steering files
    pub data_directory: String,
    /// Comma-separated PDF steering files
    pub pdf_steering_files: String,
    /// Comma-separated grid steering files
    pub grid_steering_files: String,
    /// Comma-separated data steering files
    pub data_steering_files: String,
    /// Free-text description, used in output file names
    pub desc: String,
    /// Drop systematic sources whose group matches
    pub remove_systematic_group: String,
    /// Keep only systematic sources whose group matches
    pub contain_systematic_group: String,
    /// Overlay panel y range, lower edge
    pub y_overlay_min: f64,
    /// Overlay panel y range, upper edge
    pub y_overlay_max: f64,
    /// Overlay panel x range, lower edge
    pub x_overlay_min: f64,
    /// Overlay panel x range, upper edge
    pub x_overlay_max: f64,
    /// Ratio panel y range, lower edge
    pub y_ratio_min: f64,
    /// Ratio panel y range, upper edge
    pub y_ratio_max: f64,
    /// Legend x position (NDC)
    pub x_legend: f64,
    /// Legend y position (NDC)
    pub y_legend: f64,
    /// Information legend x position (NDC)
    pub x_info_legend: f64,
    /// Information legend y position (NDC)
    pub y_info_legend: f64,
    /// Drop data points above this x
    pub data_cut_xmax: f64,
    /// Drop data points below this x
    pub data_cut_xmin: f64,
    /// Systematic groups drawn as separate bands, comma-separated
    pub display_systematic_group: String,
    /// Fill colour for the displayed systematic group
    pub display_systematic_group_fill_color: f64,
    /// Edge colour for the displayed systematic group
    pub display_systematic_group_edge_color: f64,
    /// Edge style for the displayed systematic group
    pub display_systematic_group_edge_style: f64,
    /// Edge width for the displayed systematic group
    pub display_systematic_group_edge_width: f64,
    /// Logarithmic x axis
    pub x_log: bool,
    /// Logarithmic y axis
    pub y_log: bool,
    /// Data marker style code
    pub data_marker_style: String,
    /// Data marker colour code
    pub data_marker_color: String,
    /// Styling of the combined total band
    pub total: BandStyle,
    /// Styling of the PDF band
    pub pdf: BandStyle,
    /// Styling of the scale band
    pub scale: BandStyle,
    /// Styling of the alternative-scale-choice band
    pub alternative_scale_choice: BandStyle,
    /// Styling of the alpha_s band
    pub alphas: BandStyle,
    /// Styling of the corrections band
    pub corrections: BandStyle,
    /// Styling of the beam-uncertainty band
    pub beamuncertainty: BandStyle,
    /// Overall arrangement (overlay, ratio, ...)
    pub display_style: String,
    /// What the overlay panel shows
    pub overlay_style: String,
    /// Title over the ratio panel
    pub ratio_title: String,
    /// Ratio entries, bounded at [MAX_RATIOS]
    ratios: Vec<Ratio>,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            index: 0,
            plot_type: String::new(),
            pdf_directory: String::new(),
            grid_directory: String::new(),
            data_directory: String::new(),
            pdf_steering_files: String::new(),
            grid_steering_files: String::new(),
            data_steering_files: String::new(),
            desc: String::new(),
            remove_systematic_group: String::new(),
            contain_systematic_group: String::new(),
            y_overlay_min: 0.0,
            y_overlay_max: 0.0,
            x_overlay_min: 0.0,
            x_overlay_max: 0.0,
            y_ratio_min: 0.0,
            y_ratio_max: 0.0,
            x_legend: 0.0,
            y_legend: 0.0,
            x_info_legend: 0.0,
            y_info_legend: 0.0,
            data_cut_xmax: 0.0,
            data_cut_xmin: 0.0,
            display_systematic_group: String::new(),
            display_systematic_group_fill_color: 0.0,
            display_systematic_group_edge_color: 0.0,
            display_systematic_group_edge_style: 0.0,
            display_systematic_group_edge_width: 0.0,
            x_log: true,
            y_log: true,
            data_marker_style: String::new(),
            data_marker_color: String::new(),
            total: BandStyle::default(),
            pdf: BandStyle::default(),
            scale: BandStyle::default(),
            alternative_scale_choice: BandStyle::default(),
            alphas: BandStyle::default(),
            corrections: BandStyle::default(),
            beamuncertainty: BandStyle::default(),
            display_style: String::new(),
            overlay_style: String::new(),
            ratio_title: String::new(),
            ratios: Vec::new(),
        }
    }
}

impl Plot {
    /// New plot with the given section index
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Append a ratio entry
    ///
    /// The plotting tool reads at most [MAX_RATIOS] entries per plot, so an
    /// eleventh entry is an error rather than a silent no-op.
    pub fn push_ratio(&mut self, style: impl Into<String>, expr: impl Into<String>) -> Result<()> {
        if self.ratios.len() == MAX_RATIOS {
            return Err(Error::TooManyRatios { limit: MAX_RATIOS });
        }
        self.ratios.push(Ratio {
            style: style.into(),
            expr: expr.into(),
        });
        Ok(())
    }

    /// The ratio entries in insertion order
    pub fn ratios(&self) -> &[Ratio] {
        &self.ratios
    }
}

impl Steering for Plot {
    fn section(&self) -> Section {
        let mut section = Section::new(format!("Plot_{}", self.index));
        section.push("plot_type", self.plot_type.as_str());
        section.push("pdf_directory", self.pdf_directory.as_str());
        section.push("grid_directory", self.grid_directory.as_str());
        section.push("data_directory", self.data_directory.as_str());
        section.push("pdf_steering_files", self.pdf_steering_files.as_str());
        section.push("grid_steering_files", self.grid_steering_files.as_str());
        section.push("data_steering_files", self.data_steering_files.as_str());
        section.push("desc", self.desc.as_str());
        section.push("remove_systematic_group", self.remove_systematic_group.as_str());
        section.push("contain_systematic_group", self.contain_systematic_group.as_str());
        section.push("y_overlay_min", self.y_overlay_min);
        section.push("y_overlay_max", self.y_overlay_max);
        section.push("x_overlay_min", self.x_overlay_min);
        section.push("x_overlay_max", self.x_overlay_max);
        section.push("y_ratio_min", self.y_ratio_min);
        section.push("y_ratio_max", self.y_ratio_max);
        section.push("x_legend", self.x_legend);
        section.push("y_legend", self.y_legend);
        section.push("x_info_legend", self.x_info_legend);
        section.push("y_info_legend", self.y_info_legend);
        section.push("data_cut_xmax", self.data_cut_xmax);
        section.push("data_cut_xmin", self.data_cut_xmin);
        section.push("display_systematic_group", self.display_systematic_group.as_str());
        section.push(
            "display_systematic_group_fill_color",
            self.display_systematic_group_fill_color,
        );
        section.push(
            "display_systematic_group_edge_color",
            self.display_systematic_group_edge_color,
        );
        section.push(
            "display_systematic_group_edge_style",
            self.display_systematic_group_edge_style,
        );
        section.push(
            "display_systematic_group_edge_width",
            self.display_systematic_group_edge_width,
        );
        section.push("x_log", self.x_log);
        section.push("y_log", self.y_log);
        section.push("data_marker_style", self.data_marker_style.as_str());
        section.push("data_marker_color", self.data_marker_color.as_str());
        self.total.push_into("total", &mut section);
        self.pdf.push_into("pdf", &mut section);
        self.scale.push_into("scale", &mut section);
        self.alternative_scale_choice
            .push_into("alternative_scale_choice", &mut section);
        self.alphas.push_into("alphas", &mut section);
        self.corrections.push_into("corrections", &mut section);
        self.beamuncertainty.push_into("beamuncertainty", &mut section);
        section.push("display_style", self.display_style.as_str());
        section.push("overlay_style", self.overlay_style.as_str());
        section.push("ratio_title", self.ratio_title.as_str());
        for (index, ratio) in self.ratios.iter().enumerate() {
            section.push(format!("ratio_style_{index}"), ratio.style.as_str());
        }
        for (index, ratio) in self.ratios.iter().enumerate() {
            section.push(format!("ratio_{index}"), ratio.expr.as_str());
        }
        section
    }
}
