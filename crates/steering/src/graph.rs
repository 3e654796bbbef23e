use crate::section::{Section, Steering};

/// Graph display options, the `[Graph]` section
///
/// One instance configures every plot in the steering file. The defaults
/// reproduce the standard overlay: markers, error ticks, staggered points
/// and all theory bands switched on.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Show each named systematic source as its own curve (threshold in %)
    pub show_individual_systematics: f64,
    /// Draw data markers
    pub plot_marker: bool,
    /// Draw ticks at the end of error bars
    pub plot_error_ticks: bool,
    /// Stagger overlapping points of different sets
    pub plot_staggered: bool,
    /// Rebin predictions to the data binning
    pub match_binning: bool,
    /// Apply the grid correction factors
    pub apply_grid_corr: bool,
    /// Apply the nominal corrections
    pub apply_nominal_corr: bool,
    /// Only apply grid corrections whose name contains this string
    pub contain_grid_corr: String,
    /// Draw systematics as lines above this threshold (%)
    pub show_systematics_as_lines: f64,
    /// Show the combined total systematic band
    pub show_total_systematics: f64,
    /// Order systematic colours alphabetically
    pub order_systematic_colorbyalphabeth: bool,
    /// Put sqrt(s) in the label
    pub label_sqrt_s: bool,
    /// Put the scale form in the label
    pub label_scaleform: bool,
    /// Put the date in the label
    pub label_date: bool,
    /// Label the alternative scale choice
    pub label_scaleform_alternative_scale_choice: bool,
    /// Free text for the information legend
    pub label_informationlegend: String,
    /// Show the PDF uncertainty band
    pub band_with_pdf: bool,
    /// Show the alpha_s uncertainty band
    pub band_with_alphas: bool,
    /// Show the scale uncertainty band
    pub band_with_scale: bool,
    /// Show the alternative-scale-choice band
    pub band_with_alternative_scalechoice: bool,
    /// Show the combined total band
    pub band_total: bool,
    /// Show the grid-correction band
    pub band_with_gridcorrection: bool,
    /// Show the beam-uncertainty band
    pub band_with_beamuncertainty: f64,
    /// Renormalisation scale factors
    pub ren_scales: f64,
    /// Factorisation scale factors
    pub fac_scales: f64,
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
    /// Calculate and print the chi2 of data against theory
    pub calculate_chi2: f64,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            show_individual_systematics: 0.0,
            plot_marker: true,
            plot_error_ticks: true,
            plot_staggered: true,
            match_binning: true,
            apply_grid_corr: true,
            apply_nominal_corr: true,
            contain_grid_corr: String::new(),
            show_systematics_as_lines: 0.0,
            show_total_systematics: 0.0,
            order_systematic_colorbyalphabeth: true,
            label_sqrt_s: true,
            label_scaleform: true,
            label_date: true,
            label_scaleform_alternative_scale_choice: true,
            label_informationlegend: String::new(),
            band_with_pdf: true,
            band_with_alphas: true,
            band_with_scale: true,
            band_with_alternative_scalechoice: true,
            band_total: true,
            band_with_gridcorrection: true,
            band_with_beamuncertainty: 0.0,
            ren_scales: 0.0,
            fac_scales: 0.0,
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
            calculate_chi2: 0.0,
        }
    }
}

impl Steering for Graph {
    fn section(&self) -> Section {
        let mut section = Section::new("Graph");
        section.push("show_individual_systematics", self.show_individual_systematics);
        section.push("plot_marker", self.plot_marker);
        section.push("plot_error_ticks", self.plot_error_ticks);
        section.push("plot_staggered", self.plot_staggered);
        section.push("match_binning", self.match_binning);
        section.push("apply_grid_corr", self.apply_grid_corr);
        section.push("apply_nominal_corr", self.apply_nominal_corr);
        section.push("contain_grid_corr", self.contain_grid_corr.as_str());
        section.push("show_systematics_as_lines", self.show_systematics_as_lines);
        section.push("show_total_systematics", self.show_total_systematics);
        section.push(
            "order_systematic_colorbyalphabeth",
            self.order_systematic_colorbyalphabeth,
        );
        section.push("label_sqrt_s", self.label_sqrt_s);
        section.push("label_scaleform", self.label_scaleform);
        section.push("label_date", self.label_date);
        section.push(
            "label_scaleform_alternative_scale_choice",
            self.label_scaleform_alternative_scale_choice,
        );
        section.push("label_informationlegend", self.label_informationlegend.as_str());
        section.push("band_with_pdf", self.band_with_pdf);
        section.push("band_with_alphas", self.band_with_alphas);
        section.push("band_with_scale", self.band_with_scale);
        section.push(
            "band_with_alternative_scalechoice",
            self.band_with_alternative_scalechoice,
        );
        section.push("band_total", self.band_total);
        section.push("band_with_gridcorrection", self.band_with_gridcorrection);
        section.push("band_with_beamuncertainty", self.band_with_beamuncertainty);
        section.push("ren_scales", self.ren_scales);
        section.push("fac_scales", self.fac_scales);
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
        section.push("calculate_chi2", self.calculate_chi2);
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_survives_serialization() {
        let mut graph = Graph::default();
        graph.x_legend = 0.45;
        graph.y_legend = 0.90;

        let mut buffer = Vec::new();
        graph.write(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("[Graph]\n"));
        assert!(text.contains("x_legend = 0.45\n"));
        let marker = text.find("plot_marker = true").unwrap();
        let legend = text.find("x_legend").unwrap();
        assert!(marker < legend);
        assert!(text.find("x_legend").unwrap() < text.find("y_legend").unwrap());
    }

    #[test]
    fn zeroed_numerics_produce_no_lines() {
        let mut buffer = Vec::new();
        Graph::default().write(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("calculate_chi2"));
        assert!(!text.contains("x_legend"));
    }
}
