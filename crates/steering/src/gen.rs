use crate::section::{Section, Steering};

/// General run options, the `[Gen]` section
#[derive(Debug, Clone, PartialEq)]
pub struct Gen {
    /// Verbose output from the plotting tool
    pub debug: bool,
    /// ROOT file to write graphs into
    pub output_rootfile: String,
    /// Graphics format for saved canvases (eps, pdf, png)
    pub output_graphicformat: String,
}

impl Default for Gen {
    fn default() -> Self {
        Self {
            debug: true,
            output_rootfile: String::new(),
            output_graphicformat: String::new(),
        }
    }
}

impl Steering for Gen {
    fn section(&self) -> Section {
        let mut section = Section::new("Gen");
        section.push("debug", self.debug);
        section.push("output_rootfile", self.output_rootfile.as_str());
        section.push("output_graphicformat", self.output_graphicformat.as_str());
        section
    }
}
