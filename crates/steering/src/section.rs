use std::io::Write;

use log::trace;

use crate::error::Result;
use crate::value::Value;

/// One steering-file section: a label and an ordered list of fields
///
/// Field order is the order of `push` calls, which the configuration types
/// keep equal to their field declaration order. The consuming parser does not
/// care, but the files are diffed and compared byte-for-byte, so the order is
/// kept deterministic.
#[derive(Debug, Clone, Default)]
pub struct Section {
    label: String,
    fields: Vec<(String, Value)>,
}

impl Section {
    /// New empty section with the given label (written as `[label]`)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving insertion order
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((key.into(), value.into()));
    }

    /// The section label without brackets
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Write the section header and every non-default field
    ///
    /// Fields equal to their type default are not written at all; the
    /// plotting tool fills in its own defaults for omitted keys.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "[{}]", self.label)?;
        for (key, value) in &self.fields {
            if value.is_default() {
                trace!("[{}] {key} at type default, omitted", self.label);
                continue;
            }
            writeln!(w, "{key} = {value}")?;
        }
        Ok(())
    }
}

/// Configuration objects that render as one steering-file section
pub trait Steering {
    /// Assemble the section, fields in declaration order
    fn section(&self) -> Section;

    /// Serialise the non-default fields to the given output stream
    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.section().write(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(section: &Section) -> String {
        let mut buffer = Vec::new();
        section.write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn default_fields_are_omitted() {
        let mut section = Section::new("Graph");
        section.push("plot_marker", false);
        section.push("x_legend", 0.0);
        section.push("desc", "");
        assert_eq!(render(&section), "[Graph]\n");
    }

    #[test]
    fn non_default_fields_are_written() {
        let mut section = Section::new("Graph");
        section.push("plot_marker", true);
        section.push("x_legend", 0.45);
        assert_eq!(render(&section), "[Graph]\nplot_marker = true\nx_legend = 0.45\n");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut section = Section::new("Plot_0");
        section.push("z_last", 1.0);
        section.push("a_first", 2.0);
        let text = render(&section);
        assert!(text.find("z_last").unwrap() < text.find("a_first").unwrap());
    }
}
