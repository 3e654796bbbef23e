use std::fmt;

/// Side of a systematic variation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The "+sys" column of a source
    Plus,
    /// The "-sys" column of a source
    Minus,
}

impl Sign {
    /// Single-character suffix used in the systematics block labels
    pub fn suffix(&self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// A named systematic source column from the header row
///
/// Each source appears twice in the header, once per side, suffixed `+sys`
/// or `-sys`. A name carrying neither suffix has no place in the systematics
/// block and is skipped by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceName {
    name: String,
}

impl SourceName {
    /// Wrap a raw header token
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Which side this column belongs to, by substring match
    pub fn sign(&self) -> Option<Sign> {
        if self.name.contains("+sys") {
            Some(Sign::Plus)
        } else if self.name.contains("-sys") {
            Some(Sign::Minus)
        } else {
            None
        }
    }

    /// Label written to the systematics block
    ///
    /// The `+sys`/`-sys` suffix is rewritten to `syst_sys` and the sign is
    /// re-appended as a trailing `+`/`-`, the form the plotting tool groups
    /// on.
    pub fn label(&self) -> Option<String> {
        let sign = self.sign()?;
        let stem = match sign {
            Sign::Plus => self.name.replace("+sys", "syst_sys"),
            Sign::Minus => self.name.replace("-sys", "syst_sys"),
        };
        Some(format!("{stem}{}", sign.suffix()))
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jes1+sys", Some(Sign::Plus), Some("jes1syst_sys+"))]
    #[case("jes1-sys", Some(Sign::Minus), Some("jes1syst_sys-"))]
    #[case("lumi", None, None)]
    fn sign_and_label(
        #[case] name: &str,
        #[case] sign: Option<Sign>,
        #[case] label: Option<&str>,
    ) {
        let source = SourceName::new(name);
        assert_eq!(source.sign(), sign);
        assert_eq!(source.label().as_deref(), label);
    }
}
