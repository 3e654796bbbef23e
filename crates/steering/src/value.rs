use std::fmt;

/// A single steering value
///
/// The consuming parser knows three shapes: booleans rendered as the literal
/// tokens `true`/`false`, numerics in their natural decimal form, and plain
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag, type default `false`
    Bool(bool),
    /// Numeric value, type default `0`
    Number(f64),
    /// String value, type default empty
    Text(String),
}

impl Value {
    /// True when the value equals its type default
    ///
    /// Default-valued fields are omitted from the output entirely; the
    /// consuming parser applies its own defaults for missing keys.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Bool(value) => !value,
            Self::Number(value) => *value == 0.0,
            Self::Text(value) => value.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "true"),
            Self::Bool(false) => write!(f, "false"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Bool(false), true)]
    #[case(Value::Bool(true), false)]
    #[case(Value::Number(0.0), true)]
    #[case(Value::Number(0.45), false)]
    #[case(Value::Text(String::new()), true)]
    #[case(Value::Text("ratio".to_string()), false)]
    fn type_defaults(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_default(), expected);
    }

    #[rstest]
    #[case(Value::Bool(true), "true")]
    #[case(Value::Bool(false), "false")]
    #[case(Value::Number(0.45), "0.45")]
    #[case(Value::Number(623.0), "623")]
    #[case(Value::Text("data / !data".to_string()), "data / !data")]
    fn rendering(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
