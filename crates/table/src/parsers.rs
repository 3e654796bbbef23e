// nom parser combinators
use nom::number::complete::double;

/// Parse a whole token as a float, rejecting any trailing characters
pub(crate) fn float(token: &str) -> Option<f64> {
    match double::<_, nom::error::Error<&str>>(token) {
        Ok(("", value)) => Some(value),
        _ => None,
    }
}

/// A token only triggers a data row when it is a non-negative numeric literal
pub(crate) fn is_data_value(token: &str) -> bool {
    float(token).is_some_and(|value| value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", Some(100.0))]
    #[case("100.5", Some(100.5))]
    #[case("-2.41", Some(-2.41))]
    #[case("1.2e2", Some(120.0))]
    #[case("1.5x", None)]
    #[case("xlow", None)]
    #[case("", None)]
    fn whole_token_floats(#[case] token: &str, #[case] expected: Option<f64>) {
        assert_eq!(float(token), expected);
    }

    #[rstest]
    #[case("100", true)]
    #[case("0", true)]
    #[case("100.5", true)]
    #[case("-3", false)]
    #[case("xlow", false)]
    fn data_value_predicate(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_data_value(token), expected);
    }
}
