use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Fixed-precision decimal formatting
    ///
    /// Shorthand for the common case of writing a value with a set number of
    /// decimal places, which keeps the column widths of the output tables
    /// stable.
    ///
    /// ```rust
    /// # use sptools_utils::ValueExt;
    /// let number = 4.3234;
    /// assert_eq!(number.dec(2), "4.32".to_string());
    /// assert_eq!((0.97).dec(3), "0.970".to_string());
    /// ```
    fn dec(&self, precision: usize) -> String;
}

impl<T: std::fmt::Display> ValueExt for T {
    fn dec(&self, precision: usize) -> String {
        f!("{:.precision$}", &self, precision = precision)
    }
}
