use std::io::{BufRead, Lines};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::parsers;
use crate::record::{column, BinRecord, NUM_COLUMNS, NUM_SYST_COLUMNS};
use crate::source::SourceName;
use crate::table::Table;

/// Internal reader for the raw data table
pub(crate) struct Reader<B: BufRead> {
    table: Table,
    lines: Lines<B>,
    line_number: usize,
}

// ! Internal API
impl<B: BufRead> Reader<B> {
    /// Create a new reader over any buffered input
    pub(crate) fn new(input: B) -> Self {
        Self {
            table: Table::default(),
            lines: input.lines(),
            line_number: 0,
        }
    }

    /// Single pass over the input, accumulating the table
    pub(crate) fn read(mut self) -> Result<Table> {
        while let Some(line) = self.lines.next() {
            let line = line?;
            self.line_number += 1;
            self.process_line(&line)?;
        }

        // the systematics block cannot be built without the header names
        if self.table.names.is_empty() && !self.table.bins.is_empty() {
            return Err(Error::MissingHeader);
        }

        debug!(
            "read {} bins, {} systematic columns",
            self.table.bins.len(),
            self.table.names.len()
        );
        Ok(self.table)
    }

    fn process_line(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(first) if first.contains("xlow") => self.parse_header(&tokens),
            Some(first) if tokens.len() >= NUM_COLUMNS && parsers::is_data_value(first) => {
                self.parse_bin(&tokens)
            }
            _ => {
                trace!("line {} is neither header nor data, skipped", self.line_number);
                Ok(())
            }
        }
    }

    /// Header row: tokens from the first systematic column onwards are the
    /// ordered source names
    fn parse_header(&mut self, tokens: &[&str]) -> Result<()> {
        let names: Vec<SourceName> = tokens
            .iter()
            .skip(column::SYST)
            .take(NUM_SYST_COLUMNS)
            .map(|token| SourceName::new(*token))
            .collect();

        if names.len() != NUM_SYST_COLUMNS {
            return Err(Error::UnexpectedNameCount {
                expected: NUM_SYST_COLUMNS,
                found: names.len(),
            });
        }

        debug!("header found on line {}", self.line_number);
        self.table.names = names;
        Ok(())
    }

    fn parse_bin(&mut self, tokens: &[&str]) -> Result<()> {
        let record = BinRecord::from_tokens(tokens, self.line_number)?;
        trace!(
            "bin {}: [{}, {})",
            self.table.bins.len(),
            record.xmin,
            record.xmax
        );
        self.table.bins.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_table::{data_row, header_row};
    use std::io::Cursor;

    fn read(input: &str) -> Result<Table> {
        Reader::new(Cursor::new(input.to_string())).read()
    }

    #[test]
    fn header_and_rows_are_collected() {
        let input = format!(
            "{}\n{}\n{}\n",
            header_row(),
            data_row(100.0, 120.0),
            data_row(120.0, 150.0)
        );
        let table = read(&input).unwrap();
        assert_eq!(table.names.len(), NUM_SYST_COLUMNS);
        assert_eq!(table.bins.len(), 2);
        assert_eq!(table.bins[1].centre(), 135.0);
    }

    #[test]
    fn other_lines_are_skipped() {
        let input = format!(
            "# a comment\n{}\nshort row 1 2 3\n\n{}\n",
            header_row(),
            data_row(100.0, 120.0)
        );
        let table = read(&input).unwrap();
        assert_eq!(table.bins.len(), 1);
    }

    #[test]
    fn data_without_header_is_fatal() {
        let input = format!("{}\n", data_row(100.0, 120.0));
        assert!(matches!(read(&input), Err(Error::MissingHeader)));
    }

    #[test]
    fn truncated_header_is_fatal() {
        let full = header_row();
        let short = full
            .split_whitespace()
            .take(NUM_COLUMNS - 2)
            .collect::<Vec<_>>()
            .join(" ");
        match read(&short) {
            Err(Error::UnexpectedNameCount { expected, found }) => {
                assert_eq!(expected, NUM_SYST_COLUMNS);
                assert_eq!(found, NUM_SYST_COLUMNS - 2);
            }
            other => panic!("expected UnexpectedNameCount, got {other:?}"),
        }
    }

    #[test]
    fn malformed_token_in_data_row_is_fatal() {
        let bad = data_row(100.0, 120.0).replace("2.41", "2.4.1");
        let input = format!("{}\n{}\n", header_row(), bad);
        assert!(matches!(
            read(&input),
            Err(Error::MalformedNumber { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = read("").unwrap();
        assert!(table.names.is_empty());
        assert!(table.bins.is_empty());
    }
}
