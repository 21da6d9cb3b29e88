//! Record extraction from multi-entity FASTA text.
//!
//! Splits input text into `(header, body)` records on `>` marker lines.
//! Parsing is a single lazy pass:
//!
//! - Lines are trimmed of surrounding whitespace; blank lines are skipped.
//! - A line starting with `>` closes the current record (if any) and opens
//!   a new one with the remainder of the line as header text.
//! - Every other line is appended to the current body without a separator,
//!   so multi-line sequences concatenate into one contiguous string.
//! - Lines before the first marker are discarded.
//!
//! A marker with empty header text (a bare `>`) never opens a record; body
//! lines gathered under it are dropped.
//!
//! # Example
//!
//! ```
//! use fasta2af3::fasta::parse_records;
//!
//! let input = ">job1\nMKTA\nYIAK\n>job2\ndna|ACGT";
//! let records: Vec<_> = parse_records(input).collect();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].body, "MKTAYIAK");
//! ```

use std::str::Lines;

use super::types::Record;

/// Parse input text into a lazy sequence of records, in input order.
pub fn parse_records(input: &str) -> Records<'_> {
    Records {
        lines: input.lines(),
        current: None,
    }
}

/// Iterator over the records of one input text.
///
/// Yields each record as soon as its terminating marker (or end of input)
/// is reached.
#[derive(Debug)]
pub struct Records<'a> {
    lines: Lines<'a>,
    current: Option<Record>,
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                let finished = self.current.take();
                if !header.is_empty() {
                    self.current = Some(Record::new(header));
                }
                if finished.is_some() {
                    return finished;
                }
            } else if let Some(record) = self.current.as_mut() {
                record.body.push_str(line);
            }
        }

        self.current.take()
    }
}
