//! CSV export adapter.
//!
//! Produces the `topsis_results.csv` download: the header row, then one
//! line per alternative with its original cells, score and rank.

use crate::domain::topsis::RankedResult;
use crate::ports::{ExportError, ExportFormat, ResultExporter};

/// Delimited-text exporter.
///
/// A cell is wrapped in double quotes when it contains the delimiter, a
/// quote or a line break; inner quotes are doubled.
#[derive(Debug, Clone)]
pub struct CsvResultExporter {
    delimiter: char,
}

impl CsvResultExporter {
    /// Create a comma-separated exporter.
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn quote(&self, cell: &str) -> String {
        let needs_quotes = cell.contains(self.delimiter)
            || cell.contains('"')
            || cell.contains('\n')
            || cell.contains('\r');

        if needs_quotes {
            format!("\"{}\"", cell.replace('"', "\"\""))
        } else {
            cell.to_string()
        }
    }

    fn line(&self, cells: &[String]) -> String {
        let quoted: Vec<String> = cells.iter().map(|c| self.quote(c)).collect();
        let separator = self.delimiter.to_string();
        let mut line = quoted.join(separator.as_str());
        line.push('\n');
        line
    }
}

impl Default for CsvResultExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultExporter for CsvResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, result: &RankedResult) -> Result<String, ExportError> {
        if self.delimiter == '"' || self.delimiter == '\n' {
            return Err(ExportError::render_failed(format!(
                "'{}' cannot be used as a delimiter",
                self.delimiter.escape_default()
            )));
        }

        let mut out = self.line(result.header_row());
        for row in &result.rows {
            out.push_str(&self.line(&row.to_cells()));
        }
        Ok(out)
    }
}
