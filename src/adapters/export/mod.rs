//! Export adapters - Implementations of the `ResultExporter` port.
//!
//! - `CsvResultExporter` - Delimited text download
//! - `HtmlTableExporter` - HTML table for email bodies and result pages

mod csv_exporter;
mod html_table_exporter;

pub use csv_exporter::CsvResultExporter;
pub use html_table_exporter::HtmlTableExporter;

use std::sync::Arc;

use crate::ports::{ExportFormat, ResultExporter};

/// Returns the default exporter for `format`.
pub fn exporter_for(format: ExportFormat) -> Arc<dyn ResultExporter> {
    match format {
        ExportFormat::Csv => Arc::new(CsvResultExporter::new()),
        ExportFormat::Html => Arc::new(HtmlTableExporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exporter_for_matches_format() {
        assert_eq!(exporter_for(ExportFormat::Csv).format(), ExportFormat::Csv);
        assert_eq!(exporter_for(ExportFormat::Html).format(), ExportFormat::Html);
    }
}
