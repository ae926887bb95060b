//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `export` - Ranked result renderers (CSV, HTML table)

pub mod export;

pub use export::{exporter_for, CsvResultExporter, HtmlTableExporter};
