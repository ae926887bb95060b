//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResultExporter` - Renders a ranked result for download or delivery

mod result_exporter;

pub use result_exporter::{
    ExportError, ExportFormat, ExportedResults, ResultExporter, RESULTS_BASE_FILENAME,
};
