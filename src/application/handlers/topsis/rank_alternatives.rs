//! RankAlternativesHandler - Command handler for TOPSIS ranking requests.
//!
//! Validates the submitted table, ranks the alternatives, and optionally
//! renders the result with a registered exporter. Each call is independent;
//! the handler keeps no result between calls.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::AnalysisConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::{validate_and_rank_with, RankedResult, RankingOptions, RawTable};
use crate::ports::{ExportFormat, ExportedResults, ResultExporter};

/// Command to rank the alternatives of an uploaded table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Header row first, identifier column first.
    pub table: RawTable,
    /// Comma-separated weights, e.g. `"1,1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,+,-,+"`.
    pub impacts: String,
    /// Render the result in this format as well.
    pub export_format: Option<ExportFormat>,
}

impl RankAlternativesCommand {
    /// Creates a command without export.
    pub fn new(table: RawTable, weights: impl Into<String>, impacts: impl Into<String>) -> Self {
        Self {
            table,
            weights: weights.into(),
            impacts: impacts.into(),
            export_format: None,
        }
    }

    /// Requests an export in `format`.
    pub fn with_export(mut self, format: ExportFormat) -> Self {
        self.export_format = Some(format);
        self
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub ranking: RankedResult,
    pub export: Option<ExportedResults>,
}

/// Handler for ranking requests.
pub struct RankAlternativesHandler {
    options: RankingOptions,
    exporters: Vec<Arc<dyn ResultExporter>>,
}

impl RankAlternativesHandler {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            options: config.ranking_options(),
            exporters: Vec::new(),
        }
    }

    /// Registers an exporter; a later one replaces an earlier one of the same format.
    pub fn with_exporter(mut self, exporter: Arc<dyn ResultExporter>) -> Self {
        self.exporters.retain(|e| e.format() != exporter.format());
        self.exporters.push(exporter);
        self
    }

    /// Formats this handler can export.
    pub fn supported_formats(&self) -> Vec<ExportFormat> {
        self.exporters.iter().map(|e| e.format()).collect()
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankAlternativesResult, DomainError> {
        debug!(
            rows = cmd.table.records().len(),
            columns = cmd.table.column_count(),
            weights = %cmd.weights,
            impacts = %cmd.impacts,
            "Ranking alternatives"
        );

        // 1. Resolve the exporter first so a bad format fails before any work
        let exporter = match cmd.export_format {
            Some(format) => Some(self.exporter_for(format)?),
            None => None,
        };

        // 2. Validate and rank
        let ranking = validate_and_rank_with(&cmd.table, &cmd.weights, &cmd.impacts, &self.options)
            .map_err(|e| log_failure(DomainError::from(e)))?;

        // 3. Render
        let export = match exporter {
            Some(exporter) => Some(
                exporter
                    .export(&ranking)
                    .map_err(|e| log_failure(DomainError::from(e)))?,
            ),
            None => None,
        };

        info!(
            alternatives = ranking.len(),
            best = ranking.best().map(|r| r.identifier()).unwrap_or(""),
            exported = export.is_some(),
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult { ranking, export })
    }

    fn exporter_for(&self, format: ExportFormat) -> Result<&Arc<dyn ResultExporter>, DomainError> {
        self.exporters
            .iter()
            .find(|e| e.format() == format)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnsupportedFormat,
                    format!("No exporter registered for {}", format),
                )
                .with_detail("format", format.to_string())
            })
    }
}

/// Input problems are the caller's to fix; anything else is ours.
fn log_failure(err: DomainError) -> DomainError {
    if err.code.is_input_error() {
        warn!(code = %err.code, error = %err, "Rejected ranking input");
    } else {
        error!(code = %err.code, error = %err, "Ranking request failed");
    }
    err
}
