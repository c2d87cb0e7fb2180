use csv::WriterBuilder;
use std::path::Path;

use quiz_core::model::ResultRow;

use super::{COLUMNS, ExportError, ReportFormat, ReportRecord, ReportWriter};

/// Writes the report as comma-separated text with a header row.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write_report(&self, rows: &[ResultRow], destination: &Path) -> Result<(), ExportError> {
        // Header written by hand so an empty report still carries it.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(destination)?;
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.serialize(ReportRecord::from(row))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
