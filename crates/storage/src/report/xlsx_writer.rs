use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use quiz_core::model::ResultRow;

use super::{COLUMNS, ExportError, ReportFormat, ReportWriter, SHEET_NAME};

/// Writes the report as a single-sheet Excel workbook.
#[derive(Clone, Copy, Debug, Default)]
pub struct XlsxReportWriter;

impl ReportWriter for XlsxReportWriter {
    fn write_report(&self, rows: &[ResultRow], destination: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, title) in (0_u16..).zip(COLUMNS) {
            worksheet.write_string_with_format(0, col, title, &header)?;
        }
        for (row_idx, row) in (1_u32..).zip(rows) {
            worksheet.write_string(row_idx, 0, row.prompt.as_str())?;
            worksheet.write_string(row_idx, 1, row.answer_label())?;
            worksheet.write_string(row_idx, 2, row.correct_answer.as_str())?;
            worksheet.write_string(row_idx, 3, row.result_label())?;
        }
        worksheet.autofit();

        workbook.save(destination)?;
        Ok(())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }
}
