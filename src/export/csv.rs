//! CSV export sink
//!
//! Renders the table as UTF-8 CSV with a header row. Cells containing a
//! comma, quote, or line break are quoted; quotes are doubled.

use super::errors::ExportResult;
use super::ExportSink;

/// CSV renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_row(output: &mut String, cells: &[String]) {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            Self::write_cell(output, cell);
        }
        output.push('\n');
    }

    fn write_cell(output: &mut String, cell: &str) {
        let needs_quoting = cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r');
        if needs_quoting {
            output.push('"');
            for c in cell.chars() {
                if c == '"' {
                    output.push('"');
                }
                output.push(c);
            }
            output.push('"');
        } else {
            output.push_str(cell);
        }
    }
}

impl ExportSink for CsvExporter {
    fn render_table(&self, columns: &[String], rows: &[Vec<String>]) -> ExportResult<Vec<u8>> {
        let mut output = String::with_capacity(256);
        Self::write_row(&mut output, columns);
        for row in rows {
            Self::write_row(&mut output, row);
        }
        Ok(output.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}
