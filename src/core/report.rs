//! Spreadsheet report generation.
//!
//! The report is a literal dump of the ledger: one worksheet, the canonical header
//! row, then one row per record in ledger order. Quantities are written as numbers
//! and everything else as text.

use crate::{
    core::ledger::{COLUMNS, Ledger},
    errors::{Error, Result},
};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::{info, instrument};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(i64),
}

/// Builds the report rows: header first, then one row per record.
#[must_use]
pub fn report_rows(ledger: &Ledger) -> Vec<Vec<Cell>> {
    let header: Vec<Cell> = COLUMNS
        .iter()
        .map(|name| Cell::Text((*name).to_string()))
        .collect();

    std::iter::once(header)
        .chain(ledger.iter().map(|record| {
            vec![
                Cell::Text(record.description.clone()),
                Cell::Number(record.quantity),
                Cell::Text(record.movement.to_string()),
                Cell::Text(record.timestamp_text()),
                Cell::Text(record.sector.to_string()),
            ]
        }))
        .collect()
}

/// Writes the ledger to an `.xlsx` file at `path`, replacing any existing file.
///
/// Returns the number of data rows written.
///
/// # Errors
/// Returns [`Error::NothingToExport`] for an empty ledger (no file is written), or
/// [`Error::Export`] if the workbook cannot be saved.
#[instrument(skip(ledger), fields(records = ledger.len()))]
pub fn export_report(ledger: &Ledger, path: &Path) -> Result<usize> {
    if ledger.is_empty() {
        return Err(Error::NothingToExport);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, cells) in (0u32..).zip(report_rows(ledger)) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Number(value) => {
                    // Quantities typed by hand stay far below 2^53.
                    #[allow(clippy::cast_precision_loss)]
                    let number = value as f64;
                    worksheet.write_number(row, col, number)?;
                }
            }
        }
    }

    workbook.save(path)?;

    info!("Exported {} record(s) to {}", ledger.len(), path.display());
    Ok(ledger.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_ledger;
    use calamine::{Data, Range, Reader, Xlsx, open_workbook};

    fn read_only_sheet(path: &Path) -> Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let sheets = workbook.sheet_names();
        assert_eq!(sheets.len(), 1);
        workbook.worksheet_range(&sheets[0]).unwrap()
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_report_rows_header_plus_one_row_per_record() {
        let ledger = sample_ledger();
        let rows = report_rows(&ledger);

        assert_eq!(rows.len(), ledger.len() + 1);
        assert_eq!(
            rows[0],
            vec![
                Cell::Text("Descrição".to_string()),
                Cell::Text("Quantidade".to_string()),
                Cell::Text("Movimento".to_string()),
                Cell::Text("Data".to_string()),
                Cell::Text("Setor".to_string()),
            ]
        );
        assert_eq!(
            rows[1],
            vec![
                Cell::Text("Paracetamol".to_string()),
                Cell::Number(50),
                Cell::Text("Entrada".to_string()),
                Cell::Text("2024-05-01 08:00:00".to_string()),
                Cell::Text("Farmácia".to_string()),
            ]
        );
        assert!(rows.iter().all(|row| row.len() == COLUMNS.len()));
    }

    #[test]
    fn test_export_empty_ledger_writes_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("relatorio_estoque.xlsx");

        let result = export_report(&Ledger::new(), &path);

        assert!(matches!(result, Err(Error::NothingToExport)));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_export_writes_workbook() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("relatorio_estoque.xlsx");

        let written = export_report(&sample_ledger(), &path)?;

        assert_eq!(written, sample_ledger().len());

        let sheet = read_only_sheet(&path);
        assert_eq!(sheet.get_size(), (sample_ledger().len() + 1, COLUMNS.len()));

        let rows: Vec<&[Data]> = sheet.rows().collect();
        let header: Vec<Data> = COLUMNS.iter().map(|name| text(name)).collect();
        assert_eq!(rows[0], header.as_slice());
        assert_eq!(
            rows[1],
            [
                text("Paracetamol"),
                Data::Float(50.0),
                text("Entrada"),
                text("2024-05-01 08:00:00"),
                text("Farmácia"),
            ]
            .as_slice()
        );
        let descriptions: Vec<&Data> = rows[1..].iter().map(|row| &row[0]).collect();
        assert_eq!(
            descriptions,
            [
                &text("Paracetamol"),
                &text("Luvas"),
                &text("paracetamol"),
                &text("Dipirona"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_export_overwrites_previous_report() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("relatorio_estoque.xlsx");
        std::fs::write(&path, "old report")?;

        let mut ledger = sample_ledger();
        export_report(&ledger, &path)?;
        ledger = ledger.without_description("paracetamol");
        export_report(&ledger, &path)?;

        assert_eq!(read_only_sheet(&path).get_size(), (ledger.len() + 1, COLUMNS.len()));
        Ok(())
    }
}
