//! CSV-file implementation of the ledger store.

use crate::errors::AppResult;
use crate::ledger::{LedgerStore, Table};
use std::path::{Path, PathBuf};

/// Tabular store backed by one CSV file per table.
/// Every access re-reads the whole file; community-sized tables make a
/// cached index unnecessary, and the files stay the source of truth.
pub struct CsvLedgerStore {
    bank: PathBuf,
    deposit: PathBuf,
}

impl CsvLedgerStore {
    pub fn new(bank: impl Into<PathBuf>, deposit: impl Into<PathBuf>) -> Self {
        Self {
            bank: bank.into(),
            deposit: deposit.into(),
        }
    }

    fn path(&self, table: Table) -> &Path {
        match table {
            Table::Bank => &self.bank,
            Table::Deposit => &self.deposit,
        }
    }

    fn read_rows(&self, table: Table) -> AppResult<Vec<Vec<String>>> {
        let path = self.path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn write_rows(&self, table: Table, rows: &[Vec<String>]) -> AppResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(self.path(table))?;

        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl LedgerStore for CsvLedgerStore {
    fn get_column(&self, table: Table, column: usize) -> AppResult<Vec<String>> {
        let rows = self.read_rows(table)?;
        Ok(rows
            .iter()
            .map(|r| r.get(column - 1).cloned().unwrap_or_default())
            .collect())
    }

    fn update_cell(
        &mut self,
        table: Table,
        row: usize,
        column: usize,
        value: &str,
    ) -> AppResult<()> {
        let mut rows = self.read_rows(table)?;

        // csv refuses zero-field records, so filler rows get one empty cell
        while rows.len() < row {
            rows.push(vec![String::new()]);
        }

        let cells = &mut rows[row - 1];
        while cells.len() < column {
            cells.push(String::new());
        }
        cells[column - 1] = value.to_string();

        self.write_rows(table, &rows)
    }
}
