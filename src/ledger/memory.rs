//! In-memory ledger store, used by the test suite.

use crate::errors::AppResult;
use crate::ledger::{LedgerStore, Table};

/// Fake tabular store: two in-memory tables plus a log of every cell
/// write, so tests can assert exactly what a reconciliation pass wrote.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    bank: Vec<Vec<String>>,
    deposit: Vec<Vec<String>>,
    pub writes: Vec<(Table, usize, usize, String)>,
}

impl MemoryLedgerStore {
    pub fn with_tables(bank: &[&[&str]], deposit: &[&[&str]]) -> Self {
        let own = |t: &[&[&str]]| -> Vec<Vec<String>> {
            t.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect()
        };
        Self {
            bank: own(bank),
            deposit: own(deposit),
            writes: Vec::new(),
        }
    }

    pub fn cell(&self, table: Table, row: usize, column: usize) -> Option<&str> {
        self.rows(table)
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .map(String::as_str)
    }

    fn rows(&self, table: Table) -> &Vec<Vec<String>> {
        match table {
            Table::Bank => &self.bank,
            Table::Deposit => &self.deposit,
        }
    }

    fn rows_mut(&mut self, table: Table) -> &mut Vec<Vec<String>> {
        match table {
            Table::Bank => &mut self.bank,
            Table::Deposit => &mut self.deposit,
        }
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn get_column(&self, table: Table, column: usize) -> AppResult<Vec<String>> {
        Ok(self
            .rows(table)
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
        let rows = self.rows_mut(table);
        while rows.len() < row {
            rows.push(Vec::new());
        }
        let cells = &mut rows[row - 1];
        while cells.len() < column {
            cells.push(String::new());
        }
        cells[column - 1] = value.to_string();

        self.writes.push((table, row, column, value.to_string()));
        Ok(())
    }
}
