//! Narrow adapter over the external spreadsheet-like store.
//! The reconciler only ever needs whole-column reads and single-cell
//! writes, so that is the entire contract.

use crate::errors::AppResult;
use std::fmt;

pub mod csv_store;
pub mod memory;

/// Logical tables of the community ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Per-user bank balances.
    Bank,
    /// Per-user deposit accumulators and presence counters.
    Deposit,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Bank => write!(f, "bank"),
            Table::Deposit => write!(f, "deposit"),
        }
    }
}

/// Column/cell access over a tabular store.
/// Rows and columns are 1-based; row 1 is the header in every table.
pub trait LedgerStore {
    /// Read a full column, header included. Cells a row does not have
    /// come back as empty strings.
    fn get_column(&self, table: Table, column: usize) -> AppResult<Vec<String>>;

    /// Write a single cell, growing the table as needed.
    fn update_cell(&mut self, table: Table, row: usize, column: usize, value: &str)
    -> AppResult<()>;
}
