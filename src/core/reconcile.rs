//! Ledger reconciliation: presence credits, deposit sweeps and
//! presence resets over the tabular store adapter.

use crate::errors::{AppError, AppResult};
use crate::ledger::{LedgerStore, Table};
use crate::utils::num::{format_decimal, parse_count, parse_decimal};

/// Column layout of the ledger tables (1-based, row 1 is the header).
/// Defaults match the community spreadsheet: user ids in column B,
/// balances in C, presence counters in C of the deposit table, deposit
/// accumulators in E.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    pub user: usize,
    pub balance: usize,
    pub presence: usize,
    pub deposit: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            user: 2,
            balance: 3,
            presence: 3,
            deposit: 5,
        }
    }
}

/// Outcome of a full deposit sweep. One bad row never aborts the rest,
/// so failures are collected next to the rows that did update.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub updated: Vec<(String, f64)>,
    pub failures: Vec<(String, AppError)>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Reconciler<'a, S: LedgerStore> {
    store: &'a mut S,
    cols: ColumnLayout,
}

impl<'a, S: LedgerStore> Reconciler<'a, S> {
    pub fn new(store: &'a mut S, cols: ColumnLayout) -> Self {
        Self { store, cols }
    }

    /// Locate a user's row by exact id match, skipping the header row.
    /// Returns the 1-based row index.
    fn find_row(&self, table: Table, user_id: &str) -> AppResult<usize> {
        let ids = self.store.get_column(table, self.cols.user)?;
        ids.iter()
            .enumerate()
            .skip(1)
            .find(|(_, id)| id.trim() == user_id)
            .map(|(idx, _)| idx + 1)
            .ok_or_else(|| AppError::RowNotFound {
                table: table.to_string(),
                user: user_id.to_string(),
            })
    }

    /// Add one to the user's presence counter. A missing counter cell
    /// counts as zero; a missing user row is a typed error the caller
    /// decides how to present.
    pub fn credit_presence(&mut self, user_id: &str) -> AppResult<i64> {
        let row = self.find_row(Table::Deposit, user_id)?;
        let counters = self.store.get_column(Table::Deposit, self.cols.presence)?;

        let raw = counters.get(row - 1).map(String::as_str).unwrap_or("");
        let count = parse_count(raw).ok_or_else(|| AppError::MalformedValue {
            table: Table::Deposit.to_string(),
            user: user_id.to_string(),
            value: raw.to_string(),
        })?;

        let next = count + 1;
        self.store
            .update_cell(Table::Deposit, row, self.cols.presence, &next.to_string())?;
        Ok(next)
    }

    /// Read a user's bank balance, normalized.
    pub fn balance_of(&self, user_id: &str) -> AppResult<f64> {
        let row = self
            .find_row(Table::Bank, user_id)
            .map_err(|_| AppError::UserNotFound(user_id.to_string()))?;
        let balances = self.store.get_column(Table::Bank, self.cols.balance)?;

        let raw = balances.get(row - 1).map(String::as_str).unwrap_or("");
        parse_decimal(raw).ok_or_else(|| AppError::MalformedValue {
            table: Table::Bank.to_string(),
            user: user_id.to_string(),
            value: raw.to_string(),
        })
    }

    /// Credit every user's deposit accumulator to their bank balance,
    /// in ascending bank-row order. The accumulator itself is left
    /// untouched; clearing it is not part of this operation.
    pub fn sweep_deposits(&mut self) -> AppResult<SweepReport> {
        let users = self.store.get_column(Table::Bank, self.cols.user)?;
        let balances = self.store.get_column(Table::Bank, self.cols.balance)?;
        let dep_users = self.store.get_column(Table::Deposit, self.cols.user)?;
        let deposits = self.store.get_column(Table::Deposit, self.cols.deposit)?;

        let mut report = SweepReport::default();
        for (idx, user) in users.iter().enumerate().skip(1) {
            let user = user.trim();
            if user.is_empty() {
                continue;
            }
            match self.sweep_row(idx, user, &balances, &dep_users, &deposits) {
                Ok(new_balance) => report.updated.push((user.to_string(), new_balance)),
                Err(e) => report.failures.push((user.to_string(), e)),
            }
        }
        Ok(report)
    }

    fn sweep_row(
        &mut self,
        idx: usize,
        user: &str,
        balances: &[String],
        dep_users: &[String],
        deposits: &[String],
    ) -> AppResult<f64> {
        let raw_balance = balances.get(idx).map(String::as_str).unwrap_or("");
        let balance = parse_decimal(raw_balance).ok_or_else(|| AppError::MalformedValue {
            table: Table::Bank.to_string(),
            user: user.to_string(),
            value: raw_balance.to_string(),
        })?;

        // Users without a deposit row simply have nothing pending.
        let pending = match dep_users
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, id)| id.trim() == user)
        {
            Some((dep_idx, _)) => {
                let raw = deposits.get(dep_idx).map(String::as_str).unwrap_or("");
                parse_decimal(raw).ok_or_else(|| AppError::MalformedValue {
                    table: Table::Deposit.to_string(),
                    user: user.to_string(),
                    value: raw.to_string(),
                })?
            }
            None => 0.0,
        };

        let new_balance = balance + pending;
        self.store.update_cell(
            Table::Bank,
            idx + 1,
            self.cols.balance,
            &format_decimal(new_balance),
        )?;
        Ok(new_balance)
    }

    /// Zero the presence counter of every known user. Returns how many
    /// counters were reset.
    pub fn reset_presence(&mut self) -> AppResult<usize> {
        let users = self.store.get_column(Table::Deposit, self.cols.user)?;

        let mut reset = 0;
        for (idx, user) in users.iter().enumerate().skip(1) {
            if user.trim().is_empty() {
                continue;
            }
            self.store
                .update_cell(Table::Deposit, idx + 1, self.cols.presence, "0")?;
            reset += 1;
        }
        Ok(reset)
    }
}
