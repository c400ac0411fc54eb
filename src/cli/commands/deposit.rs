use crate::config::Config;
use crate::core::reconcile::Reconciler;
use crate::errors::AppResult;
use crate::ledger::csv_store::CsvLedgerStore;
use crate::ui::messages;

/// Sweep every pending deposit into the bank balances.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = CsvLedgerStore::new(&cfg.bank_file, &cfg.deposit_file);
    let mut rec = Reconciler::new(&mut store, cfg.column_layout());

    let report = rec.sweep_deposits()?;

    messages::success(format!("Deposits swept: {} balances updated.", report.updated.len()));
    for (user, err) in &report.failures {
        messages::warning(format!("Row for user {user} skipped: {err}"));
    }
    if !report.is_clean() {
        messages::warning(format!(
            "{} rows could not be reconciled; fix them and sweep again.",
            report.failures.len()
        ));
    }
    Ok(())
}
