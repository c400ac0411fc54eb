use crate::config::Config;
use crate::core::reconcile::Reconciler;
use crate::errors::AppResult;
use crate::ledger::csv_store::CsvLedgerStore;
use crate::ui::messages;

/// Zero every presence counter. Role checks belong to the surface that
/// invokes the CLI; the command itself just runs the sweep.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = CsvLedgerStore::new(&cfg.bank_file, &cfg.deposit_file);
    let mut rec = Reconciler::new(&mut store, cfg.column_layout());

    let count = rec.reset_presence()?;
    messages::success(format!("Presence counters reset for {count} users."));
    Ok(())
}
