use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::Reconciler;
use crate::errors::AppResult;
use crate::ledger::csv_store::CsvLedgerStore;
use crate::ui::messages;
use crate::utils::num::format_decimal;

/// Look up and print a user's bank balance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { user } = cmd {
        let mut store = CsvLedgerStore::new(&cfg.bank_file, &cfg.deposit_file);
        let rec = Reconciler::new(&mut store, cfg.column_layout());
        let balance = rec.balance_of(user)?;
        messages::info(format!("Balance for {}: {}", user, format_decimal(balance)));
    }
    Ok(())
}
