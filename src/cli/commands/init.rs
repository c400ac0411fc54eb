use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config file, ledger tables and archive directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data_dir.clone(), cli.test)?;
    Ok(())
}
