use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;

/// Inspect the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                print!("{}", fs::read_to_string(&path)?);
            } else {
                messages::info(format!(
                    "No config file yet at {:?}; defaults are in effect.",
                    path
                ));
            }
        }

        if *check {
            match Config::load() {
                Ok(_) => messages::success("Configuration OK"),
                Err(e) => messages::error(format!("Configuration problem: {e}")),
            }
        }
    }
    Ok(())
}
