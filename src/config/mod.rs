use crate::core::reconcile::ColumnLayout;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bank_file")]
    pub bank_file: String,
    #[serde(default = "default_deposit_file")]
    pub deposit_file: String,
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,
    /// How long a check-in window stays open, in seconds.
    #[serde(default = "default_duration")]
    pub checkin_duration_secs: u64,
    #[serde(default = "default_user_column")]
    pub user_column: usize,
    #[serde(default = "default_balance_column")]
    pub balance_column: usize,
    #[serde(default = "default_presence_column")]
    pub presence_column: usize,
    #[serde(default = "default_deposit_column")]
    pub deposit_column: usize,
}

fn default_bank_file() -> String {
    Config::config_dir().join("bank.csv").to_string_lossy().to_string()
}
fn default_deposit_file() -> String {
    Config::config_dir()
        .join("deposit.csv")
        .to_string_lossy()
        .to_string()
}
fn default_archive_dir() -> String {
    Config::config_dir()
        .join("checkins")
        .to_string_lossy()
        .to_string()
}
fn default_duration() -> u64 {
    600
}
fn default_user_column() -> usize {
    2
}
fn default_balance_column() -> usize {
    3
}
fn default_presence_column() -> usize {
    3
}
fn default_deposit_column() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_file: default_bank_file(),
            deposit_file: default_deposit_file(),
            archive_dir: default_archive_dir(),
            checkin_duration_secs: default_duration(),
            user_column: default_user_column(),
            balance_column: default_balance_column(),
            presence_column: default_presence_column(),
            deposit_column: default_deposit_column(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("presencelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".presencelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presencelog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Point every data path at a custom directory.
    pub fn rebase(&mut self, dir: &str) {
        let dir = Path::new(dir);
        self.bank_file = dir.join("bank.csv").to_string_lossy().to_string();
        self.deposit_file = dir.join("deposit.csv").to_string_lossy().to_string();
        self.archive_dir = dir.join("checkins").to_string_lossy().to_string();
    }

    pub fn column_layout(&self) -> ColumnLayout {
        ColumnLayout {
            user: self.user_column,
            balance: self.balance_column,
            presence: self.presence_column,
            deposit: self.deposit_column,
        }
    }

    /// Initialize configuration, ledger tables and archive directory.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        fs::create_dir_all(Self::config_dir())?;

        let mut config = Config::default();
        if let Some(dir) = &data_dir {
            fs::create_dir_all(dir)?;
            config.rebase(dir);
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("failed to serialize config: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
            messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        // Ledger tables with the default spreadsheet layout; never
        // overwrite tables that already hold data.
        seed_table(&config.bank_file, "name,user_id,balance")?;
        seed_table(&config.deposit_file, "name,user_id,presence,note,deposit")?;
        fs::create_dir_all(&config.archive_dir)?;

        messages::success(format!("Bank table:    {}", config.bank_file));
        messages::success(format!("Deposit table: {}", config.deposit_file));
        messages::success(format!("Archive dir:   {}", config.archive_dir));

        Ok(config)
    }
}

fn seed_table(path: &str, header: &str) -> AppResult<()> {
    let path = Path::new(path);
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{header}\n"))?;
    Ok(())
}
