use clap::{Parser, Subcommand};

/// Command-line interface definition for presencelog
/// CLI application to run community check-ins and keep the ledger straight
#[derive(Parser)]
#[command(
    name = "presencelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run timed community check-in windows and reconcile the presence/bank ledger",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding the ledger tables and the
    /// roster archive (useful for tests or side-by-side communities)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, ledger tables and archive directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check that the configuration file parses")]
        check: bool,
    },

    /// Open a timed check-in window and read registrations from stdin
    Checkin {
        /// Window length in seconds (defaults to the configured duration)
        #[arg(long = "duration")]
        duration: Option<u64>,
    },

    /// Show the roster of the most recent closed check-in window
    ListCheckins,

    /// Show a user's bank balance
    Balance {
        #[arg(long = "user", help = "User id to look up")]
        user: String,
    },

    /// Credit every user's pending deposit to their bank balance
    Deposit,

    /// Zero the presence counter of every known user (staff only)
    ResetPresence,
}
