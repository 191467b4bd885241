use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for mealswipe
/// CLI application to track meal swipes and munch money with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "mealswipe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track campus meal swipes and munch money, with a day-by-day history stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Time zone used to group history by day: local or utc
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which ledger a command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Ledger {
    /// Meal swipes
    #[value(alias = "meal")]
    Meals,
    /// Munch-money transactions
    #[value(alias = "munch-money")]
    Munch,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Maintain the database file
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show meals left and munch-money balance
    Status,

    /// Swipe one meal
    Eat {
        /// Record the swipe at a given time instead of now (RFC 3339)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Adjust the meal counter
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Record munch-money transactions
    Munch {
        #[command(subcommand)]
        action: MunchAction,
    },

    /// Delete a history row by id
    Del {
        #[arg(value_enum)]
        ledger: Ledger,

        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show history grouped by day, newest first
    History {
        #[arg(value_enum, default_value = "meals")]
        ledger: Ledger,

        #[arg(long, help = "Print the grouped history as JSON")]
        json: bool,
    },

    /// Compare the cached counters with the history
    Reconcile {
        #[arg(long, help = "Overwrite drifted counters with the newest history values")]
        fix: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MealAction {
    /// Add meals to the counter (no history row)
    Add {
        #[arg(default_value_t = 1)]
        count: i64,
    },

    /// Set the counter to an exact value (no history row)
    Set { count: i64 },
}

#[derive(Subcommand, Debug)]
pub enum MunchAction {
    /// Record a purchase
    Spend {
        amount: String,

        /// Record the purchase at a given time instead of now (RFC 3339)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Add funds
    Deposit {
        amount: String,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Set the balance, recording the difference as an adjustment
    Set { balance: String },
}
