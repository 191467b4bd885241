use crate::cli::parser::{Commands, Ledger};
use crate::config::Config;
use crate::core::meal::MealLogic;
use crate::core::munch::MunchLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_money;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ledger, id, yes } = cmd {
        let what = match ledger {
            Ledger::Meals => "meal swipe",
            Ledger::Munch => "munch-money transaction",
        };

        if !*yes
            && !ask_confirmation(&format!(
                "Delete {} #{}? This action is irreversible.",
                what, id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;

        match ledger {
            Ledger::Meals => {
                let meals = MealLogic::delete(&mut pool, cfg.default_meals, *id)?;
                success(format!(
                    "Meal swipe #{} deleted. {} meals left.",
                    id, meals
                ));
            }
            Ledger::Munch => {
                let balance = MunchLogic::delete(&mut pool, cfg.default_munch_balance, *id)?;
                success(format!(
                    "Transaction #{} deleted. Balance: {}.",
                    id,
                    format_money(balance, &cfg.currency_symbol, false)
                ));
            }
        }
    }

    Ok(())
}
