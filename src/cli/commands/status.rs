use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::meal::MealLogic;
use crate::core::munch::MunchLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::formatting::{bold, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let pool = open_db(&cfg.database)?;

        let meals = MealLogic::current(&pool, cfg.default_meals)?;
        let balance = MunchLogic::current(&pool, cfg.default_munch_balance)?;

        let meals_color = if meals > 0 { GREEN } else { RED };

        println!("{}", bold("mealswipe status"));
        println!(
            "{}• Meals left :{} {}{}{}",
            CYAN, RESET, meals_color, meals, RESET
        );
        println!(
            "{}• Munch money:{} {}",
            CYAN,
            RESET,
            format_money(balance, &cfg.currency_symbol, false)
        );
    }

    Ok(())
}
