use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::meal::MealLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::meal_period::MealPeriod;
use crate::ui::messages::success;
use crate::utils::date::{parse_timestamp, time_in, time_label};

/// Swipe one meal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Eat { at } = cmd {
        let at = at.as_deref().map(parse_timestamp).transpose()?;

        let mut pool = open_db(&cfg.database)?;
        let swipe = MealLogic::eat(&mut pool, cfg.default_meals, at)?;

        let time = time_in(&swipe.at, cfg.timezone);
        success(format!(
            "{} swiped at {} (#{}). {} meals left.",
            MealPeriod::from_time(time),
            time_label(time),
            swipe.id,
            swipe.meals_left
        ));
    }

    Ok(())
}
