use crate::cli::parser::{Commands, MealAction};
use crate::config::Config;
use crate::core::meal::MealLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meal { action } = cmd {
        let mut pool = open_db(&cfg.database)?;

        match action {
            MealAction::Add { count } => {
                let meals = MealLogic::add(&mut pool, cfg.default_meals, *count)?;
                success(format!("Added {}. {} meals left.", count, meals));
            }
            MealAction::Set { count } => {
                let meals = MealLogic::set(&mut pool, *count)?;
                success(format!("Meal counter set to {}.", meals));
            }
        }
    }

    Ok(())
}
