use crate::cli::parser::{Commands, Ledger};
use crate::config::{Config, TimeZoneSetting};
use crate::core::history::HistoryLogic;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::history::{MealEntry, MunchEntry, Section};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_amount, color_for_period};
use crate::utils::formatting::pad_right;
use chrono::{Local, Utc};

fn meal_sections(pool: &DbPool, cfg: &Config) -> AppResult<Vec<Section<MealEntry>>> {
    match cfg.timezone {
        TimeZoneSetting::Local => HistoryLogic::meals(pool, &Local),
        TimeZoneSetting::Utc => HistoryLogic::meals(pool, &Utc),
    }
}

fn munch_sections(pool: &DbPool, cfg: &Config) -> AppResult<Vec<Section<MunchEntry>>> {
    let currency = cfg.currency_symbol.as_str();
    match cfg.timezone {
        TimeZoneSetting::Local => HistoryLogic::munch(pool, &Local, currency),
        TimeZoneSetting::Utc => HistoryLogic::munch(pool, &Utc, currency),
    }
}

fn print_meals(sections: &[Section<MealEntry>]) {
    for section in sections {
        header(&section.title);
        for e in &section.entries {
            println!(
                "  #{:<5} {:>8}  {}{}{}  {} left",
                e.id,
                e.time,
                color_for_period(&e.label),
                pad_right(&e.label, 14),
                RESET,
                e.meals_left
            );
        }
    }
}

fn print_munch(sections: &[Section<MunchEntry>]) {
    for section in sections {
        header(&section.title);
        for e in &section.entries {
            println!(
                "  #{:<5} {:>8}  {}{}{}",
                e.id,
                e.time,
                color_for_amount(e.amount),
                e.label,
                RESET
            );
        }
    }
}

/// Print a ledger grouped by day, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { ledger, json } = cmd {
        let pool = open_db(&cfg.database)?;

        match ledger {
            Ledger::Meals => {
                let sections = meal_sections(&pool, cfg)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&sections)?);
                } else if sections.is_empty() {
                    info("No meal swipes recorded yet.");
                } else {
                    print_meals(&sections);
                }
            }
            Ledger::Munch => {
                let sections = munch_sections(&pool, cfg)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&sections)?);
                } else if sections.is_empty() {
                    info("No munch-money transactions recorded yet.");
                } else {
                    print_munch(&sections);
                }
            }
        }
    }

    Ok(())
}
