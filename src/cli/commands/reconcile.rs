use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::{Drift, ReconcileLogic};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::format_money;

fn describe<T: PartialEq + Copy>(name: &str, drift: &Drift<T>, fmt: impl Fn(T) -> String) {
    match drift.newest {
        None => println!(
            "{}: cached {} {}(no history, nothing to compare){}",
            name,
            fmt(drift.cached),
            GREY,
            RESET
        ),
        Some((id, _)) if drift.is_consistent() => println!(
            "{}: cached {} matches newest row #{}",
            name,
            fmt(drift.cached),
            id
        ),
        Some((id, snapshot)) => println!(
            "{}: cached {} but newest row #{} says {}",
            name,
            fmt(drift.cached),
            id,
            fmt(snapshot)
        ),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile { fix } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let report = ReconcileLogic::check(&pool, cfg.default_meals, cfg.default_munch_balance)?;

        let currency = cfg.currency_symbol.as_str();
        describe("Meals", &report.meals, |n| n.to_string());
        describe("Munch money", &report.munch, |d| {
            format_money(d, currency, false)
        });

        if report.is_consistent() {
            success("Counters agree with history.");
            return Ok(());
        }

        if *fix {
            let fixed = ReconcileLogic::fix(&mut pool, &report)?;
            success(format!("Rewrote {} counter(s) from history.", fixed));
        } else {
            warning("Counters drifted from history.");
            info("Run `mealswipe reconcile --fix` to overwrite them with the newest history values.");
        }
    }

    Ok(())
}
