use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::ReconcileLogic;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// SQLite integrity check, then the ledger/counter comparison `reconcile` does.
fn check(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    println!("{}▶ Running integrity check…{}", CYAN, RESET);

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity != "ok" {
        tracing::error!("Integrity check failed: {integrity}");
        println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
        return Ok(());
    }
    println!("{}✔ Integrity check passed.{}", GREEN, RESET);

    let report = ReconcileLogic::check(pool, cfg.default_meals, cfg.default_munch_balance)?;
    if report.is_consistent() {
        println!("{}✔ Cached counters agree with history.{}\n", GREEN, RESET);
    } else {
        println!(
            "{}⚠ Cached counters drifted from history, see `mealswipe reconcile`.{}\n",
            YELLOW, RESET
        );
    }
    Ok(())
}

fn vacuum(pool: &DbPool) -> AppResult<()> {
    println!("{}▶ Running VACUUM…{}", CYAN, RESET);
    pool.conn.execute_batch("VACUUM;")?;
    println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check: run_check,
        vacuum: run_vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = open_db(&cfg.database)?;

    if *info {
        stats::print_db_info(&pool, &cfg.database)?;
    }
    if *run_check {
        check(&pool, cfg)?;
    }
    if *run_vacuum {
        vacuum(&pool)?;
    }

    Ok(())
}
