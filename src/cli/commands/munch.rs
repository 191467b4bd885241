use crate::cli::parser::{Commands, MunchAction};
use crate::config::Config;
use crate::core::munch::{MunchLogic, MunchTransaction};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_timestamp;
use crate::utils::formatting::{format_money, parse_amount, parse_balance};

fn report(verb: &str, tx: &MunchTransaction, currency: &str) {
    success(format!(
        "{} {} (#{}). Balance: {}.",
        verb,
        format_money(tx.amount.abs(), currency, false),
        tx.id,
        format_money(tx.balance, currency, false)
    ));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Munch { action } = cmd {
        let currency = cfg.currency_symbol.as_str();
        let default_balance = cfg.default_munch_balance;

        match action {
            MunchAction::Spend { amount, at } => {
                let amount = parse_amount(amount)?;
                let at = at.as_deref().map(parse_timestamp).transpose()?;

                let mut pool = open_db(&cfg.database)?;
                let tx = MunchLogic::spend(&mut pool, default_balance, amount, at)?;
                report("Spent", &tx, currency);
            }
            MunchAction::Deposit { amount, at } => {
                let amount = parse_amount(amount)?;
                let at = at.as_deref().map(parse_timestamp).transpose()?;

                let mut pool = open_db(&cfg.database)?;
                let tx = MunchLogic::deposit(&mut pool, default_balance, amount, at)?;
                report("Deposited", &tx, currency);
            }
            MunchAction::Set { balance } => {
                let target = parse_balance(balance)?;

                let mut pool = open_db(&cfg.database)?;
                match MunchLogic::set_balance(&mut pool, default_balance, target)? {
                    Some(tx) => success(format!(
                        "Balance adjusted by {} (#{}). Balance: {}.",
                        format_money(tx.amount, currency, true),
                        tx.id,
                        format_money(tx.balance, currency, false)
                    )),
                    None => info(format!(
                        "Balance already {}, nothing recorded.",
                        format_money(target, currency, false)
                    )),
                }
            }
        }
    }

    Ok(())
}
