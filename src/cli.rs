use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::actors::LedgerActor;
use crate::engine::LedgerError;
use crate::models::{Account, AccountKind};
use crate::query::Filter;
use crate::storage::DEFAULT_STORE_FILE;
use crate::types::{to_cents, Amount};

/// Keep a small ledger of checking and savings accounts in a JSON file.
#[derive(Parser, Debug)]
#[command(name = "account-ledger", version, long_about = None)]
pub struct Args {
    /// JSON document holding every account
    #[arg(long, env = "ACCOUNT_LEDGER_STORE", default_value = DEFAULT_STORE_FILE, global = true)]
    pub store: PathBuf,

    /// One of error, warn, info, debug, trace
    #[arg(long, env = "ACCOUNT_LEDGER_LOG", default_value = "error", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Provision a new account
    Open {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        balance: Amount,
        /// Ignored for savings accounts
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        overdraw_limit: Amount
    },
    /// Store the demo accounts that are not present yet
    Seed,
    Deposit {
        #[arg(long)]
        account: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: Amount
    },
    Withdraw {
        #[arg(long)]
        account: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: Amount
    },
    Transfer {
        #[arg(long)]
        account: String,
        #[arg(long)]
        to: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: Amount
    },
    /// Print the balance and the (optionally filtered) history of an account
    Show {
        #[arg(long)]
        account: String,
        /// type, amount, day, month or year; empty shows everything
        #[arg(long, default_value = "")]
        criterion: String,
        #[arg(long, default_value = "")]
        value: String
    },
    /// Print every stored account as CSV
    List
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum KindArg {
    Checking,
    Savings
}

impl From<KindArg> for AccountKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Checking => AccountKind::Checking,
            KindArg::Savings => AccountKind::Savings
        }
    }
}

/// Runs one command through the actor and returns what should go to stdout.
///
/// Mutations answer with nothing on success.
pub async fn execute(command: Command, actor: &LedgerActor) -> Result<Option<String>, LedgerError> {
    match command {
        Command::Open { id, name, kind, balance, overdraw_limit } => {
            let kind = AccountKind::from(kind);
            let overdraw_limit = match kind {
                AccountKind::Checking => overdraw_limit,
                AccountKind::Savings => Amount::ZERO
            };

            actor.open(Account::new(id, name, kind, balance, overdraw_limit)).await?;
            Ok(None)
        },
        Command::Seed => {
            actor.seed().await?;
            Ok(None)
        },
        Command::Deposit { account, amount } => {
            actor.deposit(&account, amount).await?;
            Ok(None)
        },
        Command::Withdraw { account, amount } => {
            actor.withdraw(&account, amount).await?;
            Ok(None)
        },
        Command::Transfer { account, to, amount } => {
            actor.transfer(&account, amount, &to).await?;
            Ok(None)
        },
        Command::Show { account, criterion, value } => {
            let statement = actor.statement(&account, Filter::parse(&criterion, &value)).await?;
            Ok(Some(statement.to_string()))
        },
        Command::List => {
            let mut output = String::from("id,name,kind,balance\n");

            for account in actor.accounts().await? {
                output.push_str(&format!("{},{},{},{:.2}\n", account.id, account.name, account.kind(), to_cents(account.balance())));
            }

            Ok(Some(output))
        }
    }
}
