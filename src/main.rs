use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use account_ledger::actors::LedgerActor;
use account_ledger::cli::{execute, Args};
use account_ledger::engine::Ledger;
use account_ledger::storage::JsonFileStore;

const EXIT_SERVER_ERROR: i32 = 1;
const EXIT_CLIENT_ERROR: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let store = Arc::new(JsonFileStore::new(&args.store));
    info!("Using account store at [{}]", store.path().display());

    let actor = LedgerActor::spawn(Ledger::new(store));
    let result = execute(args.command, &actor).await;

    actor.despawn().await?;

    match result {
        Ok(Some(output)) => write_to_stdout(&output)?,
        Ok(None) => debug!("Command completed"),
        Err(error) => {
            eprintln!("{error}");
            exit(if error.is_client_error() { EXIT_CLIENT_ERROR } else { EXIT_SERVER_ERROR });
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output only, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_to_stdout(content: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    output.write_all(content.as_bytes())?;
    output.flush()?;

    Ok(())
}
