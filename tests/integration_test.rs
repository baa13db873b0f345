use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use serde_json::Value;
use tempfile::TempDir;

fn run(store: &Path, arguments: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_account-ledger");

    Ok(Command::new(binary_path)
        .arg("--store")
        .arg(store)
        .args(arguments)
        .env_remove("ACCOUNT_LEDGER_STORE")
        .env_remove("ACCOUNT_LEDGER_LOG")
        .output()?)
}

fn seeded_store() -> Result<(TempDir, std::path::PathBuf)> {
    let directory = tempfile::tempdir()?;
    let store = directory.path().join("acc_db.json");

    assert!(run(&store, &["seed"])?.status.success());

    Ok((directory, store))
}

#[test]
fn test_cli_seeds_and_lists_accounts() -> Result<()> {
    let (_directory, store) = seeded_store()?;

    let output = run(&store, &["list"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "id,name,kind,balance\n002,Alice,checking,1000.00\n003,Bob,savings,500.00\n"
    );

    Ok(())
}

#[test]
fn test_cli_list_rounds_balances_to_cents() -> Result<()> {
    let (_directory, store) = seeded_store()?;

    assert!(run(&store, &["deposit", "--account", "Bob", "--amount", "12.505"])?.status.success());

    let output = run(&store, &["list"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.ends_with("003,Bob,savings,512.51\n"));

    Ok(())
}

#[test]
fn test_cli_transfer_updates_both_accounts_on_disk() -> Result<()> {
    let (_directory, store) = seeded_store()?;

    let output = run(&store, &["transfer", "--account", "alice", "--to", "BOB", "--amount", "50"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let document: Value = serde_json::from_str(&std::fs::read_to_string(&store)?)?;
    let accounts = document.as_array().map(Vec::as_slice).unwrap_or_default();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["balance"], "950");
    assert_eq!(accounts[1]["balance"], "550");
    assert_eq!(accounts[0]["transactions"][0]["kind"], "transfer");
    assert_eq!(accounts[1]["transactions"][0]["kind"], "transfer");

    Ok(())
}

#[test]
fn test_cli_show_filters_history() -> Result<()> {
    let (_directory, store) = seeded_store()?;

    assert!(run(&store, &["deposit", "--account", "Alice", "--amount", "10"])?.status.success());
    assert!(run(&store, &["withdraw", "--account", "Alice", "--amount", "1105"])?.status.success());

    let output = run(&store, &["show", "--account", "Alice", "--criterion", "type", "--value", "withdraw"])?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Balance: -95.00");
    assert!(lines[1].ends_with("Amount: 1105.00, Type: withdraw"));

    Ok(())
}

#[test]
fn test_cli_reports_client_errors_with_exit_code_two() -> Result<()> {
    let (_directory, store) = seeded_store()?;

    let overdrawn = run(&store, &["withdraw", "--account", "Bob", "--amount", "501"])?;
    let unknown = run(&store, &["transfer", "--account", "Alice", "--to", "Charlie", "--amount", "50"])?;
    let negative = run(&store, &["deposit", "--account", "Alice", "--amount=-5"])?;

    for output in [&overdrawn, &unknown, &negative] {
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }

    let listing = String::from_utf8(run(&store, &["list"])?.stdout)?;

    assert!(listing.contains("002,Alice,checking,1000.00"));
    assert!(listing.contains("003,Bob,savings,500.00"));

    Ok(())
}

#[test]
fn test_cli_reports_corrupt_store_with_exit_code_one() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let store = directory.path().join("acc_db.json");
    std::fs::write(&store, "not json")?;

    let output = run(&store, &["deposit", "--account", "Alice", "--amount", "10"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&store)?, "not json");

    Ok(())
}

#[test]
fn test_cli_opens_accounts_once() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let store = directory.path().join("acc_db.json");
    let open = ["open", "--id", "7", "--name", "Carol", "--kind", "checking", "--balance", "0", "--overdraw-limit", "25"];

    assert!(run(&store, &open)?.status.success());
    assert_eq!(run(&store, &open)?.status.code(), Some(2));
    assert!(run(&store, &["withdraw", "--account", "carol", "--amount", "25"])?.status.success());

    let listing = String::from_utf8(run(&store, &["list"])?.stdout)?;

    assert_eq!(listing, "id,name,kind,balance\n7,Carol,checking,-25.00\n");

    Ok(())
}
