use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use simple_logger::SimpleLogger;

use transaction_analytics::{TransactionQueries, load_transactions};

const DEFAULT_DATA_FILE: &str = "transactions.json";

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let path = data_file_path();
    log::debug!("Loading transactions from {path:?}");
    let transactions = load_transactions(&path)?;
    log::debug!("Loaded {} transactions", transactions.len());

    let queries = TransactionQueries::new(transactions);
    write_report(&queries, &mut io::stdout().lock())?;

    log::debug!("Application finished");

    Ok(())
}

fn data_file_path() -> PathBuf {
    match env::args_os().nth(1) {
        Some(file_path) => PathBuf::from(file_path),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

/// Prints every query result on its own line. Map and set results are
/// printed sorted so the report is stable across runs.
fn write_report(queries: &TransactionQueries, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Total transaction amount: {:.2}", queries.total_amount())?;
    writeln!(
        out,
        "Total amount sent by Billy Kimber: {:.2}",
        queries.total_amount_sent_by("Billy Kimber")
    )?;

    match queries.max_amount() {
        Some(max) => writeln!(out, "Highest transaction amount: {max:.2}")?,
        None => writeln!(out, "Highest transaction amount: no transactions")?,
    }

    writeln!(out, "Unique clients: {}", queries.count_unique_clients())?;
    writeln!(
        out,
        "Grace Burgess has open compliance issues: {}",
        queries.has_open_compliance_issues("Grace Burgess")
    )?;

    let mut by_beneficiary: Vec<(&str, u64)> = queries
        .transactions_by_beneficiary_name()
        .into_iter()
        .map(|(name, tx)| (name, tx.mtn))
        .collect();
    by_beneficiary.sort();
    let by_beneficiary: Vec<String> = by_beneficiary
        .into_iter()
        .map(|(name, mtn)| format!("{name}={mtn}"))
        .collect();
    writeln!(
        out,
        "Last transaction per beneficiary: {}",
        by_beneficiary.join(", ")
    )?;

    let ids: Vec<String> = queries
        .unsolved_issue_ids()?
        .into_iter()
        .map(|id| id.to_string())
        .collect();
    writeln!(out, "Unsolved issue ids: {}", ids.join(", "))?;

    writeln!(
        out,
        "Solved issue messages: {}",
        queries.all_solved_issue_messages().join("; ")
    )?;

    let top3: Vec<String> = queries
        .top3_transactions_by_amount()
        .iter()
        .map(|tx| format!("{} ({:.2})", tx.mtn, tx.amount))
        .collect();
    writeln!(out, "Top 3 transactions by amount: {}", top3.join(", "))?;

    writeln!(
        out,
        "Top sender: {}",
        queries.top_sender().unwrap_or("no transactions")
    )?;

    Ok(())
}
