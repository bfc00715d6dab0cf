use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;

use crate::analytics::Transaction;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("issue id {value:?} is not numeric")]
    NonNumericIssueId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Read-only queries over a fixed collection of transactions.
///
/// The collection is handed over at construction and never mutated
/// afterwards; every query is a pure function over that snapshot and the
/// queries are independent of each other.
pub struct TransactionQueries {
    transactions: Vec<Transaction>,
}

impl TransactionQueries {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        TransactionQueries { transactions }
    }

    /// Sum of all transaction amounts, 0 when the collection is empty.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of the amounts sent by the given client (exact name match),
    /// 0 when the client sent nothing.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.sender_full_name == sender_full_name)
            .map(|tx| tx.amount)
            .sum()
    }

    /// Highest transaction amount, `None` when the collection is empty.
    pub fn max_amount(&self) -> Option<f64> {
        self.transactions
            .iter()
            .map(|tx| tx.amount)
            .max_by(f64::total_cmp)
    }

    /// Number of distinct clients appearing as sender or beneficiary.
    pub fn count_unique_clients(&self) -> usize {
        let mut clients: HashSet<&str> = HashSet::new();
        for tx in &self.transactions {
            clients.insert(tx.sender_full_name.as_str());
            clients.insert(tx.beneficiary_full_name.as_str());
        }
        clients.len()
    }

    /// Whether the client is involved, as sender or beneficiary, in at least
    /// one transaction with an unsolved compliance issue.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.involves(client_full_name) && tx.has_open_issue())
    }

    /// Transactions indexed by beneficiary name. A beneficiary appearing in
    /// several transactions keeps only the last one in input order.
    pub fn transactions_by_beneficiary_name(&self) -> HashMap<&str, &Transaction> {
        let mut by_beneficiary = HashMap::new();
        for tx in &self.transactions {
            by_beneficiary.insert(tx.beneficiary_full_name.as_str(), tx);
        }
        by_beneficiary
    }

    /// Distinct ids of all unsolved compliance issues. Ids are carried as
    /// strings on the wire and must be numeric; a non-numeric id is an error.
    pub fn unsolved_issue_ids(&self) -> Result<BTreeSet<u32>, QueryError> {
        let mut ids = BTreeSet::new();
        for tx in &self.transactions {
            if let Some(raw) = &tx.issue_id {
                if !tx.issue_solved {
                    let id = raw.parse().map_err(|e| QueryError::NonNumericIssueId {
                        value: raw.clone(),
                        source: e,
                    })?;
                    ids.insert(id);
                }
            }
        }
        Ok(ids)
    }

    /// Messages of all solved issues, in input order, duplicates kept.
    pub fn all_solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue_solved)
            .filter_map(|tx| tx.issue_message.as_deref())
            .collect()
    }

    /// Up to three transactions with the highest amounts, descending.
    /// Equal amounts keep their input order (the sort is stable).
    pub fn top3_transactions_by_amount(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        sorted.truncate(3);
        sorted
    }

    /// Sender with the highest total sent amount, `None` when the collection
    /// is empty. On equal totals the sender whose first transaction comes
    /// earliest in input order wins.
    pub fn top_sender(&self) -> Option<&str> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for tx in &self.transactions {
            *totals.entry(tx.sender_full_name.as_str()).or_insert(0.0) += tx.amount;
        }

        // Walk senders in first-appearance order so ties resolve the same
        // way on every run.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut best: Option<(&str, f64)> = None;
        for tx in &self.transactions {
            let name = tx.sender_full_name.as_str();
            if !seen.insert(name) {
                continue;
            }
            let total = totals[name];
            if best.is_none_or(|(_, best_total)| total > best_total) {
                best = Some((name, total));
            }
        }
        best.map(|(name, _)| name)
    }
}
