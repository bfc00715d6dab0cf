use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::analytics::Transaction;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open transaction file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse transaction file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of transactions from `path`, keeping file order.
///
/// A missing or unparsable file is reported as a `LoadError` so the caller
/// can tell a failed load apart from a file that holds zero records.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, LoadError> {
    let path = path.as_ref();

    log::debug!("Opening transaction file: {path:?}");
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let transactions: Vec<Transaction> =
        serde_json::from_reader(reader).map_err(|e| LoadError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

    log::debug!("Deserialised {} transaction records", transactions.len());
    Ok(transactions)
}
