mod loader;
mod queries;
mod transaction;

pub use loader::{LoadError, load_transactions};
pub use queries::{QueryError, TransactionQueries};
pub use transaction::Transaction;
