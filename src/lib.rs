pub mod analytics;

pub use analytics::{LoadError, QueryError, Transaction, TransactionQueries, load_transactions};
