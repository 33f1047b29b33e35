mod search;
mod sql_builder;

pub use search::{ResultRow, SearchExecutor, SearchOutcome, SearchPredicate, SearchRequest};
pub use sql_builder::{build_search_sql, quote_identifier};
