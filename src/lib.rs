pub mod catalog;
pub mod error;
pub mod executor;
pub mod render;
pub mod repl;
pub mod selection;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CatalogReader, ColumnDescriptor};
pub use error::{ProbeError, Result};
pub use executor::{
    build_search_sql, quote_identifier, ResultRow, SearchExecutor, SearchOutcome,
    SearchPredicate, SearchRequest,
};
pub use render::{render_columns, render_tables, RowRenderer, DEFAULT_LABEL_WIDTH};
pub use repl::{EditorReader, Explorer, LineReader, StreamReader};
pub use selection::{parse_field_selection, select_table, FieldSelection};
pub use session::{RawRow, Session, StorageEngine};
