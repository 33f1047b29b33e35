mod reader;

pub use reader::{CatalogReader, ColumnDescriptor};
