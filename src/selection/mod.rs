mod parser;

pub use parser::{parse_field_selection, select_table, FieldSelection};
