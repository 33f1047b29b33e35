use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Can't open database: {0}")]
    Open(String),

    #[error("Failed to prepare statement: {0}")]
    Prepare(String),

    #[error("Failed to read result row: {0}")]
    Step(String),

    #[error("Failed to read catalog: {0}")]
    Catalog(String),

    #[error("No tables found in the database.")]
    NoTables,

    #[error("Invalid table selection.")]
    InvalidTableSelection,

    #[error("No columns found in the table.")]
    NoColumns,

    #[error("No valid fields selected.")]
    NoFieldsSelected,

    #[error("Invalid search input.")]
    InvalidSearchInput,

    #[error("Failed to close database: {0}")]
    Close(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Fatal errors end the session with a nonzero exit code. Statement and
    /// row failures raised while searching only abort that search.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ProbeError::Prepare(_) | ProbeError::Step(_))
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
