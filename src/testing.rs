use crate::error::{ProbeError, Result};
use crate::session::{RawRow, StorageEngine};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// Engine double that replays canned rows and records every query it sees.
#[derive(Default)]
pub struct MockEngine {
    rows: Vec<RawRow>,
    prepare_error: Option<String>,
    calls: RefCell<Vec<RecordedQuery>>,
}

impl MockEngine {
    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            prepare_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.borrow().clone()
    }
}

impl StorageEngine for MockEngine {
    fn query(
        &self,
        sql: &str,
        params: &[&str],
        on_row: &mut dyn FnMut(RawRow) -> Result<()>,
    ) -> Result<()> {
        self.calls.borrow_mut().push(RecordedQuery {
            sql: sql.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        });

        if let Some(message) = &self.prepare_error {
            return Err(ProbeError::Prepare(message.clone()));
        }

        for row in &self.rows {
            on_row(row.clone())?;
        }
        Ok(())
    }
}

pub fn text_row(cells: &[&str]) -> RawRow {
    cells.iter().map(|c| Some(c.to_string())).collect()
}
