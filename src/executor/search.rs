use super::sql_builder::build_search_sql;
use crate::catalog::ColumnDescriptor;
use crate::error::{ProbeError, Result};
use crate::session::{RawRow, StorageEngine};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    table: String,
    predicates: Vec<SearchPredicate>,
}

impl SearchRequest {
    pub fn new(
        table: impl Into<String>,
        fields: Vec<String>,
        values: Vec<String>,
    ) -> Result<Self> {
        if fields.is_empty() || fields.len() != values.len() {
            return Err(ProbeError::InvalidSearchInput);
        }

        let predicates = fields
            .into_iter()
            .zip(values)
            .map(|(column, value)| SearchPredicate { column, value })
            .collect();

        Ok(Self {
            table: table.into(),
            predicates,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn predicates(&self) -> &[SearchPredicate] {
        &self.predicates
    }

    pub fn sql(&self) -> String {
        let fields: Vec<&str> = self.predicates.iter().map(|p| p.column.as_str()).collect();
        build_search_sql(&self.table, &fields)
    }

    fn params(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.value.as_str()).collect()
    }
}

/// Every column of a matching row, labelled in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub cells: Vec<(String, String)>,
}

impl ResultRow {
    fn from_raw(columns: &[ColumnDescriptor], raw: RawRow) -> Self {
        let mut values = raw.into_iter();
        let cells = columns
            .iter()
            .map(|col| {
                let value = values.next().flatten().unwrap_or_default();
                (col.name.clone(), value)
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Matched(usize),
    NoMatches,
    Aborted,
}

pub struct SearchExecutor<'a, E: StorageEngine> {
    engine: &'a E,
}

impl<'a, E: StorageEngine> SearchExecutor<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    pub fn search<F>(
        &self,
        table: &str,
        fields: Vec<String>,
        values: Vec<String>,
        columns: &[ColumnDescriptor],
        on_row: F,
    ) -> Result<SearchOutcome>
    where
        F: FnMut(&ResultRow) -> Result<()>,
    {
        let request = SearchRequest::new(table, fields, values)?;
        self.execute(&request, columns, on_row)
    }

    pub fn execute<F>(
        &self,
        request: &SearchRequest,
        columns: &[ColumnDescriptor],
        mut on_row: F,
    ) -> Result<SearchOutcome>
    where
        F: FnMut(&ResultRow) -> Result<()>,
    {
        let sql = request.sql();
        debug!(
            table = %request.table(),
            predicates = request.predicates().len(),
            sql = %sql,
            "Running search"
        );

        let mut matched = 0usize;
        self.engine
            .query(&sql, &request.params(), &mut |raw| {
                matched += 1;
                on_row(&ResultRow::from_raw(columns, raw))
            })
            .inspect_err(|e| debug!(table = %request.table(), error = %e, "Search failed"))?;

        if matched == 0 {
            Ok(SearchOutcome::NoMatches)
        } else {
            Ok(SearchOutcome::Matched(matched))
        }
    }
}
