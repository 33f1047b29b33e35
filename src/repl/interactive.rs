use super::reader::LineReader;
use crate::catalog::{CatalogReader, ColumnDescriptor};
use crate::error::Result;
use crate::executor::{SearchExecutor, SearchOutcome};
use crate::render::{render_columns, render_tables, RowRenderer};
use crate::selection::{select_table, FieldSelection};
use crate::session::{Session, StorageEngine};
use std::io::Write;
use tracing::{info, warn};

const DB_PATH_PROMPT: &str = "Enter path to your .db file: ";
const TABLE_PROMPT: &str = "Select a table by number: ";
const FIELDS_PROMPT: &str =
    "Select field/fields to search by data (separated by spaces or commas), e.g. '1' or '3 4' : ";
const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Drives one operator session. Fatal conditions come back as errors; a
/// search that fails to run is reported on `diag` and the session finishes
/// normally.
pub struct Explorer<R: LineReader, O: Write, D: Write> {
    reader: R,
    out: O,
    diag: D,
    renderer: RowRenderer,
}

impl<R: LineReader, O: Write, D: Write> Explorer<R, O, D> {
    pub fn new(reader: R, out: O, diag: D) -> Self {
        Self {
            reader,
            out,
            diag,
            renderer: RowRenderer::new(),
        }
    }

    pub fn into_parts(self) -> (R, O, D) {
        (self.reader, self.out, self.diag)
    }

    pub fn run(&mut self) -> Result<SearchOutcome> {
        let path = self.prompt(DB_PATH_PROMPT)?;
        let session = Session::open(&path)?;

        let outcome = self.run_on(&session)?;

        session.close()?;
        Ok(outcome)
    }

    /// Everything after the database is open, ending with the exit pause.
    pub fn run_on<E: StorageEngine>(&mut self, engine: &E) -> Result<SearchOutcome> {
        let outcome = self.explore(engine)?;
        self.prompt(EXIT_PROMPT)?;
        Ok(outcome)
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.out.flush()?;
        self.reader.read_line(text)
    }

    fn explore<E: StorageEngine>(&mut self, engine: &E) -> Result<SearchOutcome> {
        let catalog = CatalogReader::new(engine);

        let tables = catalog.list_tables()?;
        render_tables(&mut self.out, &tables)?;

        let choice = self.prompt(TABLE_PROMPT)?;
        let table = select_table(&tables, &choice)?.to_string();

        let columns = catalog.list_columns(&table)?;
        render_columns(&mut self.out, &table, &columns)?;

        let selection_line = self.prompt(FIELDS_PROMPT)?;
        let selection = FieldSelection::parse(&selection_line, columns.len())?;

        let mut fields = Vec::with_capacity(selection.len());
        let mut values = Vec::with_capacity(selection.len());
        for column in selection.resolve(&columns) {
            let question = format!("Enter value to search for in field '{}': ", column.name);
            values.push(self.prompt(&question)?);
            fields.push(column.name.clone());
        }

        info!(table = %table, fields = fields.len(), "Searching");
        self.search(engine, &table, fields, values, &columns)
    }

    fn search<E: StorageEngine>(
        &mut self,
        engine: &E,
        table: &str,
        fields: Vec<String>,
        values: Vec<String>,
        columns: &[ColumnDescriptor],
    ) -> Result<SearchOutcome> {
        let renderer = self.renderer;
        let out = &mut self.out;

        let result = SearchExecutor::new(engine).search(table, fields, values, columns, |row| {
            renderer.render_row(out, row)?;
            Ok(())
        });

        match result {
            Ok(SearchOutcome::NoMatches) => {
                renderer.render_no_matches(&mut self.out)?;
                Ok(SearchOutcome::NoMatches)
            }
            Ok(outcome) => Ok(outcome),
            Err(e) if !e.is_fatal() => {
                warn!(table = %table, error = %e, "Search aborted");
                writeln!(self.diag, " {}", e)?;
                Ok(SearchOutcome::Aborted)
            }
            Err(e) => Err(e),
        }
    }
}
