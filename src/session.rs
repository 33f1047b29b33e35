use crate::error::{ProbeError, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub type RawRow = Vec<Option<String>>;

/// Prepares `sql`, binds `params` to the `?` slots in order and hands every
/// row to `on_row` as one text-or-null cell per result column.
pub trait StorageEngine {
    fn query(
        &self,
        sql: &str,
        params: &[&str],
        on_row: &mut dyn FnMut(RawRow) -> Result<()>,
    ) -> Result<()>;
}

// Dropping the session closes the connection.
pub struct Session {
    conn: Connection,
    path: PathBuf,
}

impl Session {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| ProbeError::Open(e.to_string()))?;
        info!(path = %path.display(), "Opened database");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| ProbeError::Close(e.to_string()))?;
        info!(path = %path.display(), "Closed database");
        Ok(())
    }
}

impl StorageEngine for Session {
    fn query(
        &self,
        sql: &str,
        params: &[&str],
        on_row: &mut dyn FnMut(RawRow) -> Result<()>,
    ) -> Result<()> {
        debug!(sql = %sql, params = params.len(), "Preparing statement");

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| ProbeError::Prepare(e.to_string()))?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| ProbeError::Prepare(e.to_string()))?;

        while let Some(row) = rows.next().map_err(|e| ProbeError::Step(e.to_string()))? {
            let mut cells = Vec::with_capacity(width);
            for idx in 0..width {
                let value = row
                    .get_ref(idx)
                    .map_err(|e| ProbeError::Step(e.to_string()))?;
                cells.push(value_text(value));
            }
            on_row(cells)?;
        }

        Ok(())
    }
}

fn value_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(real_text(f)),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

// Same text as SQLite's `%!.15g`: 15 significant digits, exponent form
// outside 1e-4..1e15, and always a fractional part.
fn real_text(f: f64) -> String {
    if f.is_infinite() {
        return if f > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:.14e}", f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..15).contains(&exp) {
        with_fraction(&format!("{:.*}", (14 - exp) as usize, f))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", with_fraction(mantissa), sign, exp.abs())
    }
}

fn with_fraction(digits: &str) -> String {
    if !digits.contains('.') {
        return format!("{}.0", digits);
    }
    let trimmed = digits.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
