use crate::catalog::ColumnDescriptor;
use crate::executor::ResultRow;
use std::io::{self, Write};

pub const DEFAULT_LABEL_WIDTH: usize = 15;
const DELIMITER: &str = "_____________________________";

/// Writes matching rows as label/value blocks.
#[derive(Debug, Clone, Copy)]
pub struct RowRenderer {
    label_width: usize,
}

impl RowRenderer {
    pub fn new() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }

    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn render_row<W: Write>(&self, out: &mut W, row: &ResultRow) -> io::Result<()> {
        write!(out, "\n Match found:\n\n")?;
        writeln!(out, "{}", DELIMITER)?;
        for (label, value) in &row.cells {
            writeln!(
                out,
                "{:<width$}: {}",
                label,
                value,
                width = self.label_width
            )?;
        }
        writeln!(out, "{}", DELIMITER)
    }

    pub fn render_no_matches<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, " No matching records found.")
    }
}

impl Default for RowRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_tables<W: Write>(out: &mut W, tables: &[String]) -> io::Result<()> {
    writeln!(out, "Tables found:")?;
    for (i, table) in tables.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, table)?;
    }
    Ok(())
}

pub fn render_columns<W: Write>(
    out: &mut W,
    table: &str,
    columns: &[ColumnDescriptor],
) -> io::Result<()> {
    writeln!(out, "Fields in table '{}':", table)?;
    for col in columns {
        writeln!(out, "{}: {}", col.number(), col.name)?;
    }
    Ok(())
}
