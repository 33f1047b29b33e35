use crate::error::{ProbeError, Result};
use crate::executor::quote_identifier;
use crate::session::StorageEngine;
use tracing::debug;

const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table';";

// `PRAGMA table_info` returns (cid, name, type, notnull, dflt_value, pk).
const TABLE_INFO_NAME_FIELD: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub position: usize,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn number(&self) -> usize {
        self.position + 1
    }
}

pub struct CatalogReader<'a, E: StorageEngine> {
    engine: &'a E,
}

impl<'a, E: StorageEngine> CatalogReader<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    pub fn list_tables(&self) -> Result<Vec<String>> {
        let tables = self.read_names(LIST_TABLES_SQL, 0)?;
        debug!(count = tables.len(), "Listed tables");

        if tables.is_empty() {
            return Err(ProbeError::NoTables);
        }
        Ok(tables)
    }

    pub fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let sql = format!("PRAGMA table_info({});", quote_identifier(table));
        let columns: Vec<ColumnDescriptor> = self
            .read_names(&sql, TABLE_INFO_NAME_FIELD)?
            .into_iter()
            .enumerate()
            .map(|(position, name)| ColumnDescriptor::new(name, position))
            .collect();
        debug!(table = %table, count = columns.len(), "Listed columns");

        if columns.is_empty() {
            return Err(ProbeError::NoColumns);
        }
        Ok(columns)
    }

    fn read_names(&self, sql: &str, field: usize) -> Result<Vec<String>> {
        let mut names = Vec::new();
        self.engine
            .query(sql, &[], &mut |mut row| {
                if field < row.len() {
                    names.push(row.swap_remove(field).unwrap_or_default());
                }
                Ok(())
            })
            .map_err(|e| match e {
                ProbeError::Prepare(message) | ProbeError::Step(message) => {
                    ProbeError::Catalog(message)
                }
                other => other,
            })?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::testing::{text_row, MockEngine};
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn seeded_session(dir: &TempDir, ddl: &str) -> Session {
        let path = dir.path().join("c.db");
        Connection::open(&path).unwrap().execute_batch(ddl).unwrap();
        Session::open(&path).unwrap()
    }

    #[test]
    fn test_list_tables_in_declaration_order() {
        let dir = TempDir::new().unwrap();
        let session = seeded_session(&dir, "CREATE TABLE zeta (a); CREATE TABLE alpha (b);");

        let tables = CatalogReader::new(&session).list_tables().unwrap();

        assert_eq!(tables, vec!["zeta".to_string(), "alpha".to_string()]);
    }

    #[test]
    fn test_list_columns_reads_name_field() {
        let dir = TempDir::new().unwrap();
        let session = seeded_session(
            &dir,
            r#"CREATE TABLE "odd ""name""" (id INTEGER, "full name" TEXT, age);"#,
        );

        let columns = CatalogReader::new(&session)
            .list_columns(r#"odd "name""#)
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ColumnDescriptor::new("id", 0),
                ColumnDescriptor::new("full name", 1),
                ColumnDescriptor::new("age", 2),
            ]
        );
        assert_eq!(columns[2].number(), 3);
    }

    #[test]
    fn test_quoted_table_names_round_trip() {
        let dir = TempDir::new().unwrap();
        let names = ["plain", "with space", r#"q"uote"#, r#""""#, "semi;colon"];
        let ddl: String = names
            .iter()
            .map(|n| format!("CREATE TABLE {} (v);", quote_identifier(n)))
            .collect();
        let session = seeded_session(&dir, &ddl);

        let tables = CatalogReader::new(&session).list_tables().unwrap();

        assert_eq!(tables, names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_catalog_is_reported() {
        let engine = MockEngine::with_rows(vec![]);
        let reader = CatalogReader::new(&engine);

        assert!(matches!(reader.list_tables(), Err(ProbeError::NoTables)));
        assert!(matches!(
            reader.list_columns("people"),
            Err(ProbeError::NoColumns)
        ));
    }

    #[test]
    fn test_list_columns_quotes_table() {
        let engine = MockEngine::with_rows(vec![text_row(&["0", "id", "INTEGER", "0", "", "1"])]);

        CatalogReader::new(&engine)
            .list_columns(r#"a"b"#)
            .unwrap();

        assert_eq!(engine.calls()[0].sql, r#"PRAGMA table_info("a""b");"#);
    }

    #[test]
    fn test_engine_failure_becomes_catalog_error() {
        let engine = MockEngine::failing("file is not a database");

        let err = CatalogReader::new(&engine).list_tables().unwrap_err();

        assert!(matches!(err, ProbeError::Catalog(_)));
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Failed to read catalog: file is not a database"
        );
    }
}
