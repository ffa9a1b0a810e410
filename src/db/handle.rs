//! Database handle: one embedded connection, one execution cursor, raw
//! update/query passthrough.
//!
//! Failure policy: every public operation degrades to a sentinel value
//! (`-1`, `None`, absent connection) instead of surfacing a structured
//! error. Internals return [`StoreResult`] and the translation happens
//! here, at the public surface. Update failures and per-statement
//! bootstrap failures are reported on the console; query failures and
//! connection failures are silent.

use rusqlite::Connection;
use rusqlite::types::Value;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::Config;
use crate::db::bootstrap;
use crate::errors::{StoreError, StoreResult};
use crate::ui::messages;
use crate::utils::path::{ensure_parent_dir, expand_tilde};

/// Execution cursor bound to an open connection.
///
/// Exists only while its connection does; dropped by [`Database::close`].
pub struct Cursor {
    conn: Rc<Connection>,
}

impl Cursor {
    fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    /// Execute a statement that alters the database, returning the number
    /// of affected rows.
    fn run_update(&self, sql: &str) -> StoreResult<usize> {
        if sql.trim().is_empty() {
            return Err(StoreError::EmptyStatement);
        }
        Ok(self.conn.execute(sql, [])?)
    }

    /// Execute a read statement, collecting the full result table.
    fn run_query(&self, sql: &str) -> StoreResult<ResultSet> {
        if sql.trim().is_empty() {
            return Err(StoreError::EmptyStatement);
        }
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let ncols = columns.len();

        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Vec::with_capacity(ncols);
            for i in 0..ncols {
                record.push(row.get::<_, Value>(i)?);
            }
            data.push(record);
        }
        Ok(ResultSet {
            columns,
            rows: data,
        })
    }

    fn table_count(&self) -> StoreResult<i64> {
        let count = self
            .conn
            .query_row(bootstrap::TABLE_COUNT_SQL, [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Owned tabular result of a read query.
///
/// The caller owns the data outright; nothing is retained by the handle,
/// so a result stays readable after [`Database::close`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at (row index, column name), when both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Lifecycle wrapper around a single embedded SQLite database file.
///
/// At most one connection and one cursor are live per handle. Both are
/// re-established lazily by [`Database::execute_update`] and
/// [`Database::query`] after a [`Database::close`], always against the
/// path the handle was constructed with. Single-threaded: the cursor
/// holds an `Rc` clone of the connection, so the handle is neither `Send`
/// nor `Sync`.
pub struct Database {
    path: PathBuf,
    conn: Option<Rc<Connection>>,
    cursor: Option<Cursor>,
}

impl Database {
    /// Open the database at the configured default location and bootstrap
    /// the schema if the table catalog is empty.
    pub fn new() -> Self {
        let cfg = Config::load();
        Self::open(expand_tilde(&cfg.database))
    }

    /// Open the database at an explicit location, with the same lifecycle
    /// as [`Database::new`].
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut db = Self {
            path: path.as_ref().to_path_buf(),
            conn: None,
            cursor: None,
        };
        db.connect();
        db.prepare_cursor();
        db.bootstrap_if_empty();
        db
    }

    /// True when a connection is held.
    pub fn has_connection(&self) -> bool {
        self.conn.is_some()
    }

    /// True when an execution cursor is held.
    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    /// Open the connection if none is held.
    ///
    /// Failure is swallowed: the handle simply stays disconnected, which
    /// is observable via [`Database::has_connection`].
    pub fn connect(&mut self) {
        if self.has_connection() {
            return;
        }
        ensure_parent_dir(&self.path).ok();
        self.conn = Connection::open(&self.path).map(Rc::new).ok();
    }

    /// Bind a cursor to the current connection.
    ///
    /// No-op without a connection, or when a cursor is already held.
    pub fn prepare_cursor(&mut self) {
        if !self.has_connection() || self.has_cursor() {
            return;
        }
        self.cursor = self.conn.as_ref().map(|conn| Cursor::new(conn.clone()));
    }

    /// Execute a statement that alters the database (`CREATE`, `INSERT`,
    /// `UPDATE`, `DELETE`, `DROP`, ...), re-establishing the connection
    /// and cursor first if either is missing.
    ///
    /// Returns the affected-row count, or `-1` after reporting the error
    /// on the console. Driver errors never propagate to the caller.
    pub fn execute_update(&mut self, sql: &str) -> i64 {
        let outcome = self
            .ensure_ready()
            .and_then(|cursor| cursor.run_update(sql));
        match outcome {
            Ok(n) => n as i64,
            Err(e) => {
                messages::error(format!("Update failed: {e}"));
                -1
            }
        }
    }

    /// Execute a read statement, re-establishing the connection and cursor
    /// first if either is missing.
    ///
    /// Returns the full result table, or `None` when the statement fails.
    /// Query failures are silent.
    pub fn query(&mut self, sql: &str) -> Option<ResultSet> {
        self.ensure_ready()
            .and_then(|cursor| cursor.run_query(sql))
            .ok()
    }

    /// Release the cursor and the connection.
    ///
    /// Idempotent: safe on a never-opened handle and safe to call
    /// repeatedly. Close failures are ignored.
    pub fn close(&mut self) {
        self.cursor = None;
        if let Some(conn) = self.conn.take()
            && let Ok(conn) = Rc::try_unwrap(conn)
        {
            conn.close().ok();
        }
    }

    fn ensure_ready(&mut self) -> StoreResult<&Cursor> {
        if !self.has_connection() {
            self.connect();
        }
        if !self.has_cursor() {
            self.prepare_cursor();
        }
        self.cursor.as_ref().ok_or(StoreError::NoConnection)
    }

    /// Bootstrap the schema when the table catalog is empty.
    ///
    /// Runs the bundled script statement by statement, best-effort: a
    /// failed statement is reported on the console and the remaining ones
    /// still run. A failed catalog probe is reported and tears the handle
    /// down to the disconnected state.
    fn bootstrap_if_empty(&mut self) {
        let count = self.ensure_ready().and_then(|cursor| cursor.table_count());
        match count {
            Ok(0) => self.run_schema_script(),
            Ok(_) => {}
            Err(e) => {
                messages::error(format!("Catalog probe failed: {e}"));
                self.close();
            }
        }
    }

    fn run_schema_script(&mut self) {
        messages::info("Empty database detected, applying bundled schema...");
        for statement in bootstrap::split_statements(bootstrap::SCHEMA) {
            if self.execute_update(&statement) < 0 {
                messages::error(format!("Error in schema statement: {statement}"));
            }
        }
        messages::success("Schema bootstrap complete.");
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
