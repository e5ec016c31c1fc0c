//! Database schema management
//!
//! This module provides schema definitions and management for the school database.
//! Uniqueness of course names, student emails and enrollment pairs is declared
//! here so that it holds even when two writers race past the application checks.
//! Course names and emails compare under the `UNICODE_NOCASE` collation, which
//! [`DatabaseConn`](super::DatabaseConn) registers on every connection it opens.

use anyhow::{anyhow, Result};
use rusqlite::Connection;

/// Current schema version
/// Increment this when making breaking schema changes
pub const SCHEMA_VERSION: u32 = 2;

/// Schema definitions for all tables in the school database
pub struct SchemaDefinitions;

impl SchemaDefinitions {
    /// SQL for creating the meta table (tracks schema version)
    pub const META_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS escola_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );
    "#;

    pub const COURSES_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS cursos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL UNIQUE COLLATE UNICODE_NOCASE,
            descricao TEXT NOT NULL
        );
    "#;

    pub const STUDENTS_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS alunos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE COLLATE UNICODE_NOCASE
        );
    "#;

    /// Enrollment pairs; rows go away with their student or course
    pub const ENROLLMENTS_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS matriculas (
            aluno_id INTEGER NOT NULL REFERENCES alunos(id) ON DELETE CASCADE,
            curso_id INTEGER NOT NULL REFERENCES cursos(id) ON DELETE CASCADE,
            PRIMARY KEY (aluno_id, curso_id)
        );
    "#;

    pub const ENROLLMENT_INDEXES: &'static [&'static str] =
        &["CREATE INDEX IF NOT EXISTS idx_matriculas_curso_id ON matriculas(curso_id)"];

    /// Tables that must exist for the schema to be considered intact
    pub const REQUIRED_TABLES: &'static [&'static str] =
        &["escola_meta", "cursos", "alunos", "matriculas"];
}

/// Schema manager for the school database
///
/// Handles schema initialization, version checking, and reset.
pub struct SchemaManager<'a> {
    conn: &'a Connection,
}

impl<'a> SchemaManager<'a> {
    /// Create a new schema manager for the given connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Initialize the database schema
    ///
    /// Creates all tables and indexes if they don't exist and records
    /// the schema version in the meta table.
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute(SchemaDefinitions::META_TABLE, [])
            .map_err(|e| anyhow!("Failed to create meta table: {}", e))?;

        self.set_meta("schema_version", &SCHEMA_VERSION.to_string())?;

        self.conn
            .execute(SchemaDefinitions::COURSES_TABLE, [])
            .map_err(|e| anyhow!("Failed to create cursos table: {}", e))?;

        self.conn
            .execute(SchemaDefinitions::STUDENTS_TABLE, [])
            .map_err(|e| anyhow!("Failed to create alunos table: {}", e))?;

        self.conn
            .execute(SchemaDefinitions::ENROLLMENTS_TABLE, [])
            .map_err(|e| anyhow!("Failed to create matriculas table: {}", e))?;

        for index_sql in SchemaDefinitions::ENROLLMENT_INDEXES {
            self.conn
                .execute(index_sql, [])
                .map_err(|e| anyhow!("Failed to create enrollment index: {}", e))?;
        }

        Ok(())
    }

    /// Check the current schema status
    pub fn check_status(&self) -> Result<SchemaStatus> {
        if !self.table_exists("escola_meta")? {
            return Ok(SchemaStatus::NotInitialized);
        }

        let current_version = self.get_schema_version()?;

        if current_version == SCHEMA_VERSION {
            if self.verify_integrity()? {
                Ok(SchemaStatus::Current)
            } else {
                Ok(SchemaStatus::Corrupted)
            }
        } else if current_version < SCHEMA_VERSION {
            Ok(SchemaStatus::NeedsMigration {
                from: current_version,
                to: SCHEMA_VERSION,
            })
        } else {
            Ok(SchemaStatus::Incompatible {
                database_version: current_version,
                required_version: SCHEMA_VERSION,
            })
        }
    }

    /// Get the current schema version from the database
    pub fn get_schema_version(&self) -> Result<u32> {
        let version = self
            .get_meta("schema_version")?
            .unwrap_or_else(|| "0".to_string());

        version
            .parse()
            .map_err(|e| anyhow!("Invalid schema version: {}", e))
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        let exists: i32 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .map_err(|e| anyhow!("Failed to inspect sqlite_master: {}", e))?;
        Ok(exists > 0)
    }

    /// Verify schema integrity by checking required tables exist
    fn verify_integrity(&self) -> Result<bool> {
        for table in SchemaDefinitions::REQUIRED_TABLES {
            if !self.table_exists(table)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Set a metadata value
    pub fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO escola_meta (key, value, updated_at) VALUES (?1, ?2, strftime('%s', 'now'))",
                [key, value],
            )
            .map_err(|e| anyhow!("Failed to set meta value: {}", e))?;
        Ok(())
    }

    /// Get a metadata value
    pub fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let result: Result<String, _> = self.conn.query_row(
            "SELECT value FROM escola_meta WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(anyhow!("Failed to get meta value: {}", e)),
        }
    }

    /// Reset the database by dropping all tables
    pub fn reset(&self) -> Result<()> {
        // Children first so foreign keys never dangle
        self.conn.execute("DROP TABLE IF EXISTS matriculas", [])?;
        self.conn.execute("DROP TABLE IF EXISTS alunos", [])?;
        self.conn.execute("DROP TABLE IF EXISTS cursos", [])?;
        self.conn.execute("DROP TABLE IF EXISTS escola_meta", [])?;

        Ok(())
    }
}

/// Status of the database schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Database is not initialized (fresh database)
    NotInitialized,

    /// Schema is current and valid
    Current,

    /// Schema needs migration from an older version
    NeedsMigration { from: u32, to: u32 },

    /// Database is from a newer version (incompatible)
    Incompatible {
        database_version: u32,
        required_version: u32,
    },

    /// Schema is corrupted (missing tables)
    Corrupted,
}
