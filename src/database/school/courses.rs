//! Course repository
//!
//! Data access operations for the `cursos` table.

use crate::database::core::{immediate_transaction, is_unique_violation};
use crate::database::school::{InsertOutcome, WriteOutcome};
use anyhow::{anyhow, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

/// Repository for course operations
pub struct CourseRepository<'a> {
    conn: &'a Connection,
}

/// A course row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

impl CourseRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CourseRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }
}

impl<'a> CourseRepository<'a> {
    /// Create a new course repository
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get the number of courses
    pub fn count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM cursos", [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to count courses: {}", e))
    }

    /// List all courses ordered by id
    pub fn list(&self) -> Result<Vec<CourseRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nome, descricao FROM cursos ORDER BY id")?;

        let rows = stmt
            .query_map([], CourseRecord::from_row)
            .map_err(|e| anyhow!("Failed to list courses: {}", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| anyhow!("Failed to read course row: {}", e))
    }

    /// Find a course by id
    pub fn find_by_id(&self, id: i64) -> Result<Option<CourseRecord>> {
        self.conn
            .query_row(
                "SELECT id, nome, descricao FROM cursos WHERE id = ?1",
                [id],
                CourseRecord::from_row,
            )
            .optional()
            .map_err(|e| anyhow!("Failed to find course {}: {}", id, e))
    }

    /// Find a course by name, ignoring case (accented letters included)
    pub fn find_by_name(&self, name: &str) -> Result<Option<CourseRecord>> {
        self.conn
            .query_row(
                "SELECT id, nome, descricao FROM cursos WHERE nome = ?1 COLLATE UNICODE_NOCASE",
                [name],
                CourseRecord::from_row,
            )
            .optional()
            .map_err(|e| anyhow!("Failed to find course by name: {}", e))
    }

    /// Insert a course unless one with the same name (ignoring case) exists
    ///
    /// The lookup and the insert share one immediate transaction; the
    /// unique constraint on `nome` backs the lookup up.
    pub fn create(&self, name: &str, description: &str) -> Result<InsertOutcome<CourseRecord>> {
        let tx = immediate_transaction(self.conn)?;

        if let Some(existing) = self.find_by_name(name)? {
            debug!(
                "course name '{}' already taken by course {}",
                name, existing.id
            );
            return Ok(InsertOutcome::Duplicate);
        }

        let inserted = tx.query_row(
            "INSERT INTO cursos (nome, descricao) VALUES (?1, ?2) RETURNING id, nome, descricao",
            [name, description],
            CourseRecord::from_row,
        );

        match inserted {
            Ok(course) => {
                tx.commit()
                    .map_err(|e| anyhow!("Failed to commit transaction: {}", e))?;
                Ok(InsertOutcome::Inserted(course))
            }
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(anyhow!("Failed to insert course: {}", e)),
        }
    }

    /// Replace the name and description of a course
    pub fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<WriteOutcome<CourseRecord>> {
        let updated = self
            .conn
            .query_row(
                "UPDATE cursos SET nome = ?1, descricao = ?2 WHERE id = ?3 RETURNING id, nome, descricao",
                rusqlite::params![name, description, id],
                CourseRecord::from_row,
            )
            .optional();

        match updated {
            Ok(Some(course)) => Ok(WriteOutcome::Written(course)),
            Ok(None) => Ok(WriteOutcome::Missing),
            Err(e) if is_unique_violation(&e) => Ok(WriteOutcome::Duplicate),
            Err(e) => Err(anyhow!("Failed to update course {}: {}", id, e)),
        }
    }

    /// Delete a course by id, returning whether a row was removed
    ///
    /// Enrollments in the course are removed by the foreign key cascade.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM cursos WHERE id = ?1", [id])
            .map_err(|e| anyhow!("Failed to delete course {}: {}", id, e))?;
        Ok(removed > 0)
    }
}
