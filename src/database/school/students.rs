//! Student repository
//!
//! Data access operations for the `alunos` table.

use crate::database::core::{immediate_transaction, is_unique_violation};
use crate::database::school::{InsertOutcome, WriteOutcome};
use anyhow::{anyhow, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

/// Repository for student operations
pub struct StudentRepository<'a> {
    conn: &'a Connection,
}

/// A student row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl StudentRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(StudentRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}

impl<'a> StudentRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM alunos", [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to count students: {}", e))
    }

    /// List all students ordered by id
    pub fn list(&self) -> Result<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nome, email FROM alunos ORDER BY id")?;

        let rows = stmt
            .query_map([], StudentRecord::from_row)
            .map_err(|e| anyhow!("Failed to list students: {}", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| anyhow!("Failed to read student row: {}", e))
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<StudentRecord>> {
        self.conn
            .query_row(
                "SELECT id, nome, email FROM alunos WHERE id = ?1",
                [id],
                StudentRecord::from_row,
            )
            .optional()
            .map_err(|e| anyhow!("Failed to find student {}: {}", id, e))
    }

    /// Find a student by email, ignoring case (accented letters included)
    pub fn find_by_email(&self, email: &str) -> Result<Option<StudentRecord>> {
        self.conn
            .query_row(
                "SELECT id, nome, email FROM alunos WHERE email = ?1 COLLATE UNICODE_NOCASE",
                [email],
                StudentRecord::from_row,
            )
            .optional()
            .map_err(|e| anyhow!("Failed to find student by email: {}", e))
    }

    /// Insert a student unless the email (ignoring case) is already registered
    pub fn create(&self, name: &str, email: &str) -> Result<InsertOutcome<StudentRecord>> {
        let tx = immediate_transaction(self.conn)?;

        if let Some(existing) = self.find_by_email(email)? {
            debug!(
                "email '{}' already registered to student {}",
                email, existing.id
            );
            return Ok(InsertOutcome::Duplicate);
        }

        let inserted = tx.query_row(
            "INSERT INTO alunos (nome, email) VALUES (?1, ?2) RETURNING id, nome, email",
            [name, email],
            StudentRecord::from_row,
        );

        match inserted {
            Ok(student) => {
                tx.commit()
                    .map_err(|e| anyhow!("Failed to commit transaction: {}", e))?;
                Ok(InsertOutcome::Inserted(student))
            }
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(anyhow!("Failed to insert student: {}", e)),
        }
    }

    pub fn update(&self, id: i64, name: &str, email: &str) -> Result<WriteOutcome<StudentRecord>> {
        let updated = self
            .conn
            .query_row(
                "UPDATE alunos SET nome = ?1, email = ?2 WHERE id = ?3 RETURNING id, nome, email",
                rusqlite::params![name, email, id],
                StudentRecord::from_row,
            )
            .optional();

        match updated {
            Ok(Some(student)) => Ok(WriteOutcome::Written(student)),
            Ok(None) => Ok(WriteOutcome::Missing),
            Err(e) if is_unique_violation(&e) => Ok(WriteOutcome::Duplicate),
            Err(e) => Err(anyhow!("Failed to update student {}: {}", id, e)),
        }
    }

    /// Delete a student by id, returning whether a row was removed
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM alunos WHERE id = ?1", [id])
            .map_err(|e| anyhow!("Failed to delete student {}: {}", id, e))?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::core::{DatabaseConn, SchemaManager};

    fn setup_test_db() -> DatabaseConn {
        let db = DatabaseConn::open_in_memory().unwrap();
        SchemaManager::new(&db.conn).initialize().unwrap();
        db
    }

    #[test]
    fn test_create_and_find() {
        let db = setup_test_db();
        let repo = StudentRepository::new(&db.conn);

        let student = match repo.create("João", "joao@email.com").unwrap() {
            InsertOutcome::Inserted(s) => s,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(student.id, 1);
        assert_eq!(repo.find_by_id(1).unwrap(), Some(student.clone()));
        assert_eq!(
            repo.find_by_email("JOAO@email.com").unwrap(),
            Some(student)
        );
    }

    #[test]
    fn test_duplicate_email() {
        let db = setup_test_db();
        let repo = StudentRepository::new(&db.conn);

        repo.create("João", "joao@email.com").unwrap();
        assert_eq!(
            repo.create("Outro", "Joao@Email.com").unwrap(),
            InsertOutcome::Duplicate
        );
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_accented_email() {
        let db = setup_test_db();
        let repo = StudentRepository::new(&db.conn);

        repo.create("João", "joão@x.com").unwrap();
        assert_eq!(
            repo.create("Outro", "JOÃO@x.com").unwrap(),
            InsertOutcome::Duplicate
        );

        repo.create("Maria", "maria@x.com").unwrap();
        assert_eq!(
            repo.update(2, "Maria", "João@X.com").unwrap(),
            WriteOutcome::Duplicate
        );
        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(
            repo.find_by_email("JOÃO@X.COM").unwrap().map(|s| s.id),
            Some(1)
        );
    }

    #[test]
    fn test_update_and_delete() {
        let db = setup_test_db();
        let repo = StudentRepository::new(&db.conn);
        repo.create("João", "joao@email.com").unwrap();
        repo.create("Maria", "maria@email.com").unwrap();

        match repo.update(1, "João Atualizado", "joao@email.com").unwrap() {
            WriteOutcome::Written(s) => assert_eq!(s.name, "João Atualizado"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(
            repo.update(1, "João", "maria@email.com").unwrap(),
            WriteOutcome::Duplicate
        );
        assert_eq!(
            repo.update(42, "x", "x@x.com").unwrap(),
            WriteOutcome::Missing
        );

        assert!(repo.delete(1).unwrap());
        assert!(!repo.delete(1).unwrap());
        assert_eq!(
            repo.list().unwrap().iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![2]
        );
    }
}
