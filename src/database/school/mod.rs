//! School database storage
//!
//! The school database stores courses, students and the enrollments joining
//! them. Each table has its own repository borrowing the shared connection.

mod courses;
mod enrollments;
mod students;

pub use courses::{CourseRecord, CourseRepository};
pub use enrollments::{EnrollOutcome, EnrolledCourseName, EnrollmentRepository};
pub use students::{StudentRecord, StudentRepository};

use crate::database::core::{DatabaseConn, SchemaManager, SchemaStatus};
use anyhow::{anyhow, Result};
use tracing::info;

/// File name of the database inside the data directory
pub const DATABASE_FILE_NAME: &str = "escola-data.sqlite3";

/// Result of an insert guarded by a uniqueness rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    /// The row was inserted; carries the row as stored
    Inserted(T),
    /// Another row already holds the unique value
    Duplicate,
}

/// Result of an update by id guarded by a uniqueness rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    /// The row was written; carries the row as stored
    Written(T),
    /// No row matched the given id
    Missing,
    /// The write would break a uniqueness rule
    Duplicate,
}

/// Main school database (SQLite backend)
///
/// `SchoolDatabase` handles schema initialization and gives access to the
/// course, student and enrollment repositories.
pub struct SchoolDatabase {
    db: DatabaseConn,
}

impl SchoolDatabase {
    /// Open the school database at the specified path
    ///
    /// If the database doesn't exist, it will be created and initialized.
    /// A schema from another version or with missing tables is dropped and
    /// recreated.
    pub fn open(path: &str) -> Result<Self> {
        let db = DatabaseConn::open_path(path)?;
        let schema = SchemaManager::new(&db.conn);

        match schema.check_status()? {
            SchemaStatus::Current => {
                info!("School database schema is current");
            }
            SchemaStatus::NotInitialized => {
                info!("Initializing school database schema");
                schema.initialize()?;
            }
            SchemaStatus::NeedsMigration { from, to } => {
                info!("School database needs migration from v{} to v{}", from, to);
                schema.reset()?;
                schema.initialize()?;
            }
            SchemaStatus::Incompatible {
                database_version,
                required_version,
            } => {
                info!(
                    "School database schema incompatible (db: v{}, required: v{}), resetting",
                    database_version, required_version
                );
                schema.reset()?;
                schema.initialize()?;
            }
            SchemaStatus::Corrupted => {
                info!("School database schema corrupted, resetting");
                schema.reset()?;
                schema.initialize()?;
            }
        }

        Ok(Self { db })
    }

    /// Open the school database from a data directory
    ///
    /// Uses the standard file path: `{data_dir}/escola-data.sqlite3`
    pub fn open_in_dir(data_dir: &str) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| anyhow!("Failed to create data directory '{}': {}", data_dir, e))?;
        let path = format!("{}/{}", data_dir.trim_end_matches('/'), DATABASE_FILE_NAME);
        Self::open(&path)
    }

    /// Create an in-memory school database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let db = DatabaseConn::open_in_memory()?;
        SchemaManager::new(&db.conn).initialize()?;
        Ok(Self { db })
    }

    pub fn courses(&self) -> CourseRepository<'_> {
        CourseRepository::new(&self.db.conn)
    }

    pub fn students(&self) -> StudentRepository<'_> {
        StudentRepository::new(&self.db.conn)
    }

    pub fn enrollments(&self) -> EnrollmentRepository<'_> {
        EnrollmentRepository::new(&self.db.conn)
    }

    /// Delete every enrollment, student and course
    ///
    /// Identifier sequences restart, so the next course and student both get id 1.
    pub fn clear(&self) -> Result<()> {
        let tx = self.db.transaction()?;
        tx.execute("DELETE FROM matriculas", [])
            .map_err(|e| anyhow!("Failed to clear matriculas: {}", e))?;
        tx.execute("DELETE FROM alunos", [])
            .map_err(|e| anyhow!("Failed to clear alunos: {}", e))?;
        tx.execute("DELETE FROM cursos", [])
            .map_err(|e| anyhow!("Failed to clear cursos: {}", e))?;
        tx.execute(
            "DELETE FROM sqlite_sequence WHERE name IN ('alunos', 'cursos')",
            [],
        )
        .map_err(|e| anyhow!("Failed to reset id sequences: {}", e))?;
        tx.commit()
            .map_err(|e| anyhow!("Failed to commit transaction: {}", e))?;

        info!("School database cleared");
        Ok(())
    }
}
