//! Enrollment repository
//!
//! Data access operations for the `matriculas` join table.

use crate::database::core::{immediate_transaction, is_unique_violation};
use anyhow::{anyhow, Result};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

/// Repository for enrollment operations
pub struct EnrollmentRepository<'a> {
    conn: &'a Connection,
}

/// One enrollment joined with the name of its course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledCourseName {
    pub student_id: i64,
    pub course_id: i64,
    pub course_name: String,
}

/// Result of an enroll attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    StudentNotFound,
    CourseNotFound,
    AlreadyEnrolled,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM matriculas", [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to count enrollments: {}", e))
    }

    /// Check whether the (student, course) pair is enrolled
    pub fn exists(&self, student_id: i64, course_id: i64) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM matriculas WHERE aluno_id = ?1 AND curso_id = ?2",
                [student_id, course_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| anyhow!("Failed to check enrollment: {}", e))?;
        Ok(found.is_some())
    }

    /// Enroll a student in a course
    ///
    /// Student existence, course existence and pair uniqueness are checked in
    /// that order inside one immediate transaction, so the first failing
    /// check decides the outcome and nothing is written on failure.
    pub fn enroll(&self, student_id: i64, course_id: i64) -> Result<EnrollOutcome> {
        let tx = immediate_transaction(self.conn)?;

        let student: Option<i64> = tx
            .query_row("SELECT id FROM alunos WHERE id = ?1", [student_id], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| anyhow!("Failed to look up student {}: {}", student_id, e))?;
        if student.is_none() {
            return Ok(EnrollOutcome::StudentNotFound);
        }

        let course: Option<i64> = tx
            .query_row("SELECT id FROM cursos WHERE id = ?1", [course_id], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| anyhow!("Failed to look up course {}: {}", course_id, e))?;
        if course.is_none() {
            return Ok(EnrollOutcome::CourseNotFound);
        }

        if self.exists(student_id, course_id)? {
            debug!(
                "student {} already enrolled in course {}",
                student_id, course_id
            );
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }

        match tx.execute(
            "INSERT INTO matriculas (aluno_id, curso_id) VALUES (?1, ?2)",
            [student_id, course_id],
        ) {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => return Ok(EnrollOutcome::AlreadyEnrolled),
            Err(e) => return Err(anyhow!("Failed to insert enrollment: {}", e)),
        }

        tx.commit()
            .map_err(|e| anyhow!("Failed to commit transaction: {}", e))?;
        Ok(EnrollOutcome::Enrolled)
    }

    /// Remove an enrollment, returning whether a row was removed
    pub fn unenroll(&self, student_id: i64, course_id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM matriculas WHERE aluno_id = ?1 AND curso_id = ?2",
                [student_id, course_id],
            )
            .map_err(|e| anyhow!("Failed to delete enrollment: {}", e))?;
        Ok(removed > 0)
    }

    /// All enrollments joined with their course names
    pub fn course_names(&self) -> Result<Vec<EnrolledCourseName>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.aluno_id, c.id, c.nome
             FROM matriculas m
             JOIN cursos c ON m.curso_id = c.id
             ORDER BY m.aluno_id, c.id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(EnrolledCourseName {
                    student_id: row.get(0)?,
                    course_id: row.get(1)?,
                    course_name: row.get(2)?,
                })
            })
            .map_err(|e| anyhow!("Failed to list enrollments: {}", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| anyhow!("Failed to read enrollment row: {}", e))
    }

    /// Course names a single student is enrolled in, ordered by course id
    pub fn course_names_for_student(&self, student_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.nome
             FROM matriculas m
             JOIN cursos c ON m.curso_id = c.id
             WHERE m.aluno_id = ?1
             ORDER BY c.id",
        )?;

        let rows = stmt
            .query_map([student_id], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to list enrollments of {}: {}", student_id, e))?;

        rows.collect::<rusqlite::Result<Vec<String>>>()
            .map_err(|e| anyhow!("Failed to read enrollment row: {}", e))
    }
}
