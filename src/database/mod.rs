//! Database module
//!
//! This module provides all database functionality for escola, organized into:
//!
//! - **core**: Core database infrastructure (SQLite connections, schema management)
//! - **school**: The school database (courses, students, enrollments)
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/             # Foundation
//! │   ├── connection    # SQLite DatabaseConn wrapper
//! │   └── schema        # Schema definitions and management
//! │
//! └── school/           # Persistent storage
//!     ├── courses       # cursos
//!     ├── students      # alunos
//!     └── enrollments   # matriculas (student <-> course pairs)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use escola::database::SchoolDatabase;
//!
//! let db = SchoolDatabase::open_in_dir("~/.escola")?;
//!
//! db.courses().create("Algoritmos", "Curso de algoritmos básicos")?;
//! db.students().create("Carlos", "carlos@email.com")?;
//! db.enrollments().enroll(1, 1)?;
//!
//! let names = db.enrollments().course_names_for_student(1)?;
//! ```

pub mod core;
pub mod school;

pub use core::{
    DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, SCHEMA_VERSION, UNICODE_NOCASE,
};

pub use school::{
    CourseRecord, CourseRepository, EnrollOutcome, EnrolledCourseName, EnrollmentRepository,
    InsertOutcome, SchoolDatabase, StudentRecord, StudentRepository, WriteOutcome,
    DATABASE_FILE_NAME,
};
