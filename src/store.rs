//! Store access abstraction
//!
//! Request handlers never reach for a global connection. They receive an
//! [`EnrollmentStore`] through the [`EnrollmentDirectory`](crate::directory::EnrollmentDirectory),
//! which makes it possible to swap in a test double without a live database.
//!
//! [`SqliteStore`] is the production implementation. It owns a single
//! [`SchoolDatabase`] behind a mutex; every method locks, runs its queries
//! synchronously and releases the lock before returning.

use crate::database::{
    CourseRecord, EnrollOutcome, EnrolledCourseName, InsertOutcome, SchoolDatabase, StudentRecord,
    WriteOutcome,
};
use anyhow::{anyhow, Result};
use std::sync::Mutex;

/// Operations the enrollment directory needs from the relational store
pub trait EnrollmentStore: Send + Sync {
    fn list_courses(&self) -> Result<Vec<CourseRecord>>;
    fn find_course(&self, id: i64) -> Result<Option<CourseRecord>>;
    fn create_course(&self, name: &str, description: &str) -> Result<InsertOutcome<CourseRecord>>;
    fn update_course(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<WriteOutcome<CourseRecord>>;
    fn delete_course(&self, id: i64) -> Result<bool>;

    fn list_students(&self) -> Result<Vec<StudentRecord>>;
    fn find_student(&self, id: i64) -> Result<Option<StudentRecord>>;
    fn create_student(&self, name: &str, email: &str) -> Result<InsertOutcome<StudentRecord>>;
    fn update_student(
        &self,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<WriteOutcome<StudentRecord>>;
    fn delete_student(&self, id: i64) -> Result<bool>;

    fn enroll(&self, student_id: i64, course_id: i64) -> Result<EnrollOutcome>;
    fn unenroll(&self, student_id: i64, course_id: i64) -> Result<bool>;
    /// Every enrollment joined with its course name
    fn enrolled_course_names(&self) -> Result<Vec<EnrolledCourseName>>;
    fn course_names_for_student(&self, student_id: i64) -> Result<Vec<String>>;

    /// Remove all enrollments, students and courses
    fn clear(&self) -> Result<()>;
}

/// SQLite-backed store
pub struct SqliteStore {
    db: Mutex<SchoolDatabase>,
}

impl SqliteStore {
    pub fn new(db: SchoolDatabase) -> Self {
        Self { db: Mutex::new(db) }
    }

    /// Open (or create) the database file inside `data_dir`
    pub fn open_in_dir(data_dir: &str) -> Result<Self> {
        Ok(Self::new(SchoolDatabase::open_in_dir(data_dir)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(SchoolDatabase::open_in_memory()?))
    }

    fn with_db<T>(&self, f: impl FnOnce(&SchoolDatabase) -> Result<T>) -> Result<T> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow!("Database lock poisoned"))?;
        f(&db)
    }
}

impl EnrollmentStore for SqliteStore {
    fn list_courses(&self) -> Result<Vec<CourseRecord>> {
        self.with_db(|db| db.courses().list())
    }

    fn find_course(&self, id: i64) -> Result<Option<CourseRecord>> {
        self.with_db(|db| db.courses().find_by_id(id))
    }

    fn create_course(&self, name: &str, description: &str) -> Result<InsertOutcome<CourseRecord>> {
        self.with_db(|db| db.courses().create(name, description))
    }

    fn update_course(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<WriteOutcome<CourseRecord>> {
        self.with_db(|db| db.courses().update(id, name, description))
    }

    fn delete_course(&self, id: i64) -> Result<bool> {
        self.with_db(|db| db.courses().delete(id))
    }

    fn list_students(&self) -> Result<Vec<StudentRecord>> {
        self.with_db(|db| db.students().list())
    }

    fn find_student(&self, id: i64) -> Result<Option<StudentRecord>> {
        self.with_db(|db| db.students().find_by_id(id))
    }

    fn create_student(&self, name: &str, email: &str) -> Result<InsertOutcome<StudentRecord>> {
        self.with_db(|db| db.students().create(name, email))
    }

    fn update_student(
        &self,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<WriteOutcome<StudentRecord>> {
        self.with_db(|db| db.students().update(id, name, email))
    }

    fn delete_student(&self, id: i64) -> Result<bool> {
        self.with_db(|db| db.students().delete(id))
    }

    fn enroll(&self, student_id: i64, course_id: i64) -> Result<EnrollOutcome> {
        self.with_db(|db| db.enrollments().enroll(student_id, course_id))
    }

    fn unenroll(&self, student_id: i64, course_id: i64) -> Result<bool> {
        self.with_db(|db| db.enrollments().unenroll(student_id, course_id))
    }

    fn enrolled_course_names(&self) -> Result<Vec<EnrolledCourseName>> {
        self.with_db(|db| db.enrollments().course_names())
    }

    fn course_names_for_student(&self, student_id: i64) -> Result<Vec<String>> {
        self.with_db(|db| db.enrollments().course_names_for_student(student_id))
    }

    fn clear(&self) -> Result<()> {
        self.with_db(|db| db.clear())
    }
}

/// Store doubles for tests
#[cfg(test)]
pub(crate) mod fakes {
    use super::*;

    /// Store whose every call fails, as if the database were unreachable
    pub(crate) struct UnavailableStore;

    fn unavailable<T>() -> Result<T> {
        Err(anyhow!("connection refused"))
    }

    impl EnrollmentStore for UnavailableStore {
        fn list_courses(&self) -> Result<Vec<CourseRecord>> {
            unavailable()
        }
        fn find_course(&self, _: i64) -> Result<Option<CourseRecord>> {
            unavailable()
        }
        fn create_course(&self, _: &str, _: &str) -> Result<InsertOutcome<CourseRecord>> {
            unavailable()
        }
        fn update_course(&self, _: i64, _: &str, _: &str) -> Result<WriteOutcome<CourseRecord>> {
            unavailable()
        }
        fn delete_course(&self, _: i64) -> Result<bool> {
            unavailable()
        }
        fn list_students(&self) -> Result<Vec<StudentRecord>> {
            unavailable()
        }
        fn find_student(&self, _: i64) -> Result<Option<StudentRecord>> {
            unavailable()
        }
        fn create_student(&self, _: &str, _: &str) -> Result<InsertOutcome<StudentRecord>> {
            unavailable()
        }
        fn update_student(&self, _: i64, _: &str, _: &str) -> Result<WriteOutcome<StudentRecord>> {
            unavailable()
        }
        fn delete_student(&self, _: i64) -> Result<bool> {
            unavailable()
        }
        fn enroll(&self, _: i64, _: i64) -> Result<EnrollOutcome> {
            unavailable()
        }
        fn unenroll(&self, _: i64, _: i64) -> Result<bool> {
            unavailable()
        }
        fn enrolled_course_names(&self) -> Result<Vec<EnrolledCourseName>> {
            unavailable()
        }
        fn course_names_for_student(&self, _: i64) -> Result<Vec<String>> {
            unavailable()
        }
        fn clear(&self) -> Result<()> {
            unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_store_is_shareable_across_threads() {
        let store: Arc<dyn EnrollmentStore> = Arc::new(SqliteStore::open_in_memory().unwrap());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .create_student(&format!("Aluno {}", i), &format!("aluno{}@email.com", i))
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(matches!(handle.join().unwrap(), InsertOutcome::Inserted(_)));
        }
        assert_eq!(store.list_students().unwrap().len(), 4);
    }

    #[test]
    fn test_concurrent_duplicate_course_creates_one_row() {
        let store: Arc<dyn EnrollmentStore> = Arc::new(SqliteStore::open_in_memory().unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create_course("Algoritmos", "desc").unwrap())
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| matches!(outcome, InsertOutcome::Inserted(_)))
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(store.list_courses().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_course("Algoritmos", "desc").unwrap();
        store.create_student("Carlos", "carlos@email.com").unwrap();
        assert_eq!(store.enroll(1, 1).unwrap(), EnrollOutcome::Enrolled);

        store.clear().unwrap();

        assert!(store.list_courses().unwrap().is_empty());
        assert!(store.list_students().unwrap().is_empty());
        assert!(store.enrolled_course_names().unwrap().is_empty());
    }
}
