//! Enrollment directory
//!
//! Business rules for courses, students and enrollments on top of an
//! injected [`EnrollmentStore`]:
//!
//! - required fields are checked before the store is touched
//! - store outcomes (missing row, duplicate name/email/pair) become
//!   [`DirectoryError`] variants
//! - each student is listed together with the names of their courses
//!
//! # Usage
//!
//! ```rust,ignore
//! use escola::directory::{CourseInput, EnrollmentDirectory, EnrollmentInput, StudentInput};
//! use escola::store::SqliteStore;
//! use std::sync::Arc;
//!
//! let directory = EnrollmentDirectory::new(Arc::new(SqliteStore::open_in_memory()?));
//!
//! let course = directory.create_course(&CourseInput::new("BD", "Banco de dados"))?;
//! let student = directory.create_student(&StudentInput::new("Carlos", "carlos@x.com"))?;
//! let view = directory.enroll(student.id, &EnrollmentInput::new(course.id))?;
//! assert!(view.courses.contains("BD"));
//! ```

mod error;
mod types;

pub use error::{DirectoryError, DirectoryResult};
pub use types::{
    CourseInput, EnrolledCourses, EnrollmentInput, StudentInput, StudentView,
    NOT_ENROLLED_SENTINEL,
};

use crate::database::{
    CourseRecord, EnrollOutcome, EnrolledCourseName, InsertOutcome, StudentRecord, WriteOutcome,
};
use crate::store::EnrollmentStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Client-facing messages
pub mod messages {
    pub const COURSE_FIELDS_REQUIRED: &str = "Nome do curso e descrição são obrigatórios.";
    pub const STUDENT_FIELDS_REQUIRED: &str = "Nome e email são obrigatórios.";
    pub const COURSE_ID_REQUIRED: &str = "O campo cursoId é obrigatório.";
    pub const COURSE_NAME_TAKEN: &str = "Já existe um curso com este nome.";
    pub const STUDENT_EMAIL_TAKEN: &str = "Já existe um aluno com este email.";
    pub const COURSE_NOT_FOUND: &str = "Curso não encontrado.";
    pub const STUDENT_NOT_FOUND: &str = "Aluno não encontrado.";

    pub const COURSES_LISTED: &str = "Lista de cursos cadastrados.";
    pub const STUDENTS_LISTED: &str = "Lista de alunos cadastrados.";
    pub const COURSE_DELETED: &str = "Curso excluído com sucesso.";
    pub const STUDENT_DELETED: &str = "Aluno excluído com sucesso.";
    pub const STUDENT_ENROLLED: &str = "Aluno matriculado com sucesso!";
    pub const ENROLLMENT_REMOVED: &str = "Matrícula removida com sucesso.";
}

use messages::*;

/// Behaviour switches of the directory
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryOptions {
    /// Show [`NOT_ENROLLED_SENTINEL`] instead of an empty course list
    pub legacy_unenrolled_sentinel: bool,
}

/// Course, student and enrollment operations over an injected store
#[derive(Clone)]
pub struct EnrollmentDirectory {
    store: Arc<dyn EnrollmentStore>,
    options: DirectoryOptions,
}

/// Returns the value when it is present and non-empty
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl EnrollmentDirectory {
    pub fn new(store: Arc<dyn EnrollmentStore>) -> Self {
        Self::with_options(store, DirectoryOptions::default())
    }

    pub fn with_options(store: Arc<dyn EnrollmentStore>, options: DirectoryOptions) -> Self {
        Self { store, options }
    }

    // -------------------------------------------------------------------------
    // Courses
    // -------------------------------------------------------------------------

    /// All courses ordered by id
    pub fn list_courses(&self) -> DirectoryResult<Vec<CourseRecord>> {
        self.store
            .list_courses()
            .map_err(DirectoryError::store("Erro ao buscar cursos"))
    }

    pub fn get_course(&self, id: i64) -> DirectoryResult<CourseRecord> {
        self.store
            .find_course(id)
            .map_err(DirectoryError::store("Erro ao buscar curso"))?
            .ok_or_else(|| DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
    }

    pub fn create_course(&self, input: &CourseInput) -> DirectoryResult<CourseRecord> {
        let (name, description) = Self::validate_course(input)?;

        match self
            .store
            .create_course(name, description)
            .map_err(DirectoryError::store("Erro ao inserir curso"))?
        {
            InsertOutcome::Inserted(course) => {
                info!("created course {} ({})", course.id, course.name);
                Ok(course)
            }
            InsertOutcome::Duplicate => {
                Err(DirectoryError::Conflict(COURSE_NAME_TAKEN.to_string()))
            }
        }
    }

    pub fn update_course(&self, id: i64, input: &CourseInput) -> DirectoryResult<CourseRecord> {
        let (name, description) = Self::validate_course(input)?;

        match self
            .store
            .update_course(id, name, description)
            .map_err(DirectoryError::store("Erro ao atualizar curso"))?
        {
            WriteOutcome::Written(course) => {
                debug!("updated course {}", course.id);
                Ok(course)
            }
            WriteOutcome::Missing => Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string())),
            WriteOutcome::Duplicate => Err(DirectoryError::Conflict(COURSE_NAME_TAKEN.to_string())),
        }
    }

    /// Delete a course; its enrollments go with it
    pub fn delete_course(&self, id: i64) -> DirectoryResult<()> {
        let removed = self
            .store
            .delete_course(id)
            .map_err(DirectoryError::store("Erro ao excluir curso"))?;

        if !removed {
            return Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()));
        }
        info!("deleted course {}", id);
        Ok(())
    }

    fn validate_course(input: &CourseInput) -> DirectoryResult<(&str, &str)> {
        match (required(&input.name), required(&input.description)) {
            (Some(name), Some(description)) => Ok((name, description)),
            _ => Err(DirectoryError::validation(COURSE_FIELDS_REQUIRED)),
        }
    }

    // -------------------------------------------------------------------------
    // Students
    // -------------------------------------------------------------------------

    /// All students ordered by id, each with the names of their courses
    pub fn list_students(&self) -> DirectoryResult<Vec<StudentView>> {
        let students = self
            .store
            .list_students()
            .map_err(DirectoryError::store("Erro ao buscar alunos"))?;
        let enrollments = self
            .store
            .enrolled_course_names()
            .map_err(DirectoryError::store("Erro ao buscar alunos"))?;

        Ok(attach_courses(
            students,
            enrollments,
            self.options.legacy_unenrolled_sentinel,
        ))
    }

    pub fn get_student(&self, id: i64) -> DirectoryResult<StudentView> {
        let student = self
            .store
            .find_student(id)
            .map_err(DirectoryError::store("Erro ao buscar aluno"))?
            .ok_or_else(|| DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))?;

        self.student_view(student, "Erro ao buscar aluno")
    }

    pub fn create_student(&self, input: &StudentInput) -> DirectoryResult<StudentRecord> {
        let (name, email) = Self::validate_student(input)?;

        match self
            .store
            .create_student(name, email)
            .map_err(DirectoryError::store("Erro ao inserir aluno"))?
        {
            InsertOutcome::Inserted(student) => {
                info!("created student {} ({})", student.id, student.email);
                Ok(student)
            }
            InsertOutcome::Duplicate => {
                Err(DirectoryError::Conflict(STUDENT_EMAIL_TAKEN.to_string()))
            }
        }
    }

    pub fn update_student(&self, id: i64, input: &StudentInput) -> DirectoryResult<StudentRecord> {
        let (name, email) = Self::validate_student(input)?;

        match self
            .store
            .update_student(id, name, email)
            .map_err(DirectoryError::store("Erro ao atualizar aluno"))?
        {
            WriteOutcome::Written(student) => {
                debug!("updated student {}", student.id);
                Ok(student)
            }
            WriteOutcome::Missing => Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string())),
            WriteOutcome::Duplicate => {
                Err(DirectoryError::Conflict(STUDENT_EMAIL_TAKEN.to_string()))
            }
        }
    }

    /// Delete a student; their enrollments go with them
    pub fn delete_student(&self, id: i64) -> DirectoryResult<()> {
        let removed = self
            .store
            .delete_student(id)
            .map_err(DirectoryError::store("Erro ao excluir aluno"))?;

        if !removed {
            return Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()));
        }
        info!("deleted student {}", id);
        Ok(())
    }

    fn validate_student(input: &StudentInput) -> DirectoryResult<(&str, &str)> {
        match (required(&input.name), required(&input.email)) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(DirectoryError::validation(STUDENT_FIELDS_REQUIRED)),
        }
    }

    fn student_view(
        &self,
        student: StudentRecord,
        context: &'static str,
    ) -> DirectoryResult<StudentView> {
        let names = self
            .store
            .course_names_for_student(student.id)
            .map_err(DirectoryError::store(context))?;

        Ok(StudentView {
            student,
            courses: EnrolledCourses::from_names(names, self.options.legacy_unenrolled_sentinel),
        })
    }

    // -------------------------------------------------------------------------
    // Enrollments
    // -------------------------------------------------------------------------

    /// Enroll a student in a course, returning the student with the refreshed course list
    pub fn enroll(&self, student_id: i64, input: &EnrollmentInput) -> DirectoryResult<StudentView> {
        let course_id = input
            .course_id
            .ok_or_else(|| DirectoryError::validation(COURSE_ID_REQUIRED))?;
        const CONTEXT: &str = "Erro ao matricular aluno";

        match self
            .store
            .enroll(student_id, course_id)
            .map_err(DirectoryError::store(CONTEXT))?
        {
            EnrollOutcome::Enrolled => {
                info!("enrolled student {} in course {}", student_id, course_id);
            }
            EnrollOutcome::StudentNotFound => {
                return Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))
            }
            EnrollOutcome::CourseNotFound => {
                return Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
            }
            EnrollOutcome::AlreadyEnrolled => return Err(DirectoryError::AlreadyEnrolled),
        }

        self.refreshed_student(student_id, CONTEXT)
    }

    /// Remove an enrollment, returning the student with the refreshed course list
    pub fn unenroll(
        &self,
        student_id: i64,
        input: &EnrollmentInput,
    ) -> DirectoryResult<StudentView> {
        let course_id = input
            .course_id
            .ok_or_else(|| DirectoryError::validation(COURSE_ID_REQUIRED))?;
        const CONTEXT: &str = "Erro ao remover matrícula";

        let removed = self
            .store
            .unenroll(student_id, course_id)
            .map_err(DirectoryError::store(CONTEXT))?;
        if !removed {
            return Err(DirectoryError::EnrollmentNotFound);
        }
        info!("removed student {} from course {}", student_id, course_id);

        self.refreshed_student(student_id, CONTEXT)
    }

    fn refreshed_student(
        &self,
        student_id: i64,
        context: &'static str,
    ) -> DirectoryResult<StudentView> {
        let student = self
            .store
            .find_student(student_id)
            .map_err(DirectoryError::store(context))?
            .ok_or_else(|| DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))?;
        self.student_view(student, context)
    }

    /// Remove every enrollment, student and course
    pub fn reset(&self) -> DirectoryResult<()> {
        self.store
            .clear()
            .map_err(DirectoryError::store("Erro ao limpar dados"))
    }
}

/// Attach to each student the course names of their enrollments
///
/// Students keep their order; course names keep the order of `enrollments`.
fn attach_courses(
    students: Vec<StudentRecord>,
    enrollments: Vec<EnrolledCourseName>,
    legacy_sentinel: bool,
) -> Vec<StudentView> {
    let mut by_student: HashMap<i64, Vec<String>> = HashMap::new();
    for enrollment in enrollments {
        by_student
            .entry(enrollment.student_id)
            .or_default()
            .push(enrollment.course_name);
    }

    students
        .into_iter()
        .map(|student| {
            let names = by_student.remove(&student.id).unwrap_or_default();
            StudentView {
                student,
                courses: EnrolledCourses::from_names(names, legacy_sentinel),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fakes::UnavailableStore;
    use crate::store::SqliteStore;

    fn directory() -> EnrollmentDirectory {
        EnrollmentDirectory::new(Arc::new(SqliteStore::open_in_memory().unwrap()))
    }

    fn legacy_directory() -> EnrollmentDirectory {
        EnrollmentDirectory::with_options(
            Arc::new(SqliteStore::open_in_memory().unwrap()),
            DirectoryOptions {
                legacy_unenrolled_sentinel: true,
            },
        )
    }

    #[test]
    fn test_create_course_requires_fields() {
        let dir = directory();

        for input in [
            CourseInput::new("", ""),
            CourseInput::new("Algoritmos", ""),
            CourseInput::new("", "desc"),
            CourseInput::default(),
        ] {
            assert_eq!(
                dir.create_course(&input),
                Err(DirectoryError::validation(COURSE_FIELDS_REQUIRED))
            );
        }
        assert!(dir.list_courses().unwrap().is_empty());
    }

    #[test]
    fn test_create_course_conflict_ignores_case() {
        let dir = directory();

        let course = dir
            .create_course(&CourseInput::new("Algoritmos", "Curso de algoritmos básicos"))
            .unwrap();
        assert_eq!(course.name, "Algoritmos");

        let dup = dir.create_course(&CourseInput::new("algoritmos", "Descrição 2"));
        assert_eq!(
            dup,
            Err(DirectoryError::Conflict(COURSE_NAME_TAKEN.to_string()))
        );
        assert_eq!(dir.list_courses().unwrap().len(), 1);
    }

    #[test]
    fn test_conflicts_ignore_case_of_accented_letters() {
        let dir = directory();
        dir.create_course(&CourseInput::new("Inglês", "Curso básico de inglês"))
            .unwrap();
        dir.create_course(&CourseInput::new("Redes", "Curso de redes"))
            .unwrap();
        dir.create_student(&StudentInput::new("João", "joão@x.com"))
            .unwrap();
        dir.create_student(&StudentInput::new("Maria", "maria@x.com"))
            .unwrap();

        let course_taken = Err(DirectoryError::Conflict(COURSE_NAME_TAKEN.to_string()));
        assert_eq!(
            dir.create_course(&CourseInput::new("INGLÊS", "Outro")),
            course_taken
        );
        assert_eq!(
            dir.update_course(2, &CourseInput::new("inglês", "Outro")),
            course_taken
        );

        let email_taken = Err(DirectoryError::Conflict(STUDENT_EMAIL_TAKEN.to_string()));
        assert_eq!(
            dir.create_student(&StudentInput::new("Outro", "JOÃO@x.com")),
            email_taken
        );
        assert_eq!(
            dir.update_student(2, &StudentInput::new("Maria", "JOÃO@X.COM")),
            email_taken
        );

        let names: Vec<String> = dir
            .list_courses()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Inglês", "Redes"]);
        assert_eq!(dir.list_students().unwrap().len(), 2);
    }

    #[test]
    fn test_course_lifecycle() {
        let dir = directory();
        dir.create_course(&CourseInput::new("Gestão de TI", "Gestão de equipes"))
            .unwrap();

        assert_eq!(dir.get_course(1).unwrap().name, "Gestão de TI");
        assert_eq!(
            dir.get_course(999),
            Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
        );

        let updated = dir
            .update_course(1, &CourseInput::new("Gestão Avançada", "Atualizado"))
            .unwrap();
        assert_eq!(updated.name, "Gestão Avançada");
        assert_eq!(
            dir.update_course(999, &CourseInput::new("X", "Y")),
            Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
        );
        assert_eq!(
            dir.update_course(1, &CourseInput::new("", "Y")),
            Err(DirectoryError::validation(COURSE_FIELDS_REQUIRED))
        );

        dir.delete_course(1).unwrap();
        assert_eq!(
            dir.delete_course(1),
            Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
        );
    }

    #[test]
    fn test_student_lifecycle() {
        let dir = directory();

        assert_eq!(
            dir.create_student(&StudentInput::new("", "")),
            Err(DirectoryError::validation(STUDENT_FIELDS_REQUIRED))
        );

        let student = dir
            .create_student(&StudentInput::new("João", "joao@email.com"))
            .unwrap();
        assert_eq!(
            dir.create_student(&StudentInput::new("Outro", "JOAO@email.com")),
            Err(DirectoryError::Conflict(STUDENT_EMAIL_TAKEN.to_string()))
        );

        let updated = dir
            .update_student(student.id, &StudentInput::new("João Atualizado", "joao@email.com"))
            .unwrap();
        assert_eq!(updated.name, "João Atualizado");

        dir.delete_student(student.id).unwrap();
        assert_eq!(
            dir.delete_student(student.id),
            Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))
        );
        assert_eq!(
            dir.get_student(student.id),
            Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))
        );
    }

    #[test]
    fn test_enroll_and_list() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Carlos", "carlos@x.com"))
            .unwrap();
        dir.create_student(&StudentInput::new("Fernanda", "fernanda@x.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("BD", "Banco de dados"))
            .unwrap();

        let view = dir.enroll(1, &EnrollmentInput::new(1)).unwrap();
        assert!(view.courses.contains("BD"));

        let students = dir.list_students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].student.name, "Carlos");
        assert_eq!(students[0].courses.names(), ["BD".to_string()]);
        assert_eq!(students[1].courses, EnrolledCourses::Names(vec![]));
    }

    #[test]
    fn test_enroll_failures_write_nothing() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Maria", "maria@email.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("Inglês", "Curso básico de inglês"))
            .unwrap();

        assert_eq!(
            dir.enroll(1, &EnrollmentInput::new(99)),
            Err(DirectoryError::NotFound(COURSE_NOT_FOUND.to_string()))
        );
        assert_eq!(
            dir.enroll(99, &EnrollmentInput::new(1)),
            Err(DirectoryError::NotFound(STUDENT_NOT_FOUND.to_string()))
        );
        assert_eq!(
            dir.enroll(1, &EnrollmentInput::default()),
            Err(DirectoryError::validation(COURSE_ID_REQUIRED))
        );
        assert_eq!(dir.get_student(1).unwrap().courses.names().len(), 0);

        dir.enroll(1, &EnrollmentInput::new(1)).unwrap();
        assert_eq!(
            dir.enroll(1, &EnrollmentInput::new(1)),
            Err(DirectoryError::AlreadyEnrolled)
        );
        assert_eq!(dir.get_student(1).unwrap().courses.names().len(), 1);
    }

    #[test]
    fn test_unenroll() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Maria", "maria@email.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("Inglês", "Curso básico de inglês"))
            .unwrap();

        assert_eq!(
            dir.unenroll(1, &EnrollmentInput::new(1)),
            Err(DirectoryError::EnrollmentNotFound)
        );

        dir.enroll(1, &EnrollmentInput::new(1)).unwrap();
        let view = dir.unenroll(1, &EnrollmentInput::new(1)).unwrap();
        assert!(view.courses.names().is_empty());
    }

    #[test]
    fn test_failed_unenroll_keeps_other_enrollments() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Maria", "maria@email.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("Inglês", "Curso básico de inglês"))
            .unwrap();
        dir.create_course(&CourseInput::new("BD", "Banco de dados"))
            .unwrap();
        dir.enroll(1, &EnrollmentInput::new(1)).unwrap();

        assert_eq!(
            dir.unenroll(1, &EnrollmentInput::new(2)),
            Err(DirectoryError::EnrollmentNotFound)
        );
        assert_eq!(
            dir.get_student(1).unwrap().courses.names(),
            ["Inglês".to_string()]
        );
    }

    #[test]
    fn test_legacy_sentinel() {
        let dir = legacy_directory();
        dir.create_student(&StudentInput::new("Fernanda", "fernanda@email.com"))
            .unwrap();

        let students = dir.list_students().unwrap();
        assert_eq!(
            students[0].courses,
            EnrolledCourses::NotEnrolled(NOT_ENROLLED_SENTINEL)
        );
    }

    #[test]
    fn test_deleting_course_drops_it_from_student_lists() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Carlos", "carlos@x.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("BD", "Banco de dados"))
            .unwrap();
        dir.enroll(1, &EnrollmentInput::new(1)).unwrap();

        dir.delete_course(1).unwrap();

        assert!(dir.get_student(1).unwrap().courses.names().is_empty());
    }

    #[test]
    fn test_deleting_student_drops_their_enrollments() {
        let dir = directory();
        dir.create_student(&StudentInput::new("Carlos", "carlos@x.com"))
            .unwrap();
        dir.create_student(&StudentInput::new("Fernanda", "fernanda@x.com"))
            .unwrap();
        dir.create_course(&CourseInput::new("BD", "Banco de dados"))
            .unwrap();
        dir.enroll(1, &EnrollmentInput::new(1)).unwrap();
        dir.enroll(2, &EnrollmentInput::new(1)).unwrap();

        dir.delete_student(1).unwrap();

        let students = dir.list_students().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].courses.names(), ["BD".to_string()]);
        assert_eq!(
            dir.enroll(2, &EnrollmentInput::new(1)),
            Err(DirectoryError::AlreadyEnrolled)
        );
    }

    #[test]
    fn test_attach_courses_keeps_order() {
        let student = |id: i64| StudentRecord {
            id,
            name: format!("Aluno {}", id),
            email: format!("a{}@x.com", id),
        };
        let enrolled = |student_id: i64, course_id: i64, name: &str| EnrolledCourseName {
            student_id,
            course_id,
            course_name: name.to_string(),
        };

        let views = attach_courses(
            vec![student(1), student(2), student(3)],
            vec![
                enrolled(2, 1, "Redes"),
                enrolled(1, 2, "BD"),
                enrolled(2, 3, "Algoritmos"),
            ],
            true,
        );

        assert_eq!(views[0].courses.names(), ["BD".to_string()]);
        assert_eq!(
            views[1].courses.names(),
            ["Redes".to_string(), "Algoritmos".to_string()]
        );
        assert_eq!(
            views[2].courses,
            EnrolledCourses::NotEnrolled(NOT_ENROLLED_SENTINEL)
        );
    }

    #[test]
    fn test_store_failures_surface_as_store_errors() {
        let dir = EnrollmentDirectory::new(Arc::new(UnavailableStore));

        assert_eq!(
            dir.list_courses(),
            Err(DirectoryError::Store {
                context: "Erro ao buscar cursos",
                details: "connection refused".to_string(),
            })
        );
        assert!(dir.list_students().unwrap_err().is_store_error());
        assert!(dir
            .enroll(1, &EnrollmentInput::new(1))
            .unwrap_err()
            .is_store_error());
    }

    #[test]
    fn test_validation_runs_before_store() {
        let dir = EnrollmentDirectory::new(Arc::new(UnavailableStore));

        assert_eq!(
            dir.create_course(&CourseInput::default()),
            Err(DirectoryError::validation(COURSE_FIELDS_REQUIRED))
        );
        assert_eq!(
            dir.update_student(1, &StudentInput::new("Ana", "")),
            Err(DirectoryError::validation(STUDENT_FIELDS_REQUIRED))
        );
    }
}
