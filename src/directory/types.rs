//! Request payloads and response views of the enrollment directory

use crate::database::StudentRecord;
use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a course list in legacy mode
pub const NOT_ENROLLED_SENTINEL: &str = "Aluno não matriculado em nenhum curso";

/// Body of course create/update requests
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourseInput {
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
}

impl CourseInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

/// Body of student create/update requests
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StudentInput {
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

fn deserialize_id_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(id)) => Ok(Some(id)),
        Some(NumberOrString::Text(text)) => text.trim().parse().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("cursoId must be an integer, got '{}'", text))
        }),
    }
}

/// Body of enroll/unenroll requests
///
/// `cursoId` may be a JSON number or a numeric string such as `"1"`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnrollmentInput {
    #[serde(
        default,
        rename = "cursoId",
        alias = "courseId",
        deserialize_with = "deserialize_id_number_or_string"
    )]
    pub course_id: Option<i64>,
}

impl EnrollmentInput {
    pub fn new(course_id: i64) -> Self {
        Self {
            course_id: Some(course_id),
        }
    }
}

/// Course names attached to a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnrolledCourses {
    Names(Vec<String>),
    /// Legacy placeholder for a student without enrollments
    NotEnrolled(&'static str),
}

impl EnrolledCourses {
    /// Wrap course names, using the legacy placeholder when asked and the list is empty
    pub fn from_names(names: Vec<String>, legacy_sentinel: bool) -> Self {
        if names.is_empty() && legacy_sentinel {
            EnrolledCourses::NotEnrolled(NOT_ENROLLED_SENTINEL)
        } else {
            EnrolledCourses::Names(names)
        }
    }

    /// Course names; empty for the placeholder
    pub fn names(&self) -> &[String] {
        match self {
            EnrolledCourses::Names(names) => names,
            EnrolledCourses::NotEnrolled(_) => &[],
        }
    }

    pub fn contains(&self, course_name: &str) -> bool {
        self.names().iter().any(|n| n == course_name)
    }
}

/// A student together with the names of the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentView {
    #[serde(flatten)]
    pub student: StudentRecord,
    #[serde(rename = "cursos")]
    pub courses: EnrolledCourses,
}
