//! Concrete academics: students, doctoral students and teachers.

use crate::academic::Academic;
use crate::course::Course;
use serde::{Deserialize, Serialize};

macro_rules! impl_academic {
    ($($ty:ty),+) => {
        $(
            impl Academic for $ty {
                fn administration_id(&self) -> &str {
                    &self.administration_id
                }

                fn last_name(&self) -> &str {
                    &self.last_name
                }

                fn first_name(&self) -> &str {
                    &self.first_name
                }
            }
        )+
    };
}

/// A student attending courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub administration_id: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub attended_classes: Vec<Course>,
}

/// A doctoral student: paid, and teaching some courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctoralStudent {
    pub administration_id: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub classes_given: Vec<Course>,
    pub salary: u32,
}

/// A salaried teacher.
///
/// Registries can hold teachers directly or as `Box<dyn Academic>`; they are
/// not a variant of [`AnyAcademic`], which covers students only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub administration_id: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub classes_given: Vec<Course>,
    pub salary: u32,
}

impl_academic!(Student, DoctoralStudent, Teacher);

/// Either kind of student, for registries that mix both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnyAcademic {
    Student(Student),
    DoctoralStudent(DoctoralStudent),
}

impl AnyAcademic {
    fn as_dyn(&self) -> &dyn Academic {
        match self {
            Self::Student(s) => s,
            Self::DoctoralStudent(d) => d,
        }
    }
}

impl Academic for AnyAcademic {
    fn administration_id(&self) -> &str {
        self.as_dyn().administration_id()
    }

    fn last_name(&self) -> &str {
        self.as_dyn().last_name()
    }

    fn first_name(&self) -> &str {
        self.as_dyn().first_name()
    }
}

impl From<Student> for AnyAcademic {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<DoctoralStudent> for AnyAcademic {
    fn from(student: DoctoralStudent) -> Self {
        Self::DoctoralStudent(student)
    }
}
