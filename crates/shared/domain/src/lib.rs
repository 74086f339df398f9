//! # Domain Models
//!
//! Pure academic types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or registry logic, just data and the [`Academic`] capability.

pub mod academic;
pub mod config;
pub mod constants;
pub mod course;
pub mod people;

pub use academic::{Academic, AcademicRecord};
pub use course::Course;
pub use people::{AnyAcademic, DoctoralStudent, Student, Teacher};
