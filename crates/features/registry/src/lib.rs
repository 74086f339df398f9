//! University registry feature.
//!
//! A [`University`] keeps academics in insertion order and looks them up by
//! administration id with a linear scan. Ids are unique by convention only:
//! duplicates are accepted, and lookup/removal always act on the first match.
//! A miss is never an error for the core operations; [`University::require_academic`]
//! is there for callers that want to propagate it with `?`.
mod error;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use uni_kernel::domain::Academic;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// An ordered registry of academics of one kind `T`.
///
/// Pick `T` to fit the caller: a concrete record type, [`AnyAcademic`] to mix
/// students and doctoral students, or a shared handle such as `Arc<Student>`
/// when records live elsewhere.
///
/// [`AnyAcademic`]: uni_kernel::domain::AnyAcademic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University<T> {
    /// Free-form label; not unique, changed by plain assignment.
    pub name: String,
    academics: Vec<T>,
}

impl<T: Academic> University<T> {
    /// An empty registry called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), academics: Vec::new() }
    }

    /// Appends `academic` after every existing entry.
    pub fn add_academic(&mut self, academic: T) {
        debug!(
            university = %self.name,
            administration_id = academic.administration_id(),
            "Academic added"
        );
        self.academics.push(academic);
    }

    /// Removes the first academic whose id equals `administration_id`.
    ///
    /// Returns it if there was one; otherwise the registry is left untouched.
    pub fn remove_academic(&mut self, administration_id: &str) -> Option<T> {
        let Some(index) = self.position(administration_id) else {
            trace!(university = %self.name, administration_id, "Nothing to remove");
            return None;
        };

        debug!(university = %self.name, administration_id, index, "Academic removed");
        Some(self.academics.remove(index))
    }

    /// First academic whose id equals `administration_id`.
    #[must_use]
    pub fn get_academic(&self, administration_id: &str) -> Option<&T> {
        let found = self.position(administration_id).map(|index| &self.academics[index]);
        if found.is_none() {
            trace!(university = %self.name, administration_id, "Academic not found");
        }
        found
    }

    /// Same lookup as [`University::get_academic`], with absence as an error.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when no academic has this id.
    pub fn require_academic(&self, administration_id: &str) -> Result<&T, RegistryError> {
        self.get_academic(administration_id).ok_or_else(|| RegistryError::not_found(administration_id))
    }

    /// All academics, in insertion order.
    #[must_use]
    pub fn academics(&self) -> &[T] {
        &self.academics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.academics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.academics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.academics.iter()
    }

    fn position(&self, administration_id: &str) -> Option<usize> {
        self.academics.iter().position(|a| a.administration_id() == administration_id)
    }
}

impl<T: Academic> Extend<T> for University<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for academic in iter {
            self.add_academic(academic);
        }
    }
}

impl<'a, T> IntoIterator for &'a University<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.academics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uni_kernel::domain::AcademicRecord;

    fn record(id: &str, last: &str) -> AcademicRecord {
        AcademicRecord::new(id, last, "First")
    }

    #[test]
    fn new_registry_is_empty_and_named() {
        let university = University::<AcademicRecord>::new("Web Master");
        assert_eq!(university.name, "Web Master");
        assert!(university.is_empty());
        assert_eq!(university.len(), 0);
    }

    #[test]
    fn empty_registry_treats_everything_as_absent() {
        let mut university = University::<AcademicRecord>::new("Empty");
        assert!(university.get_academic("1").is_none());
        assert!(university.remove_academic("1").is_none());
        assert!(university.get_academic("").is_none());
        assert!(university.is_empty());
    }

    #[test]
    fn remove_hands_back_the_removed_record() {
        let mut university = University::new("Web Master");
        university.add_academic(record("1", "A"));
        university.add_academic(record("2", "B"));

        assert_eq!(university.remove_academic("1"), Some(record("1", "A")));
        assert_eq!(university.academics(), [record("2", "B")]);
    }

    #[test]
    fn empty_key_is_compared_like_any_other() {
        let mut university = University::new("Odd keys");
        university.add_academic(record("", "Blank"));
        assert_eq!(university.get_academic("").map(Academic::last_name), Some("Blank"));
        assert!(university.get_academic(" ").is_none());
    }

    #[test]
    fn name_is_reassignable() {
        let mut university = University::<AcademicRecord>::new("Web Master");
        university.name = "Web Master reborn".to_owned();
        assert_eq!(university.name, "Web Master reborn");
    }
}
