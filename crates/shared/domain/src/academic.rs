//! The academic capability and its canonical record.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Anything that can be filed in a university registry.
///
/// `administration_id` is the lookup key. It is unique by convention only;
/// nothing in the registry enforces it.
pub trait Academic {
    fn administration_id(&self) -> &str;
    fn last_name(&self) -> &str;
    fn first_name(&self) -> &str;
}

impl<A: Academic + ?Sized> Academic for &A {
    fn administration_id(&self) -> &str {
        (**self).administration_id()
    }

    fn last_name(&self) -> &str {
        (**self).last_name()
    }

    fn first_name(&self) -> &str {
        (**self).first_name()
    }
}

macro_rules! delegate_academic {
    ($($wrapper:ident),+) => {
        $(
            impl<A: Academic + ?Sized> Academic for $wrapper<A> {
                fn administration_id(&self) -> &str {
                    (**self).administration_id()
                }

                fn last_name(&self) -> &str {
                    (**self).last_name()
                }

                fn first_name(&self) -> &str {
                    (**self).first_name()
                }
            }
        )+
    };
}

delegate_academic!(Box, Rc, Arc);

/// Immutable academic identity.
///
/// Fields are private; "updating" a record means building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecord {
    administration_id: String,
    last_name: String,
    first_name: String,
}

impl AcademicRecord {
    #[must_use]
    pub fn new(
        administration_id: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            administration_id: administration_id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    /// Copies the key fields of any academic into a plain record.
    #[must_use]
    pub fn from_academic(academic: &impl Academic) -> Self {
        Self::new(academic.administration_id(), academic.last_name(), academic.first_name())
    }
}

impl Academic for AcademicRecord {
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
