//! Facade crate for the university registry workspace.
//! Re-exports the domain, kernel and registry crates under one name.
//! Keep this crate thin: it should compose other crates, not implement logic.

pub use uni_domain as domain;
pub use uni_kernel as kernel;
pub use uni_registry as registry;

pub use uni_kernel::dict::{filter_dict, map_dict, reduce_dict};
pub use uni_registry::{Academic, RegistryError, University};

/// Common imports for applications.
pub mod prelude {
    pub use uni_domain::{
        Academic, AcademicRecord, AnyAcademic, Course, DoctoralStudent, Student, Teacher,
    };
    pub use uni_kernel::dict::{filter_dict, map_dict, reduce_dict};
    pub use uni_registry::{RegistryError, RegistryErrorExt, University};
}
