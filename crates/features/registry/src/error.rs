use std::borrow::Cow;

/// Registry error type.
#[uni_derive::uni_error]
pub enum RegistryError {
    /// No academic carries the requested administration id.
    #[error("Academic not found{}: {administration_id}", format_context(.context))]
    NotFound { administration_id: String, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    pub(crate) fn not_found(administration_id: &str) -> Self {
        Self::NotFound { administration_id: administration_id.to_owned(), context: None }
    }
}
