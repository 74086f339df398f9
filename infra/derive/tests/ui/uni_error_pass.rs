use std::borrow::Cow;
use uni_derive::uni_error;

#[uni_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Lookup failed{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },
}

fn main() {}
