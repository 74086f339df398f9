use std::borrow::Cow;

#[uni_derive::uni_error]
pub enum DemoError {
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _from_str: DemoError = "boom".into();
    let _from_string: DemoError = String::from("boom").into();
}
