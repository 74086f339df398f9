use std::borrow::Cow;

#[uni_derive::uni_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {key}", format_context(.context))]
    NotFound { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn question_mark_converts_source_errors() {
    let err = parse("nope").expect_err("parse should fail");
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn context_on_source_result_wraps_and_annotates() {
    let err = "x".parse::<u32>().context("reading port").expect_err("parse should fail");
    assert!(matches!(&err, SampleError::Parse { context: Some(c), .. } if c == "reading port"));
    assert!(err.to_string().starts_with("Parse error (reading port): "));
}

#[test]
fn context_on_own_result_overwrites_slot() {
    let result: Result<(), SampleError> =
        Err(SampleError::NotFound { key: "452115r".to_owned(), context: None });
    let err = result.context("lookup").expect_err("still an error");
    assert_eq!(err.to_string(), "Not found (lookup): 452115r");
}

#[test]
fn internal_accepts_plain_strings() {
    let err: SampleError = "unexpected state".into();
    assert_eq!(err.to_string(), "Internal error: unexpected state");

    let err: SampleError = format!("code {}", 7).into();
    assert!(matches!(err, SampleError::Internal { message, .. } if message == "code 7"));
}
