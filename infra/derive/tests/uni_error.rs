#[test]
fn uni_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/uni_error_pass.rs");
    t.pass("tests/ui/uni_error_internal_only.rs");
}
