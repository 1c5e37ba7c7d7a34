use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_and_display() {
    let diagnostic = Diagnostic::error(ErrorCode::E2001)
        .with_message("no construction strategy for `legacyBean`")
        .with_subject("entity `legacyBean`")
        .with_note("the bean class declares 2 constructors and none is marked for injection")
        .with_suggestion("mark one constructor for injection");

    assert!(diagnostic.is_error());
    assert_eq!(
        diagnostic.to_string(),
        "error [E2001]: no construction strategy for `legacyBean`\n  \
         --> entity `legacyBean`\n  \
         = note: the bean class declares 2 constructors and none is marked for injection\n  \
         = help: mark one constructor for injection"
    );
}

#[test]
fn test_display_without_context() {
    let diagnostic = Diagnostic::warning(ErrorCode::W2002).with_message("kept in main unit");
    assert_eq!(diagnostic.to_string(), "warning [W2002]: kept in main unit");
    assert!(diagnostic.is_warning());
}

#[test]
fn test_for_code_picks_severity() {
    assert_eq!(Diagnostic::for_code(ErrorCode::W2001).severity, Severity::Warning);
    assert_eq!(Diagnostic::for_code(ErrorCode::E2002).severity, Severity::Error);
}
