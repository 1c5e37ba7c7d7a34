use super::*;
use boot_diagnostic::Severity;

#[test]
fn test_codes_and_severity() {
    let unresolved = GenerationProblem::UnresolvedStrategy {
        entity: "foo".to_owned(),
        reason: "`com.example.Foo` declares no constructors".to_owned(),
    };
    assert_eq!(unresolved.code(), ErrorCode::E2001);
    assert!(unresolved.is_error());
    assert_eq!(unresolved.entity(), "foo");

    let fallback = GenerationProblem::RawExecutableFallback {
        entity: "bar".to_owned(),
        executable: "constructor com.example.Bar()".to_owned(),
    };
    assert_eq!(fallback.code(), ErrorCode::W2001);
    assert!(!fallback.is_error());
    assert_eq!(fallback.into_diagnostic().severity, Severity::Warning);
}

#[test]
fn test_unsupported_literal_diagnostic() {
    let problem = GenerationProblem::UnsupportedLiteral {
        entity: "dataSource".to_owned(),
        position: 1,
        value: "nested array".to_owned(),
    };
    let diag = problem.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2002);
    assert!(diag.is_error());
    assert_eq!(diag.subject.as_deref(), Some("dataSource"));
    assert!(diag.message.contains("argument 1"));
    assert_eq!(diag.notes, vec!["recorded value: nested array".to_owned()]);
}

#[test]
fn test_unredirectable_lists_types() {
    let problem = GenerationProblem::Unredirectable {
        entity: "hidden".to_owned(),
        package: "com.example".to_owned(),
        inaccessible: vec!["com.example.Hidden".to_owned()],
    };
    let diag = problem.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::W2002);
    assert!(diag.notes.iter().any(|note| note.contains("com.example.Hidden")));
}

#[test]
fn test_snapshot_error_diagnostics() {
    let missing = SnapshotError::MissingDefinition {
        name: "ghost".to_owned(),
    };
    assert_eq!(missing.code(), ErrorCode::E1001);
    assert_eq!(missing.to_string(), "entity `ghost` is listed but has no definition");
    assert_eq!(missing.into_diagnostic().subject.as_deref(), Some("ghost"));

    let package = SnapshotError::InvalidPackage {
        package: "com..example".to_owned(),
    };
    let diag = package.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.suggestions.len(), 1);

    assert_eq!(SnapshotError::EmptyName { position: 3 }.code(), ErrorCode::E1003);
    assert_eq!(
        SnapshotError::InvalidUnitName {
            name: "class".to_owned()
        }
        .code(),
        ErrorCode::E1005
    );
}
