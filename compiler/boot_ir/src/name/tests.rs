use super::*;

#[test]
fn test_parse_top_level() {
    let name = TypeName::parse("com.example.SimpleConfiguration").unwrap();
    assert_eq!(name.package(), "com.example");
    assert_eq!(name.simple_name(), "SimpleConfiguration");
    assert!(!name.is_nested());
    assert_eq!(name.canonical_name(), "com.example.SimpleConfiguration");
}

#[test]
fn test_parse_nested() {
    let name = TypeName::parse("com.example.Outer$Middle$Inner").unwrap();
    assert_eq!(name.simple_names(), ["Outer", "Middle", "Inner"]);
    assert_eq!(name.canonical_name(), "com.example.Outer.Middle.Inner");
    assert_eq!(name.binary_name(), "com.example.Outer$Middle$Inner");
    assert_eq!(name.nested_name(), "Outer.Middle.Inner");
    assert_eq!(name.top_level(), TypeName::new("com.example", "Outer"));
    assert_eq!(
        name.enclosing(),
        Some(TypeName::new("com.example", "Outer").nested("Middle"))
    );
}

#[test]
fn test_parse_default_package() {
    let name = TypeName::parse("Standalone").unwrap();
    assert_eq!(name.package(), "");
    assert_eq!(name.canonical_name(), "Standalone");
    assert_eq!(name.enclosing(), None);
}

#[test]
fn test_parse_generated_subclass() {
    let name = TypeName::parse("com.example.Config$$EnhancerBySpringCGLIB$$1a2b").unwrap();
    assert!(name.is_generated_subclass());
    assert_eq!(name.simple_name(), "Config$$EnhancerBySpringCGLIB$$1a2b");
    let user = name.user_class();
    assert!(!user.is_generated_subclass());
    assert_eq!(user, TypeName::new("com.example", "Config"));
}

#[test]
fn test_user_class_of_nested_generated_subclass() {
    let name = TypeName::parse("com.example.Outer$Config$$Proxy").unwrap();
    assert_eq!(
        name.user_class(),
        TypeName::new("com.example", "Outer").nested("Config")
    );
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!(TypeName::parse(""), Err(TypeNameError::Empty));
    assert_eq!(TypeName::parse("   "), Err(TypeNameError::Empty));
    assert!(matches!(
        TypeName::parse("com..Foo"),
        Err(TypeNameError::EmptySegment(_))
    ));
    assert!(matches!(
        TypeName::parse("com.example.Outer$"),
        Err(TypeNameError::EmptySegment(_))
    ));
}

#[test]
fn test_display_uses_canonical_form() {
    let name = TypeName::new("a.b", "Outer").nested("Inner");
    assert_eq!(name.to_string(), "a.b.Outer.Inner");
    assert_eq!(String::from(name), "a.b.Outer$Inner");
}

#[test]
fn test_serde_uses_binary_name() {
    let name: TypeName = serde_json::from_str("\"a.b.Outer$Inner\"").unwrap();
    assert_eq!(name, TypeName::new("a.b", "Outer").nested("Inner"));
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"a.b.Outer$Inner\"");
    assert!(serde_json::from_str::<TypeName>("\"\"").is_err());
}
