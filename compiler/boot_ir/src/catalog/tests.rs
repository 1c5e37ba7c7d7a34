use super::*;
use crate::well_known::{self, type_name};

fn name(binary: &str) -> TypeName {
    TypeName::parse(binary).unwrap()
}

fn catalog_with(classes: Vec<ClassInfo>) -> TypeCatalog {
    classes.into_iter().collect()
}

#[test]
fn test_subtype_from_catalog() {
    let mut repo = ClassInfo::new(name("com.example.JdbcRepository"));
    repo.supertypes = vec![name("com.example.Repository")];
    let catalog = catalog_with(vec![repo]);

    assert!(catalog.is_subtype(&name("com.example.JdbcRepository"), &name("com.example.Repository")));
    assert!(!catalog.is_subtype(&name("com.example.Repository"), &name("com.example.JdbcRepository")));
    assert!(catalog.is_subtype(&name("com.example.Repository"), &well_known::object()));
}

#[test]
fn test_subtype_falls_back_to_builtins() {
    let catalog = TypeCatalog::new();
    let context = type_name(well_known::GENERIC_APPLICATION_CONTEXT);
    assert!(catalog.is_subtype(&context, &name("org.springframework.context.ApplicationContext")));
    assert!(catalog.is_subtype(&context, &context));
    assert!(catalog.is_subtype(&name("java.util.List"), &type_name(well_known::COLLECTION)));
    assert!(!catalog.is_subtype(&name("java.util.Map"), &type_name(well_known::COLLECTION)));
    assert!(!catalog.is_subtype(&name("com.example.Unknown"), &type_name(well_known::STRING)));
}

#[test]
fn test_catalog_overrides_builtin() {
    let mut custom = ClassInfo::new(name("java.util.List"));
    custom.modifiers = Modifiers::PUBLIC | Modifiers::INTERFACE;
    let catalog = catalog_with(vec![custom]);
    // The catalog record wins and carries no supertypes.
    assert!(!catalog.is_subtype(&name("java.util.List"), &type_name(well_known::COLLECTION)));
}

#[test]
fn test_unknown_types_are_public() {
    let catalog = TypeCatalog::new();
    assert_eq!(catalog.modifiers(&name("com.example.Anything")), Modifiers::PUBLIC);
    assert!(catalog.is_accessible_from(&name("com.example.Anything"), "org.other"));
}

#[test]
fn test_accessibility_rules() {
    let mut package_private = ClassInfo::new(name("com.example.Hidden"));
    package_private.modifiers = Modifiers::empty();
    let mut private_nested = ClassInfo::new(name("com.example.Outer$Secret"));
    private_nested.modifiers = Modifiers::PRIVATE | Modifiers::STATIC;
    let catalog = catalog_with(vec![package_private, private_nested]);

    assert!(catalog.is_accessible_from(&name("com.example.Hidden"), "com.example"));
    assert!(!catalog.is_accessible_from(&name("com.example.Hidden"), "com.other"));
    assert!(!catalog.is_accessible_from(&name("com.example.Outer$Secret"), "com.example"));
}

#[test]
fn test_nested_type_requires_accessible_enclosing_type() {
    let mut outer = ClassInfo::new(name("com.example.Outer"));
    outer.modifiers = Modifiers::empty();
    let inner = ClassInfo::new(name("com.example.Outer$Inner"));
    let catalog = catalog_with(vec![outer, inner]);

    assert!(!catalog.is_accessible_from(&name("com.example.Outer$Inner"), "com.other"));
    assert!(catalog.is_accessible_from(&name("com.example.Outer$Inner"), "com.example"));
}

#[test]
fn test_accessibility_uses_user_class() {
    let mut config = ClassInfo::new(name("com.example.Config"));
    config.modifiers = Modifiers::empty();
    let catalog = catalog_with(vec![config]);
    assert!(!catalog.is_accessible_from(&name("com.example.Config$$Proxy"), "org.app"));
}

#[test]
fn test_member_accessibility() {
    assert!(Modifiers::PUBLIC.is_accessible("a", "b"));
    assert!(Modifiers::PROTECTED.is_accessible("a", "a"));
    assert!(!Modifiers::PROTECTED.is_accessible("a", "b"));
    assert!(Modifiers::empty().is_accessible("a", "a"));
    assert!(!Modifiers::PRIVATE.is_accessible("a", "a"));
}

#[test]
fn test_deserialize_class_info() {
    let json = r#"{
        "name": "com.example.SampleFactory",
        "modifiers": "PUBLIC | ABSTRACT",
        "constructors": [{ "parameters": [{ "name": "value", "type": "int" }] }],
        "methods": [
            { "name": "create", "modifiers": "PUBLIC | STATIC", "return_type": "java.lang.String" },
            { "name": "onEvent", "parameters": [{ "type": "com.example.MyEvent" }], "listener": {} }
        ]
    }"#;
    let class: ClassInfo = serde_json::from_str(json).unwrap();
    assert!(class.modifiers.contains(Modifiers::ABSTRACT));
    assert_eq!(class.constructors.len(), 1);
    assert!(!class.constructors[0].inject);
    assert!(class.methods[0].modifiers.is_static());
    assert_eq!(
        class.methods[1].listener.as_ref().map(|l| l.annotation.canonical_name()),
        Some(well_known::EVENT_LISTENER.to_owned())
    );
    assert_eq!(class.methods_named("create").count(), 1);
}
