use super::*;

#[test]
fn test_type_name_splits_package() {
    let name = type_name(GENERIC_APPLICATION_CONTEXT);
    assert_eq!(name.package(), "org.springframework.context.support");
    assert_eq!(name.simple_name(), "GenericApplicationContext");
    assert_eq!(type_name("Bare").package(), "");
}

#[test]
fn test_builtin_lookup() {
    let context = builtin(&type_name(GENERIC_APPLICATION_CONTEXT)).unwrap_or_else(|| {
        panic!("GenericApplicationContext should be built in");
    });
    assert!(context.supertypes.contains(&"org.springframework.context.ApplicationContext"));
    assert!(context.supertypes.contains(&"org.springframework.beans.factory.BeanFactory"));
    assert!(builtin(&type_name("com.example.Unknown")).is_none());
}

#[test]
fn test_builtin_supertypes_are_transitive() {
    // Every listed supertype that is itself built in must have its own
    // supertypes listed as well.
    for entry in BUILTINS {
        for sup in entry.supertypes {
            if let Some(parent) = builtin(&type_name(sup)) {
                for grand in parent.supertypes {
                    assert!(
                        entry.supertypes.contains(grand),
                        "{} lists {sup} but not {grand}",
                        entry.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_builtin_names_are_unique() {
    for (i, entry) in BUILTINS.iter().enumerate() {
        assert!(
            BUILTINS[i + 1..].iter().all(|other| other.name != entry.name),
            "duplicate builtin {}",
            entry.name
        );
    }
}
