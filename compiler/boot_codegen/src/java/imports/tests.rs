use super::*;
use pretty_assertions::assert_eq;

fn table() -> ImportTable {
    ImportTable::new("com.example", "ContextBootstrap")
}

#[test]
fn test_same_package_and_java_lang_are_not_imported() {
    let mut imports = table();
    let string = well_known::type_name(well_known::STRING);
    let local = TypeName::new("com.example", "SimpleConfiguration");
    imports.claim_all([&string, &local]);

    assert!(imports.imports().is_empty());
    assert_eq!(imports.name_of(&string), "String");
    assert_eq!(imports.name_of(&local), "SimpleConfiguration");
}

#[test]
fn test_imports_are_sorted() {
    let mut imports = table();
    let context = well_known::type_name(well_known::GENERIC_APPLICATION_CONTEXT);
    let resolvable = well_known::type_name(well_known::RESOLVABLE_TYPE);
    let repository = TypeName::new("com.example.repo", "Repository");
    imports.claim_all([&resolvable, &context, &repository]);

    assert_eq!(
        imports.imports(),
        vec![
            "com.example.repo.Repository".to_owned(),
            "org.springframework.context.support.GenericApplicationContext".to_owned(),
            "org.springframework.core.ResolvableType".to_owned(),
        ]
    );
}

#[test]
fn test_first_claim_wins() {
    let mut imports = table();
    let first = TypeName::new("com.example.a", "Service");
    let second = TypeName::new("com.example.b", "Service");
    imports.claim_all([&first, &second]);

    assert_eq!(imports.name_of(&first), "Service");
    assert_eq!(imports.name_of(&second), "com.example.b.Service");
    assert_eq!(imports.imports(), vec!["com.example.a.Service".to_owned()]);
}

#[test]
fn test_unit_name_is_reserved() {
    let mut imports = table();
    let other = TypeName::new("com.example.nested", "ContextBootstrap");
    imports.claim(&other);

    assert_eq!(imports.name_of(&other), "com.example.nested.ContextBootstrap");
    assert!(imports.imports().is_empty());
}

#[test]
fn test_nested_types_import_their_top_level() {
    let mut imports = table();
    let inner = TypeName::new("com.example.other", "Outer").nested("Inner");
    imports.claim(&inner);

    assert_eq!(imports.name_of(&inner), "Outer.Inner");
    assert_eq!(imports.imports(), vec!["com.example.other.Outer".to_owned()]);
}
