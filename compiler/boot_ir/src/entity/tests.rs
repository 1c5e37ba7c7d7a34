use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_deserialize_minimal_definition() {
    let json = r#"{ "name": "simpleConfiguration", "bean_type": "com.example.SimpleConfiguration" }"#;
    let entity: EntityDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(
        entity,
        EntityDefinition::new(
            "simpleConfiguration",
            TypeDescriptor::class(TypeName::new("com.example", "SimpleConfiguration"))
        )
    );
    assert_eq!(
        entity.instantiated_class(),
        Some(&TypeName::new("com.example", "SimpleConfiguration"))
    );
}

#[test]
fn test_deserialize_arguments_by_position() {
    let json = r#"{
        "name": "testString",
        "bean_type": "java.lang.String",
        "arguments": {
            "0": { "kind": "char_array", "value": ["a", "b"] },
            "1": { "kind": "int", "value": 2 },
            "2": { "kind": "reference", "value": "testBean" }
        }
    }"#;
    let entity: EntityDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(entity.arguments.get(&0), Some(&ArgumentValue::CharArray(vec!['a', 'b'])));
    assert_eq!(entity.arguments.get(&1), Some(&ArgumentValue::Int(2)));
    assert_eq!(
        entity.arguments.get(&2),
        Some(&ArgumentValue::Reference("testBean".to_owned()))
    );
}

#[test]
fn test_deserialize_resolved_executable() {
    let json = r#"{
        "name": "legacy",
        "bean_type": "com.example.Legacy",
        "resolved_executable": {
            "kind": "method",
            "declaring": "com.example.LegacyFactory",
            "method": { "name": "create", "modifiers": "PUBLIC | STATIC" }
        },
        "role": "infrastructure",
        "runtime_type": { "kind": "unresolvable", "reason": "lazy bean" }
    }"#;
    let entity: EntityDefinition = serde_json::from_str(json).unwrap();
    let Some(Executable::Method(bound)) = &entity.resolved_executable else {
        panic!("expected a method executable");
    };
    assert_eq!(bound.declaring, TypeName::new("com.example", "LegacyFactory"));
    assert!(bound.method.modifiers.is_static());
    assert_eq!(entity.role.value(), 2);
    assert_eq!(
        entity.runtime_type,
        RuntimeType::Unresolvable {
            reason: "lazy bean".to_owned()
        }
    );
}

#[test]
fn test_user_type_strips_generated_suffix() {
    let entity = EntityDefinition::new(
        "config",
        TypeDescriptor::class(TypeName::parse("com.example.Config$$EnhancerBySpringCGLIB$$1").unwrap()),
    );
    assert_eq!(entity.user_type(), Some(TypeName::new("com.example", "Config")));
}

#[test]
fn test_role_values() {
    assert_eq!(Role::Application.value(), 0);
    assert_eq!(Role::Support.value(), 1);
    assert_eq!(Role::default(), Role::Application);
}
