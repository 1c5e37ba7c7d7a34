use super::*;
use boot_ir::{TypeDescriptor, TypeName};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn string() -> TypeDescriptor {
    TypeDescriptor::class(well_known::type_name(well_known::STRING))
}

fn repository_of_string() -> TypeDescriptor {
    TypeDescriptor::generic(TypeName::new("com.example", "Repository"), vec![string()])
}

fn render(statements: &[CodeBlock]) -> Vec<String> {
    statements.iter().map(ToString::to_string).collect()
}

#[test]
fn test_simple_registration() {
    let entity = EntityDefinition::new(
        "simpleConfiguration",
        TypeDescriptor::class(TypeName::new("com.example", "SimpleConfiguration")),
    );
    assert_eq!(RegistrationKind::of(&entity), RegistrationKind::Simple);
    let statements = generate_registration(
        RegistrationKind::Simple,
        &entity,
        &CodeBlock::of("SimpleConfiguration::new"),
        &mut LocalNames::new(),
    );
    assert_eq!(
        render(&statements),
        vec![
            "context.registerBean(\"simpleConfiguration\", SimpleConfiguration.class, SimpleConfiguration::new)"
        ]
    );
}

#[test]
fn test_simple_registration_keeps_metadata() {
    let mut entity = EntityDefinition::new("stringBean", string());
    entity.primary = true;
    entity.role = Role::Infrastructure;
    let statements = generate_registration(
        RegistrationKind::Simple,
        &entity,
        &CodeBlock::of("() -> \"x\""),
        &mut LocalNames::new(),
    );
    assert_eq!(
        render(&statements),
        vec![
            "context.registerBean(\"stringBean\", String.class, () -> \"x\", \
             BeanDefinitionCustomizers.primary(), BeanDefinitionCustomizers.role(2))"
        ]
    );
}

#[test]
fn test_generic_registration() {
    let mut entity = EntityDefinition::new("stringRepository", repository_of_string());
    entity.primary = true;
    assert_eq!(RegistrationKind::of(&entity), RegistrationKind::Generic);
    let statements = generate_registration(
        RegistrationKind::Generic,
        &entity,
        &CodeBlock::of("() -> context.getBean(RepositoryConfiguration.class).stringRepository()"),
        &mut LocalNames::new(),
    );
    assert_eq!(
        render(&statements),
        vec![
            "RootBeanDefinition stringRepositoryBeanDef = new RootBeanDefinition()",
            "stringRepositoryBeanDef.setTargetType(ResolvableType.forClassWithGenerics(Repository.class, String.class))",
            "stringRepositoryBeanDef.setInstanceSupplier(() -> context.getBean(RepositoryConfiguration.class).stringRepository())",
            "BeanDefinitionCustomizers.primary().customize(stringRepositoryBeanDef)",
            "context.registerBeanDefinition(\"stringRepository\", stringRepositoryBeanDef)",
        ]
    );
}

#[test]
fn test_generic_variable_collisions() {
    let mut locals = LocalNames::new();
    let first = EntityDefinition::new("my-repository", repository_of_string());
    let second = EntityDefinition::new("other.repository", repository_of_string());
    let supplier = CodeBlock::of("Repository::new");

    let a = generate_registration(RegistrationKind::Generic, &first, &supplier, &mut locals);
    let b = generate_registration(RegistrationKind::Generic, &second, &supplier, &mut locals);
    assert!(a[0].to_string().contains(" repositoryBeanDef = "));
    assert!(b[0].to_string().contains(" repositoryBeanDef2 = "));
    assert_eq!(
        b[3].to_string(),
        "context.registerBeanDefinition(\"other.repository\", repositoryBeanDef2)"
    );
}

#[test]
fn test_registration_id() {
    let by_name = EntityDefinition::new("StringRepository", string());
    assert_eq!(registration_id(&by_name), "stringRepository");

    let keyword = EntityDefinition::new("class", string());
    assert_eq!(registration_id(&keyword), "string");

    let primitive = EntityDefinition::new("1st", TypeDescriptor::Wildcard);
    assert_eq!(registration_id(&primitive), "bean");
}

#[test]
fn test_local_names() {
    let mut locals = LocalNames::new();
    assert_eq!(locals.fresh("fooBeanDef"), "fooBeanDef");
    assert_eq!(locals.fresh("fooBeanDef"), "fooBeanDef2");
    assert_eq!(locals.fresh("fooBeanDef"), "fooBeanDef3");
    assert_eq!(locals.fresh("barBeanDef"), "barBeanDef");
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn registration_ids_are_identifiers(name in "[a-zA-Z0-9_$. -]{0,16}") {
        let entity = EntityDefinition::new(name, repository_of_string());
        let id = registration_id(&entity);
        prop_assert!(crate::java::identifier::is_identifier(&id));
    }
}
