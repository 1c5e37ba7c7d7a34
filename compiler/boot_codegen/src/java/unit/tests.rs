use super::*;
use boot_ir::well_known;
use pretty_assertions::assert_eq;

fn context_type() -> TypeName {
    well_known::type_name(well_known::GENERIC_APPLICATION_CONTEXT)
}

fn bootstrap_method() -> MethodSpec {
    MethodSpec::new("bootstrap").with_parameter(context_type(), "context")
}

#[test]
fn test_render_main_unit() {
    let config = TypeName::new("com.example", "SimpleConfiguration");
    let mut method = bootstrap_method();
    method.add_statement(
        CodeBlock::of("context.registerBean(\"simpleConfiguration\", ")
            .with_type(&config)
            .with(".class, ")
            .with_type(&config)
            .with("::new)"),
    );
    let mut unit = SourceUnit::new("com.example", "ContextBootstrap");
    unit.add_method(method);

    assert_eq!(
        unit.render(),
        "package com.example;\n\
         \n\
         import org.springframework.context.support.GenericApplicationContext;\n\
         \n\
         public class ContextBootstrap {\n\
         \x20 public void bootstrap(GenericApplicationContext context) {\n\
         \x20   context.registerBean(\"simpleConfiguration\", SimpleConfiguration.class, SimpleConfiguration::new);\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn test_methods_are_separated_by_blank_lines() {
    let mut unit = SourceUnit::new("com.example.scan", "ContextBootstrap");
    let mut first = MethodSpec::new_static("registerA").with_parameter(context_type(), "context");
    first.add_statement(CodeBlock::of("a()"));
    unit.add_method(first);
    unit.add_method(MethodSpec::new_static("registerB").with_parameter(context_type(), "context"));

    let rendered = unit.render();
    assert!(rendered.contains(
        "  public static void registerA(GenericApplicationContext context) {\n    a();\n  }\n\n  public static void registerB("
    ));
    assert!(rendered.ends_with("  }\n}\n"));
}

#[test]
fn test_conflicting_name_renders_qualified() {
    let mut method = bootstrap_method();
    let own = TypeName::new("com.example.scan", "ContextBootstrap");
    method.add_statement(CodeBlock::new().with_type(&own).with(".registerFoo(context)"));
    let mut unit = SourceUnit::new("com.example", "ContextBootstrap");
    unit.add_method(method);

    assert!(unit
        .render()
        .contains("    com.example.scan.ContextBootstrap.registerFoo(context);\n"));
}

#[test]
fn test_default_package_unit() {
    let unit = SourceUnit::new("", "Boot");
    assert_eq!(unit.render(), "public class Boot {\n}\n");
    assert_eq!(unit.relative_path(), PathBuf::from("Boot.java"));
}

#[test]
fn test_relative_path_and_lookup() {
    let mut unit = SourceUnit::new("com.example.scan", "ContextBootstrap");
    unit.add_method(MethodSpec::new_static("registerFoo"));

    assert_eq!(
        unit.relative_path(),
        PathBuf::from("com/example/scan/ContextBootstrap.java")
    );
    assert!(unit.has_method("registerFoo"));
    assert!(unit.method("registerBar").is_none());
    assert_eq!(unit.type_name().canonical_name(), "com.example.scan.ContextBootstrap");
}
