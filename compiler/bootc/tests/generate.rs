// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Driver tests over JSON snapshot fixtures.
//!
//! ```bash
//! cargo test -p bootc --test generate
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use boot_codegen::SnapshotError;
use boot_diagnostic::{ColorMode, TerminalEmitter};
use bootc::commands::{load_snapshot, run_generate, DriverError, GenerateOptions, GenerateReport};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the driver, returning the result and the rendered diagnostics.
fn generate(options: &GenerateOptions) -> (Result<GenerateReport, DriverError>, String) {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let result = run_generate(options, &mut emitter);
    let diagnostics = String::from_utf8(emitter.into_inner()).unwrap();
    (result, diagnostics)
}

fn options_for(name: &str, output: &Path) -> GenerateOptions {
    let mut options = GenerateOptions::new(fixture(name));
    options.output = output.to_owned();
    options
}

#[test]
fn generates_main_and_companion_units() {
    let dir = tempfile::tempdir().unwrap();
    let (result, diagnostics) = generate(&options_for("context.json", dir.path()));
    let report = result.unwrap();

    assert_eq!(diagnostics, "");
    assert_eq!(report.skipped, 0);
    assert_eq!(
        report.written,
        vec![
            dir.path().join("com/example/ContextBootstrap.java"),
            dir.path().join("com/example/scan/ContextBootstrap.java"),
        ]
    );

    let main = fs::read_to_string(dir.path().join("com/example/ContextBootstrap.java")).unwrap();
    assert_eq!(
        main,
        r#"package com.example;

import com.example.repo.Repository;
import org.springframework.beans.factory.support.RootBeanDefinition;
import org.springframework.context.bootstrap.infrastructure.BeanDefinitionCustomizers;
import org.springframework.context.event.ContextRefreshedEvent;
import org.springframework.context.event.EventListenerMetadata;
import org.springframework.context.event.EventListenerRegistrar;
import org.springframework.context.support.GenericApplicationContext;
import org.springframework.core.ResolvableType;

public class ContextBootstrap {
  public void bootstrap(GenericApplicationContext context) {
    context.registerBean("simpleConfiguration", SimpleConfiguration.class, SimpleConfiguration::new);
    context.registerBean("stringBean", String.class, () -> context.getBean(SimpleConfiguration.class).stringBean());
    RootBeanDefinition stringRepositoryBeanDef = new RootBeanDefinition();
    stringRepositoryBeanDef.setTargetType(ResolvableType.forClassWithGenerics(Repository.class, String.class));
    stringRepositoryBeanDef.setInstanceSupplier(() -> context.getBean(SimpleConfiguration.class).stringRepository());
    BeanDefinitionCustomizers.primary().customize(stringRepositoryBeanDef);
    context.registerBeanDefinition("stringRepository", stringRepositoryBeanDef);
    com.example.scan.ContextBootstrap.registerHiddenService(context);
    context.registerBean("auditListener", AuditListener.class, AuditListener::new);
    EventListenerRegistrar eventListenerRegistrar = new EventListenerRegistrar();
    eventListenerRegistrar.register(context, EventListenerMetadata.forAnnotatedMethod("auditListener", AuditListener.class, "onRefresh", ContextRefreshedEvent.class));
  }
}
"#
    );

    let companion =
        fs::read_to_string(dir.path().join("com/example/scan/ContextBootstrap.java")).unwrap();
    assert_eq!(
        companion,
        r#"package com.example.scan;

import org.springframework.context.support.GenericApplicationContext;

public class ContextBootstrap {
  public static void registerHiddenService(GenericApplicationContext context) {
    context.registerBean("hiddenService", HiddenService.class, () -> new HiddenService(context.getBean(String.class)));
  }
}
"#
    );
}

#[test]
fn repeated_runs_are_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = generate(&options_for("context.json", first.path())).0.unwrap();
    let b = generate(&options_for("context.json", second.path())).0.unwrap();

    assert_eq!(a.written.len(), b.written.len());
    for (left, right) in a.written.iter().zip(&b.written) {
        assert_eq!(
            fs::read_to_string(left).unwrap(),
            fs::read_to_string(right).unwrap()
        );
    }
}

#[test]
fn custom_package_and_unit_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_for("context.json", dir.path());
    options.config.package = "org.acme.boot".to_owned();
    options.config.unit_name = "AppBootstrap".to_owned();
    options.config.excludes.push("auditListener".to_owned());
    let report = generate(&options).0.unwrap();

    let main = dir.path().join("org/acme/boot/AppBootstrap.java");
    assert!(report.written.contains(&main));
    let text = fs::read_to_string(main).unwrap();
    assert!(text.starts_with("package org.acme.boot;\n"));
    assert!(text.contains("import com.example.SimpleConfiguration;\n"));
    assert!(!text.contains("AuditListener"));
    assert!(text.contains("com.example.scan.AppBootstrap.registerHiddenService(context);"));
}

#[test]
fn skipped_entities_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_for("skipped.json", dir.path());
    options.fail_on_skip = true;
    let (result, diagnostics) = generate(&options);
    let report = result.unwrap();

    assert_eq!(report.skipped, 1);
    assert!(report.is_failure(options.fail_on_skip));
    assert!(diagnostics.starts_with("error[E2001]: cannot determine how to construct `ambiguous`\n"));
    assert!(diagnostics.contains("  --> ambiguous\n"));
    assert!(diagnostics.ends_with("error: 1 entity skipped\n"));

    let main = fs::read_to_string(&report.written[0]).unwrap();
    assert!(!main.contains("ambiguous"));
    assert!(main.contains("context.registerBean(\"simpleConfiguration\""));
}

#[test]
fn malformed_snapshot_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let (result, diagnostics) = generate(&options_for("duplicate.json", &out));

    assert!(matches!(
        result,
        Err(DriverError::Snapshot(SnapshotError::DuplicateName { ref name })) if name == "simpleConfiguration"
    ));
    assert!(diagnostics.starts_with("error[E1002]: "));
    assert!(!out.exists());
}

#[test]
fn missing_snapshot_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = generate(&options_for("does-not-exist.json", dir.path()));
    assert!(matches!(result, Err(DriverError::Read { .. })));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"entities\": [ { \"name\": 1 } ] }").unwrap();
    assert!(matches!(load_snapshot(&path), Err(DriverError::Parse { .. })));
}

#[test]
fn binary_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let bootc = env!("CARGO_BIN_EXE_bootc");

    let ok = Command::new(bootc)
        .arg("generate")
        .arg(fixture("skipped.json"))
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(ok.status.success());

    let strict = Command::new(bootc)
        .arg("generate")
        .arg(fixture("skipped.json"))
        .arg("-o")
        .arg(dir.path())
        .arg("--fail-on-skip")
        .output()
        .unwrap();
    assert!(!strict.status.success());

    let explain = Command::new(bootc).args(["explain", "W2002"]).output().unwrap();
    assert!(explain.status.success());
    assert!(String::from_utf8_lossy(&explain.stdout).contains("W2002"));

    let unknown = Command::new(bootc).arg("frobnicate").output().unwrap();
    assert!(!unknown.status.success());
}
