use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn test_defaults() {
    assert_eq!(
        parse_generate_options(&args(&["snapshot.json"])),
        Ok(GenerateOptions::new("snapshot.json"))
    );
}

#[test]
fn test_all_options() {
    let parsed = parse_generate_options(&args(&[
        "--package=org.acme",
        "snapshot.json",
        "--class=AppBootstrap",
        "--exclude=auditListener",
        "--exclude=org.acme.Legacy",
        "-o",
        "out/src",
        "--fail-on-skip",
        "--color=never",
    ]));

    let mut expected = GenerateOptions::new("snapshot.json");
    expected.config = GeneratorConfig::new("org.acme")
        .with_unit_name("AppBootstrap")
        .with_exclude("auditListener")
        .with_exclude("org.acme.Legacy");
    expected.output = PathBuf::from("out/src");
    expected.fail_on_skip = true;
    expected.color = ColorMode::Never;
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn test_output_flag_forms() {
    let short = parse_generate_options(&args(&["s.json", "-o", "a"])).map(|o| o.output);
    let long = parse_generate_options(&args(&["s.json", "--output=a"])).map(|o| o.output);
    assert_eq!(short, Ok(PathBuf::from("a")));
    assert_eq!(long, Ok(PathBuf::from("a")));
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_generate_options(&args(&[])),
        Err("missing snapshot path".to_owned())
    );
    assert_eq!(
        parse_generate_options(&args(&["s.json", "-o"])),
        Err("`-o` needs a directory".to_owned())
    );
    assert_eq!(
        parse_generate_options(&args(&["s.json", "--verbose"])),
        Err("unknown option '--verbose'".to_owned())
    );
    assert_eq!(
        parse_generate_options(&args(&["a.json", "b.json"])),
        Err("unexpected argument 'b.json'".to_owned())
    );
    assert_eq!(
        parse_generate_options(&args(&["a.json", "--color=blue"])),
        Err("unknown color mode 'blue'".to_owned())
    );
}

#[test]
fn test_fail_on_skip() {
    let report = GenerateReport {
        skipped: 1,
        ..GenerateReport::default()
    };
    assert!(report.is_failure(true));
    assert!(!report.is_failure(false));
    assert!(!GenerateReport::default().is_failure(true));
}
