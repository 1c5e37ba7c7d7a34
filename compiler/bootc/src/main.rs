//! Context bootstrap generator CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use boot_diagnostic::TerminalEmitter;
use bootc::commands::{explain_error, parse_generate_options, run_generate};

fn main() -> ExitCode {
    bootc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];
    match command.as_str() {
        "generate" => {
            let options = match parse_generate_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    print_generate_usage();
                    return ExitCode::FAILURE;
                }
            };
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(options.color, is_tty);
            match run_generate(&options, &mut emitter) {
                Ok(report) => {
                    for path in &report.written {
                        println!("{}", path.display());
                    }
                    if report.is_failure(options.fail_on_skip) {
                        eprintln!(
                            "error: {} entit{} skipped (--fail-on-skip)",
                            report.skipped,
                            if report.skipped == 1 { "y" } else { "ies" }
                        );
                        return ExitCode::FAILURE;
                    }
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("error: {error}");
                    ExitCode::FAILURE
                }
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: bootc explain <CODE>");
                eprintln!("Example: bootc explain E2001");
                return ExitCode::FAILURE;
            }
            match explain_error(&args[2]) {
                Ok(doc) => {
                    println!("{doc}");
                    ExitCode::SUCCESS
                }
                Err(message) => {
                    eprintln!("{message}");
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("bootc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_generate_usage() {
    eprintln!("Usage: bootc generate <snapshot.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --package=<name>     Root package (default: com.example)");
    eprintln!("  --class=<name>       Unit class name (default: ContextBootstrap)");
    eprintln!("  --exclude=<name>     Skip an entity by name or type (repeatable)");
    eprintln!("  -o <dir>             Output directory (default: generated)");
    eprintln!("  --fail-on-skip       Exit non-zero when an entity is skipped");
    eprintln!("  --color=<mode>       Diagnostics color: auto, always, never");
}

fn print_usage() {
    println!("Context bootstrap generator");
    println!();
    println!("Usage: bootc <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <snapshot.json>  Generate registration units from a snapshot");
    println!("  explain <code>            Explain a diagnostic code (e.g., E2001)");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Generate options:");
    println!("  --package=<name>     Root package (default: com.example)");
    println!("  --class=<name>       Unit class name (default: ContextBootstrap)");
    println!("  --exclude=<name>     Skip an entity by name or type (repeatable)");
    println!("  -o <dir>             Output directory (default: generated)");
    println!("  --fail-on-skip       Exit non-zero when an entity is skipped");
    println!("  --color=<mode>       Diagnostics color: auto, always, never");
    println!();
    println!("Examples:");
    println!("  bootc generate snapshot.json");
    println!("  bootc generate snapshot.json --package=org.acme -o src/main/java");
    println!("  bootc explain W2002");
    println!();
    println!("Set RUST_LOG=boot_codegen=debug to trace generation decisions.");
}
