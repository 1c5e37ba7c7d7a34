//! The `generate` command: snapshot in, source units out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use boot_codegen::{GenerationOutput, Generator, GeneratorConfig, SnapshotError};
use boot_diagnostic::{ColorMode, DiagnosticEmitter};
use boot_ir::InMemorySnapshot;
use tracing::{debug, info};

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "generated";

/// Options for `bootc generate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub snapshot: PathBuf,
    pub config: GeneratorConfig,
    pub output: PathBuf,
    /// Exit non-zero when any entity was skipped.
    pub fail_on_skip: bool,
    pub color: ColorMode,
}

impl GenerateOptions {
    pub fn new(snapshot: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            snapshot: snapshot.into(),
            config: GeneratorConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            fail_on_skip: false,
            color: ColorMode::Auto,
        }
    }
}

/// Parse the arguments following `generate`.
///
/// `-o` takes the next argument as its value; everything else is a
/// `--flag` or `--key=value`. The first positional argument is the snapshot.
pub fn parse_generate_options(args: &[String]) -> Result<GenerateOptions, String> {
    let mut snapshot = None;
    let mut config = GeneratorConfig::default();
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut fail_on_skip = false;
    let mut color = ColorMode::Auto;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let Some(dir) = args.get(i + 1) else {
                return Err("`-o` needs a directory".to_owned());
            };
            output = PathBuf::from(dir);
            i += 2;
            continue;
        }
        if let Some(dir) = arg.strip_prefix("--output=") {
            output = PathBuf::from(dir);
        } else if let Some(package) = arg.strip_prefix("--package=") {
            package.clone_into(&mut config.package);
        } else if let Some(class) = arg.strip_prefix("--class=") {
            class.clone_into(&mut config.unit_name);
        } else if let Some(exclude) = arg.strip_prefix("--exclude=") {
            config.excludes.push(exclude.to_owned());
        } else if arg == "--fail-on-skip" {
            fail_on_skip = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(format!("unknown color mode '{mode}'")),
            };
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if snapshot.is_none() {
            snapshot = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }

    let Some(snapshot) = snapshot else {
        return Err("missing snapshot path".to_owned());
    };
    Ok(GenerateOptions {
        snapshot,
        config,
        output,
        fail_on_skip,
        color,
    })
}

/// Failures that stop the driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read snapshot `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("cannot write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Files written, in unit order.
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    pub warnings: usize,
}

impl GenerateReport {
    /// Whether the run should fail the process.
    pub fn is_failure(&self, fail_on_skip: bool) -> bool {
        fail_on_skip && self.skipped > 0
    }
}

/// Read and deserialize a JSON snapshot.
pub fn load_snapshot(path: &Path) -> Result<InMemorySnapshot, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DriverError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Write every unit below `root`, creating package directories.
pub fn write_units(output: &GenerationOutput, root: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let mut written = Vec::with_capacity(output.units.len());
    for unit in output.units.values() {
        let path = root.join(unit.relative_path());
        let write_error = |source| DriverError::Write {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&path, unit.render()).map_err(write_error)?;
        debug!(path = %path.display(), "wrote unit");
        written.push(path);
    }
    Ok(written)
}

/// Run generation end to end, reporting problems through `emitter`.
///
/// A snapshot error is emitted as a diagnostic as well as returned; nothing
/// is written in that case.
pub fn run_generate(
    options: &GenerateOptions,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<GenerateReport, DriverError> {
    let snapshot = load_snapshot(&options.snapshot)?;
    let generator = Generator::new(options.config.clone());
    let output = match generator.generate(&snapshot) {
        Ok(output) => output,
        Err(error) => {
            emitter.emit(&error.into_diagnostic());
            emitter.flush();
            return Err(error.into());
        }
    };

    let diagnostics: Vec<_> = output
        .problems
        .iter()
        .map(boot_codegen::GenerationProblem::into_diagnostic)
        .collect();
    emitter.emit_all(&diagnostics);
    let errors = diagnostics.iter().filter(|diag| diag.is_error()).count();
    let warnings = diagnostics.len() - errors;
    emitter.emit_summary(errors, warnings);
    emitter.flush();

    let written = write_units(&output, &options.output)?;
    info!(
        units = written.len(),
        skipped = output.skipped_count(),
        "generation complete"
    );
    Ok(GenerateReport {
        written,
        skipped: output.skipped_count(),
        warnings,
    })
}

#[cfg(test)]
mod tests;
