//! Generation Problem Types
//!
//! Per-entity problems ([`GenerationProblem`]) never stop a run: the entity
//! is skipped or generated with a warning. Snapshot contract violations
//! ([`SnapshotError`]) are fatal and produce no output at all.
//!
//! Both convert into a [`Diagnostic`] for rendering by the driver.

use boot_diagnostic::{Diagnostic, ErrorCode};

/// Problem encountered while generating one entity or listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationProblem {
    // ── Registration Errors (E2xxx) ──────────────────────────────────
    /// No construction strategy could be selected.
    UnresolvedStrategy { entity: String, reason: String },

    /// An explicit argument value has no literal form.
    UnsupportedLiteral {
        entity: String,
        position: usize,
        value: String,
    },

    /// An explicit argument sits beyond the executable's parameters.
    ArgumentIndexOutOfRange {
        entity: String,
        position: usize,
        parameter_count: usize,
    },

    // ── Registration Warnings (W2xxx) ────────────────────────────────
    /// The container's raw executable was used as a last resort.
    RawExecutableFallback { entity: String, executable: String },

    /// The registration is not accessible from the root package and its
    /// declaring package is the root package itself.
    Unredirectable {
        entity: String,
        package: String,
        inaccessible: Vec<String>,
    },

    // ── Listener Warnings (W3xxx) ────────────────────────────────────
    /// The runtime type of a listener candidate could not be resolved.
    ListenerOwnerUnresolvable { entity: String, reason: String },
}

impl GenerationProblem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnresolvedStrategy { .. } => ErrorCode::E2001,
            Self::UnsupportedLiteral { .. } => ErrorCode::E2002,
            Self::ArgumentIndexOutOfRange { .. } => ErrorCode::E2003,
            Self::RawExecutableFallback { .. } => ErrorCode::W2001,
            Self::Unredirectable { .. } => ErrorCode::W2002,
            Self::ListenerOwnerUnresolvable { .. } => ErrorCode::W3001,
        }
    }

    /// The entity the problem concerns.
    pub fn entity(&self) -> &str {
        match self {
            Self::UnresolvedStrategy { entity, .. }
            | Self::UnsupportedLiteral { entity, .. }
            | Self::ArgumentIndexOutOfRange { entity, .. }
            | Self::RawExecutableFallback { entity, .. }
            | Self::Unredirectable { entity, .. }
            | Self::ListenerOwnerUnresolvable { entity, .. } => entity,
        }
    }

    /// Whether the entity was skipped because of this problem.
    pub fn is_error(&self) -> bool {
        !self.code().is_warning()
    }

    /// Convert this problem into a [`Diagnostic`].
    pub fn into_diagnostic(&self) -> Diagnostic {
        match self {
            // ── Registration Errors (E2xxx) ─────────────────────────
            Self::UnresolvedStrategy { entity, reason } => Diagnostic::error(ErrorCode::E2001)
                .with_message(format!("cannot determine how to construct `{entity}`"))
                .with_subject(entity.clone())
                .with_note(reason.clone())
                .with_suggestion("record a factory method or mark one constructor for injection"),

            Self::UnsupportedLiteral {
                entity,
                position,
                value,
            } => Diagnostic::error(ErrorCode::E2002)
                .with_message(format!(
                    "argument {position} of `{entity}` cannot be written as a literal"
                ))
                .with_subject(entity.clone())
                .with_note(format!("recorded value: {value}"))
                .with_suggestion(
                    "use a scalar, a string, a char[] or String[], or a reference to another bean",
                ),

            Self::ArgumentIndexOutOfRange {
                entity,
                position,
                parameter_count,
            } => Diagnostic::error(ErrorCode::E2003)
                .with_message(format!(
                    "argument {position} of `{entity}` is out of range"
                ))
                .with_subject(entity.clone())
                .with_note(format!(
                    "the selected executable takes {parameter_count} parameter(s)"
                )),

            // ── Registration Warnings (W2xxx) ───────────────────────
            Self::RawExecutableFallback { entity, executable } => {
                Diagnostic::warning(ErrorCode::W2001)
                    .with_message(format!(
                        "`{entity}` is constructed through the container's recorded executable"
                    ))
                    .with_subject(entity.clone())
                    .with_note(format!("using {executable}"))
            }

            Self::Unredirectable {
                entity,
                package,
                inaccessible,
            } => {
                let mut diag = Diagnostic::warning(ErrorCode::W2002)
                    .with_message(format!(
                        "`{entity}` is not accessible from the output package but cannot be redirected"
                    ))
                    .with_subject(entity.clone())
                    .with_note(format!("declaring package is the output package `{package}`"));
                if !inaccessible.is_empty() {
                    diag = diag.with_note(format!("inaccessible: {}", inaccessible.join(", ")));
                }
                diag
            }

            // ── Listener Warnings (W3xxx) ───────────────────────────
            Self::ListenerOwnerUnresolvable { entity, reason } => {
                Diagnostic::warning(ErrorCode::W3001)
                    .with_message(format!("listeners of `{entity}` were not scanned"))
                    .with_subject(entity.clone())
                    .with_note(reason.clone())
            }
        }
    }
}

/// Fatal violation of the snapshot contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("entity `{name}` is listed but has no definition")]
    MissingDefinition { name: String },

    #[error("entity name `{name}` is listed more than once")]
    DuplicateName { name: String },

    #[error("entity at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("`{package}` is not a valid package name")]
    InvalidPackage { package: String },

    #[error("`{name}` is not a valid class name")]
    InvalidUnitName { name: String },
}

impl SnapshotError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingDefinition { .. } => ErrorCode::E1001,
            Self::DuplicateName { .. } => ErrorCode::E1002,
            Self::EmptyName { .. } => ErrorCode::E1003,
            Self::InvalidPackage { .. } => ErrorCode::E1004,
            Self::InvalidUnitName { .. } => ErrorCode::E1005,
        }
    }

    /// Convert this error into a [`Diagnostic`].
    pub fn into_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            Self::MissingDefinition { name } | Self::DuplicateName { name } => {
                diag.with_subject(name.clone())
            }
            Self::EmptyName { .. } => diag,
            Self::InvalidPackage { .. } => {
                diag.with_suggestion("use dot-separated identifiers, e.g. `com.example`")
            }
            Self::InvalidUnitName { .. } => {
                diag.with_suggestion("use a single identifier that is not a keyword")
            }
        }
    }
}

#[cfg(test)]
mod tests;
