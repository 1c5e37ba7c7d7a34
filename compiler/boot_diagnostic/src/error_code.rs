//! Error codes for all generator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2001`) with the first digit
//! indicating the stage. Used for `bootc explain` lookups and documentation.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### / W#### where the first digit indicates the stage:
/// - E1xxx: Snapshot contract violations (fatal)
/// - E2xxx: Per-entity registration failures (entity skipped)
/// - W2xxx: Registration warnings (entity still generated)
/// - W3xxx: Listener extraction warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Snapshot Errors (E1xxx)
    /// Entity name listed without a definition
    E1001,
    /// Duplicate entity name
    E1002,
    /// Empty entity name
    E1003,
    /// Invalid output package name
    E1004,
    /// Invalid main unit name
    E1005,

    // Registration Errors (E2xxx)
    /// Unresolved construction strategy
    E2001,
    /// Unsupported literal argument value
    E2002,
    /// Argument index beyond the parameter count
    E2003,

    // Registration Warnings (W2xxx)
    /// Raw executable used as a last-resort strategy
    W2001,
    /// Inaccessible registration kept in the main unit
    W2002,

    // Listener Warnings (W3xxx)
    /// Listener owner type could not be resolved
    W3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        // Snapshot
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        // Registration
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        // Warnings
        ErrorCode::W2001,
        ErrorCode::W2002,
        ErrorCode::W3001,
    ];

    /// Get the code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Snapshot
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Registration
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            // Warnings
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
            ErrorCode::W3001 => "W3001",
        }
    }

    /// Check if this is a snapshot contract violation (E1xxx range).
    pub fn is_snapshot_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is a per-entity registration error (E2xxx range).
    pub fn is_registration_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W2001 | ErrorCode::W2002 | ErrorCode::W3001)
    }

    /// Check if this warning concerns listener extraction (W3xxx range).
    pub fn is_listener_warning(&self) -> bool {
        matches!(self, ErrorCode::W3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"` or `"w2002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
