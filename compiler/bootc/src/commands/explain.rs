//! The `explain` command: documentation for diagnostic codes.

use boot_diagnostic::{ErrorCode, ErrorDocs};

/// Look up the documentation for a code string.
pub fn explain_error(code_str: &str) -> Result<&'static str, String> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(format!(
            "unknown diagnostic code: {code_str}\n\n\
             Codes have the format EXXXX (errors) or WXXXX (warnings).\n\
             Examples: E1001, E2001, W2002"
        ));
    };
    ErrorDocs::get(code).ok_or_else(|| format!("no documentation available for {code_str}"))
}
