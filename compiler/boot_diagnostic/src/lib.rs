//! Diagnostic system for the bootstrap generator.
//!
//! - Error codes for searchability and `bootc explain`
//! - Clear messages (what went wrong)
//! - Subject (which entity it went wrong on)
//! - Notes and suggestions (why, and how to fix)
//!
//! The core never prints. It returns problems that convert into
//! [`Diagnostic`]s; the driver renders them through a [`DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
