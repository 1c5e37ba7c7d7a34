//! Java code model.
//!
//! Registration code is assembled as [`CodeBlock`]s, collected into
//! [`MethodSpec`]s and rendered through a [`SourceUnit`], which decides
//! imports once every type reference is known.

mod code_block;
mod emitter;
pub mod identifier;
mod imports;
pub mod literal;
mod unit;

pub use code_block::{CodeBlock, Segment, SimpleNames, TypeNamer};
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use imports::ImportTable;
pub use unit::{MethodSpec, SourceUnit};
