//! Boot IR - Container Snapshot Model
//!
//! This crate holds the data the bootstrap generator consumes: a read-only
//! snapshot of a fully resolved dependency-injection container.
//!
//! - Type names and descriptors (possibly generic, possibly arrays)
//! - A class catalog (modifiers, supertypes, constructors, methods)
//! - Entity definitions with their resolved construction inputs
//! - Listener factories and the runtime-type query
//!
//! # Contract
//!
//! The container collaborator resolves everything up front. Nothing in here
//! introspects a live runtime: construction strategies, argument values,
//! role and primary flags, and proxy targets are all explicit data.
//!
//! ```text
//! container (collaborator)
//!        │  resolves entities, records strategies
//!        ▼
//! ContainerSnapshot ──► boot_codegen ──► source units
//! ```

mod catalog;
mod descriptor;
mod entity;
mod name;
mod snapshot;
pub mod well_known;

pub use catalog::{
    ClassInfo, ConstructorInfo, ListenerDeclaration, MethodInfo, Modifiers, Parameter, TypeCatalog,
};
pub use descriptor::{PrimitiveKind, TypeDescriptor};
pub use entity::{
    ArgumentValue, BoundConstructor, BoundMethod, EntityDefinition, Executable, Role, RuntimeType,
};
pub use name::{TypeName, TypeNameError};
pub use snapshot::{
    ContainerSnapshot, InMemorySnapshot, ListenerFactory, ListenerSupport, SnapshotBuilder,
    TypeResolutionError, SCOPED_TARGET_PREFIX,
};
