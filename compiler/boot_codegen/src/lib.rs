//! Boot Codegen - Registration Code Synthesis
//!
//! Turns a [`ContainerSnapshot`](boot_ir::ContainerSnapshot) into Java source
//! units that re-register every entity without reflection.
//!
//! # Pipeline
//!
//! ```text
//! EntityDefinition
//!     │ selector        which constructor or factory method
//!     ▼
//! ValueWriter         supplier expression, dependencies, exception wrapping
//!     │ registration  simple registerBean or generic RootBeanDefinition form
//!     ▼
//! VisibilityPartitioner  main unit, or companion unit in the declaring package
//!     │
//!     ▼
//! SourceUnit ──► render() ──► `package/Name.java`
//! ```
//!
//! Event listener methods are collected separately and appended to the
//! main unit's bootstrap method.
//!
//! # Errors
//!
//! Per-entity failures are [`GenerationProblem`]s: the entity is skipped and
//! generation continues. A malformed snapshot or configuration is a
//! [`SnapshotError`] and aborts the run.

pub mod java;

mod dependency;
mod listener;
mod orchestrator;
mod problem;
mod registration;
mod selector;
mod type_encoder;
mod value_writer;
mod visibility;

pub use dependency::{DependencyKind, DependencyResolver, ParameterDependency};
pub use listener::{
    generate_listener_registrations, EventListenerExtractor, ListenerBinding, ListenerReport,
    ListenerScan,
};
pub use orchestrator::{
    EntityOutcome, GenerationOutput, Generator, GeneratorConfig, RegistrationPlan,
    BOOTSTRAP_METHOD,
};
pub use problem::{GenerationProblem, SnapshotError};
pub use registration::{generate_registration, registration_id, LocalNames, RegistrationKind};
pub use selector::{select, Selection, Strategy};
pub use type_encoder::{class_literal, encode_type};
pub use value_writer::{ValueWriter, WrittenValue};
pub use visibility::{Target, VisibilityPartitioner};
