//! The generation pipeline.
//!
//! ```text
//! for each entity (container order):
//!     excluded? ──► Excluded
//!     select ──► write value ──► place ──► register
//!                                  │
//!                 main unit ◄──────┴──────► companion unit + forwarding call
//! then: listener extraction over registered entities
//!     accessible bindings ──► main unit
//!     the rest ──► companion `registerListeners` per owner package
//! ```
//!
//! Per-entity failures are recorded and the run continues. Only snapshot
//! contract violations abort it.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use boot_ir::{well_known, ContainerSnapshot, EntityDefinition, TypeCatalog};

use crate::java::identifier::{is_valid_name, is_valid_package};
use crate::java::{MethodSpec, SourceUnit};
use crate::listener::{
    generate_listener_registrations, EventListenerExtractor, ListenerBinding, ListenerReport,
};
use crate::problem::{GenerationProblem, SnapshotError};
use crate::registration::{generate_registration, registration_id, LocalNames, RegistrationKind};
use crate::selector::{select, Selection, Strategy};
use crate::value_writer::WrittenValue;
use crate::visibility::{Target, VisibilityPartitioner};

/// Name of the main unit's entry method.
pub const BOOTSTRAP_METHOD: &str = "bootstrap";

/// Id of companion methods holding redirected listener registrations.
const LISTENERS_ID: &str = "listeners";

/// Where and how code is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root package of the main unit.
    pub package: String,
    /// Class name of the main unit and of every companion unit.
    pub unit_name: String,
    /// Entity names or type names to leave out.
    pub excludes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            package: "com.example".to_owned(),
            unit_name: "ContextBootstrap".to_owned(),
            excludes: vec![well_known::CONFIGURATION_CLASS_POST_PROCESSOR.to_owned()],
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for another root package.
    pub fn new(package: impl Into<String>) -> Self {
        GeneratorConfig {
            package: package.into(),
            ..GeneratorConfig::default()
        }
    }

    #[must_use]
    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = unit_name.into();
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.excludes.push(exclude.into());
        self
    }

    /// Whether `entity` is left out, by name or by user type.
    ///
    /// The configuration class post-processor is always excluded.
    pub fn is_excluded(&self, entity: &EntityDefinition) -> bool {
        let mut candidates = vec![entity.name.clone()];
        if let Some(ty) = entity.user_type() {
            candidates.push(ty.canonical_name());
            candidates.push(ty.binary_name());
        }
        candidates.iter().any(|candidate| {
            candidate == well_known::CONFIGURATION_CLASS_POST_PROCESSOR
                || self.excludes.iter().any(|exclude| exclude == candidate)
        })
    }
}

/// What happened to one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityOutcome {
    RegisteredInMain,
    Redirected { package: String, method: String },
    Excluded,
    Skipped(GenerationProblem),
}

/// Everything decided for one entity before statements are emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationPlan {
    pub selection: Selection,
    pub value: WrittenValue,
    pub kind: RegistrationKind,
    pub target: Target,
}

/// The result of one run.
#[derive(Clone, Debug)]
pub struct GenerationOutput {
    /// Units keyed by `(package, class name)`.
    pub units: BTreeMap<(String, String), SourceUnit>,
    /// One outcome per entity, in container order.
    pub outcomes: Vec<(String, EntityOutcome)>,
    pub listeners: ListenerReport,
    /// Errors and warnings, in the order they arose.
    pub problems: Vec<GenerationProblem>,
    main: (String, String),
}

impl GenerationOutput {
    pub fn main_unit(&self) -> Option<&SourceUnit> {
        self.units.get(&self.main)
    }

    /// Units other than the main one.
    pub fn companion_units(&self) -> impl Iterator<Item = &SourceUnit> {
        self.units
            .iter()
            .filter(|(key, _)| **key != self.main)
            .map(|(_, unit)| unit)
    }

    pub fn outcome(&self, entity: &str) -> Option<&EntityOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| name == entity)
            .map(|(_, outcome)| outcome)
    }

    /// Number of entities skipped because of an error.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, EntityOutcome::Skipped(_)))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.problems.iter().filter(|problem| !problem.is_error()).count()
    }
}

/// Registration code generator.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the bootstrap units for `snapshot`.
    #[tracing::instrument(level = "debug", skip_all, fields(package = %self.config.package))]
    pub fn generate(
        &self,
        snapshot: &dyn ContainerSnapshot,
    ) -> Result<GenerationOutput, SnapshotError> {
        self.validate(snapshot)?;

        let catalog = snapshot.catalog();
        let package = self.config.package.as_str();
        let unit_name = self.config.unit_name.as_str();
        let mut partitioner = VisibilityPartitioner::new(catalog, package, unit_name);
        let mut bootstrap = MethodSpec::new(BOOTSTRAP_METHOD).with_parameter(
            well_known::type_name(well_known::GENERIC_APPLICATION_CONTEXT),
            "context",
        );
        let mut locals = LocalNames::new();
        let mut outcomes = Vec::with_capacity(snapshot.entity_names().len());
        let mut problems = Vec::new();
        let mut registered = Vec::with_capacity(snapshot.entity_names().len());

        for name in snapshot.entity_names() {
            let Some(entity) = snapshot.entity(name) else {
                continue;
            };
            if self.config.is_excluded(entity) {
                debug!(entity = %name, "excluded");
                outcomes.push((name.clone(), EntityOutcome::Excluded));
                continue;
            }

            let plan = match plan_registration(entity, catalog, &partitioner) {
                Ok(plan) => plan,
                Err(problem) => {
                    warn!(entity = %name, code = %problem.code(), "entity skipped");
                    problems.push(problem.clone());
                    outcomes.push((name.clone(), EntityOutcome::Skipped(problem)));
                    continue;
                }
            };
            debug!(
                entity = %name,
                strategy = ?plan.selection.strategy,
                kind = ?plan.kind,
                target = ?plan.target,
                "planned registration"
            );

            if plan.selection.strategy == Strategy::RawExecutable {
                problems.push(GenerationProblem::RawExecutableFallback {
                    entity: name.clone(),
                    executable: plan.selection.writer.describe(),
                });
            }

            let outcome = match plan.target {
                Target::Main => {
                    bootstrap.extend_statements(generate_registration(
                        plan.kind,
                        entity,
                        &plan.value.supplier,
                        &mut locals,
                    ));
                    EntityOutcome::RegisteredInMain
                }
                Target::Unredirectable {
                    package,
                    inaccessible,
                } => {
                    warn!(entity = %name, "inaccessible registration kept in main unit");
                    problems.push(GenerationProblem::Unredirectable {
                        entity: name.clone(),
                        package,
                        inaccessible,
                    });
                    bootstrap.extend_statements(generate_registration(
                        plan.kind,
                        entity,
                        &plan.value.supplier,
                        &mut locals,
                    ));
                    EntityOutcome::RegisteredInMain
                }
                Target::Companion { package } => {
                    let statements = generate_registration(
                        plan.kind,
                        entity,
                        &plan.value.supplier,
                        &mut LocalNames::new(),
                    );
                    let (method, call) =
                        partitioner.redirect(&package, &registration_id(entity), statements);
                    bootstrap.add_statement(call);
                    EntityOutcome::Redirected { package, method }
                }
            };
            registered.push(name);
            outcomes.push((name.clone(), outcome));
        }

        // Only entities the bootstrap registers can own listeners.
        let listeners = EventListenerExtractor::new(snapshot).extract(registered);
        for (entity, reason) in listeners.skipped() {
            warn!(entity, reason, "listener scan skipped");
            problems.push(GenerationProblem::ListenerOwnerUnresolvable {
                entity: entity.to_owned(),
                reason: reason.to_owned(),
            });
        }

        let mut in_main: Vec<&ListenerBinding> = Vec::new();
        let mut redirected: BTreeMap<String, Vec<&ListenerBinding>> = BTreeMap::new();
        for binding in listeners.bindings() {
            match partitioner.listener_target(binding) {
                Target::Main => in_main.push(binding),
                Target::Unredirectable {
                    package,
                    inaccessible,
                } => {
                    warn!(
                        entity = %binding.entity,
                        method = %binding.method,
                        "inaccessible listener kept in main unit"
                    );
                    problems.push(GenerationProblem::Unredirectable {
                        entity: binding.entity.clone(),
                        package,
                        inaccessible,
                    });
                    in_main.push(binding);
                }
                Target::Companion { package } => {
                    redirected.entry(package).or_default().push(binding);
                }
            }
        }
        bootstrap.extend_statements(generate_listener_registrations(in_main, &mut locals));
        for (package, bindings) in redirected {
            debug!(
                package = %package,
                listeners = bindings.len(),
                "redirected listener registrations"
            );
            let statements = generate_listener_registrations(bindings, &mut LocalNames::new());
            let (_, call) = partitioner.redirect(&package, LISTENERS_ID, statements);
            bootstrap.add_statement(call);
        }

        let main_key = (package.to_owned(), unit_name.to_owned());
        let mut main_unit = SourceUnit::new(package, unit_name);
        main_unit.add_method(bootstrap);
        let mut units = BTreeMap::new();
        units.insert(main_key.clone(), main_unit);
        for unit in partitioner.into_units() {
            units.insert((unit.package().to_owned(), unit.name().to_owned()), unit);
        }

        debug!(
            entities = outcomes.len(),
            units = units.len(),
            problems = problems.len(),
            "generation finished"
        );
        Ok(GenerationOutput {
            units,
            outcomes,
            listeners,
            problems,
            main: main_key,
        })
    }

    /// Check the configuration and the snapshot's name list.
    fn validate(&self, snapshot: &dyn ContainerSnapshot) -> Result<(), SnapshotError> {
        if !is_valid_package(&self.config.package) {
            return Err(SnapshotError::InvalidPackage {
                package: self.config.package.clone(),
            });
        }
        if !is_valid_name(&self.config.unit_name) {
            return Err(SnapshotError::InvalidUnitName {
                name: self.config.unit_name.clone(),
            });
        }

        let mut seen = FxHashSet::default();
        for (position, name) in snapshot.entity_names().iter().enumerate() {
            if name.is_empty() {
                return Err(SnapshotError::EmptyName { position });
            }
            if !seen.insert(name.as_str()) {
                return Err(SnapshotError::DuplicateName { name: name.clone() });
            }
            if snapshot.entity(name).is_none() {
                return Err(SnapshotError::MissingDefinition { name: name.clone() });
            }
        }
        Ok(())
    }
}

/// Select, write and place one entity.
fn plan_registration(
    entity: &EntityDefinition,
    catalog: &TypeCatalog,
    partitioner: &VisibilityPartitioner<'_>,
) -> Result<RegistrationPlan, GenerationProblem> {
    let selection = select(entity, catalog)?;
    let value = selection.writer.write(entity, catalog)?;
    let kind = RegistrationKind::of(entity);
    let target = partitioner.target(entity, &selection.writer, &value.supplier);
    Ok(RegistrationPlan {
        selection,
        value,
        kind,
        target,
    })
}
