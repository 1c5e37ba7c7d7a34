//! The container snapshot: the generator's only input.
//!
//! [`ContainerSnapshot`] is the seam between the container collaborator and
//! the generator. [`InMemorySnapshot`] is the owned implementation that the
//! driver deserializes from JSON and that tests build with
//! [`SnapshotBuilder`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{ClassInfo, MethodInfo, TypeCatalog};
use crate::entity::{EntityDefinition, RuntimeType};
use crate::name::TypeName;
use crate::well_known;

/// Name prefix of the hidden target behind a scoped proxy.
pub const SCOPED_TARGET_PREFIX: &str = "scopedTarget.";

/// Why the runtime type of an entity could not be determined.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeResolutionError {
    #[error("no entity named `{0}`")]
    UnknownEntity(String),
    #[error("cannot determine the type of `{name}`: {reason}")]
    Unresolvable { name: String, reason: String },
}

/// Which listener methods a factory accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerSupport {
    /// Any method carrying a listener declaration.
    #[default]
    Any,
    /// Only methods whose listener annotation is one of these.
    Annotations(Vec<TypeName>),
}

/// A named factory turning listener methods into registered listeners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerFactory {
    pub name: String,
    #[serde(default)]
    pub supports: ListenerSupport,
}

impl ListenerFactory {
    /// The factory every container registers.
    pub fn default_factory() -> Self {
        ListenerFactory {
            name: well_known::DEFAULT_LISTENER_FACTORY.to_owned(),
            supports: ListenerSupport::Any,
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == well_known::DEFAULT_LISTENER_FACTORY
    }

    /// Whether this factory can bind the given method.
    pub fn supports(&self, method: &MethodInfo) -> bool {
        let Some(listener) = &method.listener else {
            return false;
        };
        match &self.supports {
            ListenerSupport::Any => true,
            ListenerSupport::Annotations(annotations) => annotations.contains(&listener.annotation),
        }
    }
}

/// Read-only view of a fully resolved container.
pub trait ContainerSnapshot {
    /// Entity names in the container's enumeration order.
    fn entity_names(&self) -> &[String];

    /// The definition registered under `name`.
    fn entity(&self, name: &str) -> Option<&EntityDefinition>;

    fn catalog(&self) -> &TypeCatalog;

    /// Listener factories in declaration order.
    fn listener_factories(&self) -> &[ListenerFactory];

    /// The class behind an entity at runtime, following proxy targets.
    ///
    /// `Ok(None)` means the entity has no class to speak of.
    fn target_type(&self, name: &str) -> Result<Option<TypeName>, TypeResolutionError> {
        let entity = self
            .entity(name)
            .ok_or_else(|| TypeResolutionError::UnknownEntity(name.to_owned()))?;
        match &entity.runtime_type {
            RuntimeType::Declared => Ok(entity.instantiated_class().cloned()),
            RuntimeType::Target { class } => Ok(Some(class.clone())),
            RuntimeType::Unresolvable { reason } => Err(TypeResolutionError::Unresolvable {
                name: name.to_owned(),
                reason: reason.clone(),
            }),
        }
    }
}

/// An owned snapshot.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "SnapshotFile")]
pub struct InMemorySnapshot {
    names: Vec<String>,
    entities: Vec<EntityDefinition>,
    index: FxHashMap<String, usize>,
    catalog: TypeCatalog,
    listener_factories: Vec<ListenerFactory>,
}

impl InMemorySnapshot {
    /// Build a snapshot from entities in enumeration order.
    ///
    /// Duplicate names are kept in the name list so validation can report
    /// them; lookups resolve to the first occurrence.
    pub fn new(
        entities: Vec<EntityDefinition>,
        catalog: TypeCatalog,
        listener_factories: Vec<ListenerFactory>,
    ) -> Self {
        let names = entities.iter().map(|entity| entity.name.clone()).collect();
        let mut index = FxHashMap::default();
        for (i, entity) in entities.iter().enumerate() {
            index.entry(entity.name.clone()).or_insert(i);
        }
        InMemorySnapshot {
            names,
            entities,
            index,
            catalog,
            listener_factories,
        }
    }

    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// Append a name to the enumeration order without a definition.
    ///
    /// Mirrors a container whose name list and registry disagree.
    #[must_use]
    pub fn with_dangling_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }
}

impl ContainerSnapshot for InMemorySnapshot {
    fn entity_names(&self) -> &[String] {
        &self.names
    }

    fn entity(&self, name: &str) -> Option<&EntityDefinition> {
        self.index.get(name).map(|&i| &self.entities[i])
    }

    fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    fn listener_factories(&self) -> &[ListenerFactory] {
        &self.listener_factories
    }
}

#[derive(Deserialize)]
struct SnapshotFile {
    entities: Vec<EntityDefinition>,
    #[serde(default)]
    classes: Vec<ClassInfo>,
    #[serde(default = "default_listener_factories")]
    listener_factories: Vec<ListenerFactory>,
}

fn default_listener_factories() -> Vec<ListenerFactory> {
    vec![ListenerFactory::default_factory()]
}

impl From<SnapshotFile> for InMemorySnapshot {
    fn from(file: SnapshotFile) -> Self {
        InMemorySnapshot::new(
            file.entities,
            file.classes.into_iter().collect(),
            file.listener_factories,
        )
    }
}

/// Incremental construction of an [`InMemorySnapshot`].
#[derive(Debug)]
pub struct SnapshotBuilder {
    entities: Vec<EntityDefinition>,
    catalog: TypeCatalog,
    listener_factories: Vec<ListenerFactory>,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    /// An empty snapshot with the default listener factory.
    pub fn new() -> Self {
        SnapshotBuilder {
            entities: Vec::new(),
            catalog: TypeCatalog::new(),
            listener_factories: default_listener_factories(),
        }
    }

    #[must_use]
    pub fn entity(mut self, entity: EntityDefinition) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn class(mut self, class: ClassInfo) -> Self {
        self.catalog.insert(class);
        self
    }

    /// Replace the listener factories.
    #[must_use]
    pub fn listener_factories(mut self, factories: Vec<ListenerFactory>) -> Self {
        self.listener_factories = factories;
        self
    }

    pub fn build(self) -> InMemorySnapshot {
        InMemorySnapshot::new(self.entities, self.catalog, self.listener_factories)
    }
}
