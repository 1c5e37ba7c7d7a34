//! Parameter dependencies: how a constructor or factory parameter gets its
//! value at registration time.
//!
//! Checks run in a fixed order on the parameter's raw class:
//!
//! ```text
//! ObjectProvider<T> (or subtype)            context.getBeanProvider(<T>)
//! supertype of GenericApplicationContext    context
//! supertype of ConfigurableListableBeanFactory
//!                                           context.getBeanFactory()
//! supertype of ConfigurableEnvironment      context.getEnvironment()
//! Collection<T> (or subtype)                context.getBeanProvider(<T>).orderedStream().collect(Collectors.toList())
//! anything else                             context.getBean(Raw.class)
//! ```

use boot_ir::{well_known, TypeCatalog, TypeDescriptor};

use crate::java::CodeBlock;
use crate::type_encoder::{class_literal, encode_type};

/// How a parameter value is obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    DirectLookup,
    LazyProvider,
    OrderedCollection,
    ContainerSelf,
    ContainerRegistry,
    Environment,
    /// An explicit value recorded by the container.
    Literal,
}

/// One resolved parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDependency {
    pub position: usize,
    pub ty: TypeDescriptor,
    pub kind: DependencyKind,
}

/// Maps parameter types to access expressions. Never fails.
pub struct DependencyResolver<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        DependencyResolver { catalog }
    }

    /// Classify a parameter type.
    pub fn classify(&self, ty: &TypeDescriptor) -> DependencyKind {
        let erased = ty.erased();
        let Some(raw) = erased.class_name() else {
            return DependencyKind::DirectLookup;
        };
        let is_subtype_of = |binary: &str| self.catalog.is_subtype(raw, &well_known::type_name(binary));
        let is_supertype_of =
            |binary: &str| self.catalog.is_subtype(&well_known::type_name(binary), raw);

        if is_subtype_of(well_known::OBJECT_PROVIDER) {
            DependencyKind::LazyProvider
        } else if is_supertype_of(well_known::GENERIC_APPLICATION_CONTEXT) {
            DependencyKind::ContainerSelf
        } else if is_supertype_of(well_known::CONFIGURABLE_LISTABLE_BEAN_FACTORY) {
            DependencyKind::ContainerRegistry
        } else if is_supertype_of(well_known::CONFIGURABLE_ENVIRONMENT) {
            DependencyKind::Environment
        } else if is_subtype_of(well_known::COLLECTION) {
            DependencyKind::OrderedCollection
        } else {
            DependencyKind::DirectLookup
        }
    }

    /// Resolve the parameter at `position` to its dependency and expression.
    pub fn resolve(&self, position: usize, ty: &TypeDescriptor) -> (ParameterDependency, CodeBlock) {
        let kind = self.classify(ty);
        let expression = match kind {
            DependencyKind::LazyProvider => CodeBlock::of("context.getBeanProvider(")
                .with_block(&encode_type(&element_type(ty)))
                .with(")"),
            DependencyKind::ContainerSelf => CodeBlock::of("context"),
            DependencyKind::ContainerRegistry => CodeBlock::of("context.getBeanFactory()"),
            DependencyKind::Environment => CodeBlock::of("context.getEnvironment()"),
            DependencyKind::OrderedCollection => CodeBlock::of("context.getBeanProvider(")
                .with_block(&encode_type(&element_type(ty)))
                .with(").orderedStream().collect(")
                .with_type(&well_known::type_name(well_known::COLLECTORS))
                .with(".toList())"),
            DependencyKind::DirectLookup | DependencyKind::Literal => CodeBlock::of("context.getBean(")
                .with_block(&class_literal(ty))
                .with(")"),
        };
        let dependency = ParameterDependency {
            position,
            ty: ty.clone(),
            kind,
        };
        (dependency, expression)
    }
}

/// The first type argument, or `Object` when absent.
fn element_type(ty: &TypeDescriptor) -> TypeDescriptor {
    ty.generic_argument(0)
        .cloned()
        .unwrap_or_else(|| TypeDescriptor::class(well_known::object()))
}
