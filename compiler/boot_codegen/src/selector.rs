//! Value writer selection.
//!
//! The container records what it resolved; selection only reads it back in
//! a fixed order:
//!
//! 1. the resolved factory method;
//! 2. a factory method name with exactly one such method on the factory
//!    class (or bean class);
//! 3. the sole constructor of the bean class;
//! 4. the constructor marked for injection;
//! 5. the raw executable the container last used (reported as a warning).
//!
//! A factory method name that does not resolve to a single method rules out
//! steps 3 and 4.

use boot_ir::{ClassInfo, EntityDefinition, Executable, TypeCatalog, TypeName};

use crate::problem::GenerationProblem;
use crate::value_writer::ValueWriter;

/// Which rule produced the writer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    ResolvedFactoryMethod,
    NamedFactoryMethod,
    SoleConstructor,
    InjectionConstructor,
    RawExecutable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub writer: ValueWriter,
    pub strategy: Strategy,
}

/// Choose the value writer for `entity`.
pub fn select(entity: &EntityDefinition, catalog: &TypeCatalog) -> Result<Selection, GenerationProblem> {
    let failure = match select_recorded(entity, catalog) {
        Ok(selection) => return Ok(selection),
        Err(reason) => reason,
    };

    if let Some(executable) = &entity.resolved_executable {
        let writer = match executable {
            Executable::Constructor(bound) => ValueWriter::Constructor {
                declaring: bound.declaring.clone(),
                constructor: bound.constructor.clone(),
            },
            Executable::Method(bound) => ValueWriter::FactoryMethod {
                declaring: bound.declaring.clone(),
                method: bound.method.clone(),
            },
        };
        return Ok(Selection {
            writer,
            strategy: Strategy::RawExecutable,
        });
    }

    Err(GenerationProblem::UnresolvedStrategy {
        entity: entity.name.clone(),
        reason: failure,
    })
}

/// Steps 1 to 4. On failure, the reason the last applicable step gave.
fn select_recorded(entity: &EntityDefinition, catalog: &TypeCatalog) -> Result<Selection, String> {
    if let Some(bound) = &entity.factory_method {
        return Ok(Selection {
            writer: ValueWriter::FactoryMethod {
                declaring: bound.declaring.clone(),
                method: bound.method.clone(),
            },
            strategy: Strategy::ResolvedFactoryMethod,
        });
    }

    if let Some(name) = &entity.factory_method_name {
        let owner = entity
            .factory_class
            .as_ref()
            .or(entity.bean_class.as_ref())
            .ok_or_else(|| format!("factory method `{name}` has no factory class"))?;
        let class = lookup(catalog, owner)?;
        let mut candidates = class.methods_named(name);
        return match (candidates.next(), candidates.next()) {
            (Some(method), None) => Ok(Selection {
                writer: ValueWriter::FactoryMethod {
                    declaring: class.name.clone(),
                    method: method.clone(),
                },
                strategy: Strategy::NamedFactoryMethod,
            }),
            (None, _) => Err(format!("`{owner}` declares no method named `{name}`")),
            (Some(_), Some(_)) => Err(format!(
                "`{owner}` declares several methods named `{name}`"
            )),
        };
    }

    let bean_class = entity
        .instantiated_class()
        .ok_or_else(|| "no bean class is recorded".to_owned())?;
    let class = lookup(catalog, bean_class)?;
    match class.constructors.as_slice() {
        [] => Err(format!("`{bean_class}` declares no constructors")),
        [sole] => Ok(Selection {
            writer: ValueWriter::Constructor {
                declaring: class.name.clone(),
                constructor: sole.clone(),
            },
            strategy: Strategy::SoleConstructor,
        }),
        several => several
            .iter()
            .find(|constructor| constructor.inject)
            .map(|constructor| Selection {
                writer: ValueWriter::Constructor {
                    declaring: class.name.clone(),
                    constructor: constructor.clone(),
                },
                strategy: Strategy::InjectionConstructor,
            })
            .ok_or_else(|| {
                format!(
                    "`{bean_class}` declares {} constructors and none is marked for injection",
                    several.len()
                )
            }),
    }
}

/// Catalog lookup that falls back to the user class of generated subclasses.
fn lookup<'a>(catalog: &'a TypeCatalog, name: &TypeName) -> Result<&'a ClassInfo, String> {
    catalog
        .get(name)
        .or_else(|| catalog.get(&name.user_class()))
        .ok_or_else(|| format!("`{name}` is not in the class catalog"))
}
