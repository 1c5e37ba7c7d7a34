//! Visibility partitioning.
//!
//! Generated code lives in the root package. A registration that names a
//! type or executable the root package cannot see is moved into a companion
//! unit in the declaring type's package, and the main unit calls it:
//!
//! ```text
//! com.example.ContextBootstrap              com.example.scan.ContextBootstrap
//!   bootstrap(context)                        registerHidden(context)
//!     com.example.scan.ContextBootstrap  ──►    context.registerBean("hidden", ...)
//!       .registerHidden(context)
//! ```
//!
//! One companion exists per package; it is created on first use.

use std::collections::BTreeMap;

use boot_ir::{well_known, EntityDefinition, TypeCatalog, TypeName};

use crate::java::identifier::capitalize;
use crate::java::{CodeBlock, MethodSpec, SourceUnit};
use crate::listener::ListenerBinding;
use crate::value_writer::ValueWriter;

/// Where a registration goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Main,
    Companion { package: String },
    /// Inaccessible, but the declaring package is the root package.
    Unredirectable {
        package: String,
        inaccessible: Vec<String>,
    },
}

/// Decides placement and owns the companion units of one run.
pub struct VisibilityPartitioner<'a> {
    catalog: &'a TypeCatalog,
    root_package: &'a str,
    unit_name: &'a str,
    companions: BTreeMap<String, SourceUnit>,
}

impl<'a> VisibilityPartitioner<'a> {
    pub fn new(catalog: &'a TypeCatalog, root_package: &'a str, unit_name: &'a str) -> Self {
        VisibilityPartitioner {
            catalog,
            root_package,
            unit_name,
            companions: BTreeMap::new(),
        }
    }

    /// Everything the registration names that the root package cannot see.
    ///
    /// Types are listed by canonical name, an inaccessible executable by
    /// its signature.
    pub fn inaccessible(
        &self,
        entity: &EntityDefinition,
        writer: &ValueWriter,
        supplier: &CodeBlock,
    ) -> Vec<String> {
        let mut types = Vec::new();
        entity.bean_type.collect_type_names(&mut types);
        types.extend(supplier.type_names().cloned());

        let mut out: Vec<String> = Vec::new();
        for ty in types {
            let user = ty.user_class();
            if !self.catalog.is_accessible_from(&user, self.root_package) {
                let name = user.canonical_name();
                if !out.contains(&name) {
                    out.push(name);
                }
            }
        }

        let declaring = writer.declaring_type();
        if !writer
            .modifiers()
            .is_accessible(declaring.package(), self.root_package)
        {
            out.push(writer.describe());
        }
        out
    }

    /// Decide where the registration of `entity` belongs.
    pub fn target(
        &self,
        entity: &EntityDefinition,
        writer: &ValueWriter,
        supplier: &CodeBlock,
    ) -> Target {
        let inaccessible = self.inaccessible(entity, writer, supplier);
        if inaccessible.is_empty() {
            return Target::Main;
        }
        let package = writer.declaring_type().package().to_owned();
        if package == self.root_package || package.is_empty() {
            Target::Unredirectable {
                package,
                inaccessible,
            }
        } else {
            Target::Companion { package }
        }
    }

    /// Decide where the register call of a listener binding belongs.
    ///
    /// A binding naming an inaccessible type moves to the owner's package.
    pub fn listener_target(&self, binding: &ListenerBinding) -> Target {
        let mut inaccessible: Vec<String> = Vec::new();
        for ty in binding.type_names() {
            if !self.catalog.is_accessible_from(&ty, self.root_package) {
                let name = ty.user_class().canonical_name();
                if !inaccessible.contains(&name) {
                    inaccessible.push(name);
                }
            }
        }
        if inaccessible.is_empty() {
            return Target::Main;
        }
        let package = binding.owner.package().to_owned();
        if package == self.root_package || package.is_empty() {
            Target::Unredirectable {
                package,
                inaccessible,
            }
        } else {
            Target::Companion { package }
        }
    }

    /// Move statements into the companion unit of `package`.
    ///
    /// Returns the forwarding method's name and the call the main unit
    /// makes.
    pub fn redirect(&mut self, package: &str, id: &str, statements: Vec<CodeBlock>) -> (String, CodeBlock) {
        let unit_name = self.unit_name;
        let unit = self
            .companions
            .entry(package.to_owned())
            .or_insert_with(|| SourceUnit::new(package, unit_name));

        let stem = format!("register{}", capitalize(id));
        let mut method_name = stem.clone();
        let mut counter = 1;
        while unit.has_method(&method_name) {
            counter += 1;
            method_name = format!("{stem}{counter}");
        }

        let mut method = MethodSpec::new_static(method_name.as_str()).with_parameter(
            well_known::type_name(well_known::GENERIC_APPLICATION_CONTEXT),
            "context",
        );
        method.extend_statements(statements);
        unit.add_method(method);

        let call = CodeBlock::new()
            .with_type(&TypeName::new(package, unit_name))
            .with(&format!(".{method_name}(context)"));
        (method_name, call)
    }

    /// Companion units, ordered by package.
    pub fn into_units(self) -> impl Iterator<Item = SourceUnit> {
        self.companions.into_values()
    }
}
