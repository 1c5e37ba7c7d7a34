//! Registration statements.
//!
//! Simple registration, for declared types without generics:
//!
//! ```text
//! context.registerBean("name", Type.class, <supplier>[, customizers...]);
//! ```
//!
//! Generic registration keeps the full target type:
//!
//! ```text
//! RootBeanDefinition nameBeanDef = new RootBeanDefinition();
//! nameBeanDef.setTargetType(<encoded type>);
//! nameBeanDef.setInstanceSupplier(<supplier>);
//! BeanDefinitionCustomizers.primary().customize(nameBeanDef);
//! context.registerBeanDefinition("name", nameBeanDef);
//! ```

use rustc_hash::FxHashSet;

use boot_ir::{well_known, EntityDefinition, Role};

use crate::java::identifier::{is_valid_name, uncapitalize};
use crate::java::literal::string_literal;
use crate::java::CodeBlock;
use crate::type_encoder::{class_literal, encode_type};

/// Which registration form an entity uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationKind {
    Simple,
    Generic,
}

impl RegistrationKind {
    pub fn of(entity: &EntityDefinition) -> Self {
        if entity.bean_type.carries_generics() {
            RegistrationKind::Generic
        } else {
            RegistrationKind::Simple
        }
    }
}

/// Local names already taken in one method.
#[derive(Debug, Default)]
pub struct LocalNames {
    used: FxHashSet<String>,
}

impl LocalNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// `stem`, or `stem2`, `stem3`, ... if taken.
    pub fn fresh(&mut self, stem: &str) -> String {
        let mut candidate = stem.to_owned();
        let mut counter = 1;
        while self.used.contains(&candidate) {
            counter += 1;
            candidate = format!("{stem}{counter}");
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// The identifier derived from an entity: its name when that is a valid
/// identifier, otherwise the simple name of its type, first letter lowered.
pub fn registration_id(entity: &EntityDefinition) -> String {
    if is_valid_name(&entity.name) {
        return uncapitalize(&entity.name);
    }
    match entity.user_type() {
        Some(ty) => uncapitalize(ty.simple_name()),
        None => "bean".to_owned(),
    }
}

/// Statements registering `entity` with the given supplier.
pub fn generate_registration(
    kind: RegistrationKind,
    entity: &EntityDefinition,
    supplier: &CodeBlock,
    locals: &mut LocalNames,
) -> Vec<CodeBlock> {
    match kind {
        RegistrationKind::Simple => vec![simple_registration(entity, supplier)],
        RegistrationKind::Generic => generic_registration(entity, supplier, locals),
    }
}

fn simple_registration(entity: &EntityDefinition, supplier: &CodeBlock) -> CodeBlock {
    let mut block = CodeBlock::of("context.registerBean(");
    block
        .push(&string_literal(&entity.name))
        .push(", ")
        .push_block(&class_literal(&entity.bean_type))
        .push(", ")
        .push_block(supplier);
    for customizer in customizers(entity) {
        block.push(", ").push_block(&customizer);
    }
    block.push(")");
    block
}

fn generic_registration(
    entity: &EntityDefinition,
    supplier: &CodeBlock,
    locals: &mut LocalNames,
) -> Vec<CodeBlock> {
    let variable = locals.fresh(&format!("{}BeanDef", registration_id(entity)));
    let definition = well_known::type_name(well_known::ROOT_BEAN_DEFINITION);

    let mut statements = vec![
        CodeBlock::new()
            .with_type(&definition)
            .with(&format!(" {variable} = new "))
            .with_type(&definition)
            .with("()"),
        CodeBlock::of(format!("{variable}.setTargetType("))
            .with_block(&encode_type(&entity.bean_type))
            .with(")"),
        CodeBlock::of(format!("{variable}.setInstanceSupplier("))
            .with_block(supplier)
            .with(")"),
    ];
    for customizer in customizers(entity) {
        statements.push(customizer.with(&format!(".customize({variable})")));
    }
    statements.push(CodeBlock::of(format!(
        "context.registerBeanDefinition({}, {variable})",
        string_literal(&entity.name)
    )));
    statements
}

/// `BeanDefinitionCustomizers` calls carrying the primary flag and role.
fn customizers(entity: &EntityDefinition) -> Vec<CodeBlock> {
    let customizers = well_known::type_name(well_known::BEAN_DEFINITION_CUSTOMIZERS);
    let mut out = Vec::new();
    if entity.primary {
        out.push(CodeBlock::new().with_type(&customizers).with(".primary()"));
    }
    if entity.role != Role::Application {
        out.push(
            CodeBlock::new()
                .with_type(&customizers)
                .with(&format!(".role({})", entity.role.value())),
        );
    }
    out
}

#[cfg(test)]
mod tests;
