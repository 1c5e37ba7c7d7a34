//! Type descriptors as executable expressions.
//!
//! ```text
//! String                      String.class
//! int[]                       int[].class
//! Repository<String>          ResolvableType.forClassWithGenerics(Repository.class, String.class)
//! List<String>[]              ResolvableType.forArrayComponent(ResolvableType.forClassWithGenerics(...))
//! ?                           Object.class
//! ```
//!
//! Output depends on the descriptor alone.

use boot_ir::{well_known, TypeDescriptor};

use crate::java::CodeBlock;

/// Encode a descriptor as an expression reconstructing it at runtime.
pub fn encode_type(descriptor: &TypeDescriptor) -> CodeBlock {
    let mut block = CodeBlock::new();
    push_encoded(&mut block, descriptor);
    block
}

/// The erased class literal of a descriptor: `Foo.class`, `int[].class`.
pub fn class_literal(descriptor: &TypeDescriptor) -> CodeBlock {
    let mut block = CodeBlock::new();
    push_type_reference(&mut block, &descriptor.erased());
    block.push(".class");
    block
}

fn push_encoded(block: &mut CodeBlock, descriptor: &TypeDescriptor) {
    match descriptor {
        TypeDescriptor::Class { name, generics } if !generics.is_empty() => {
            block
                .push_type(&well_known::type_name(well_known::RESOLVABLE_TYPE))
                .push(".forClassWithGenerics(")
                .push_type(name)
                .push(".class");
            for generic in generics {
                block.push(", ");
                push_encoded(block, generic);
            }
            block.push(")");
        }
        TypeDescriptor::Array(component) if component.carries_generics() => {
            block
                .push_type(&well_known::type_name(well_known::RESOLVABLE_TYPE))
                .push(".forArrayComponent(");
            push_encoded(block, component);
            block.push(")");
        }
        _ => {
            block.push_block(&class_literal(descriptor));
        }
    }
}

/// Push the source spelling of an erased descriptor.
pub(crate) fn push_type_reference(block: &mut CodeBlock, descriptor: &TypeDescriptor) {
    match descriptor {
        TypeDescriptor::Primitive(kind) => {
            block.push(kind.keyword());
        }
        TypeDescriptor::Class { name, .. } => {
            block.push_type(name);
        }
        TypeDescriptor::Array(component) => {
            push_type_reference(block, component);
            block.push("[]");
        }
        TypeDescriptor::Wildcard => {
            block.push_type(&well_known::object());
        }
    }
}
