//! Value writers: the lazy construction expression of an entity.
//!
//! ```text
//! constructor, no parameters      Foo::new
//! constructor                     () -> new Foo(a, b)
//! static factory method           () -> Config.foo(a, b)
//! instance factory method         () -> context.getBean(Config.class).foo(a, b)
//! ```
//!
//! Each parameter is resolved through the [`DependencyResolver`] unless the
//! container recorded an explicit value at that position. Executables that
//! declare checked exceptions are wrapped in
//! `ExceptionHandler.wrapException(...)`.

mod literal;

use boot_ir::{
    well_known, ConstructorInfo, EntityDefinition, MethodInfo, Modifiers, Parameter, TypeCatalog,
    TypeName,
};

use crate::dependency::{DependencyKind, DependencyResolver, ParameterDependency};
use crate::java::CodeBlock;
use crate::problem::GenerationProblem;
use crate::type_encoder::push_type_reference;

/// The executable an entity is built with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueWriter {
    Constructor {
        declaring: TypeName,
        constructor: ConstructorInfo,
    },
    FactoryMethod {
        declaring: TypeName,
        method: MethodInfo,
    },
}

/// The output of a [`ValueWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenValue {
    /// The supplier expression.
    pub supplier: CodeBlock,
    /// Every parameter, in declaration order.
    pub dependencies: Vec<ParameterDependency>,
}

impl ValueWriter {
    /// The class declaring the executable, generated suffixes stripped.
    pub fn declaring_type(&self) -> TypeName {
        match self {
            ValueWriter::Constructor { declaring, .. } | ValueWriter::FactoryMethod { declaring, .. } => {
                declaring.user_class()
            }
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        match self {
            ValueWriter::Constructor { constructor, .. } => &constructor.parameters,
            ValueWriter::FactoryMethod { method, .. } => &method.parameters,
        }
    }

    pub fn exceptions(&self) -> &[TypeName] {
        match self {
            ValueWriter::Constructor { constructor, .. } => &constructor.exceptions,
            ValueWriter::FactoryMethod { method, .. } => &method.exceptions,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            ValueWriter::Constructor { constructor, .. } => constructor.modifiers,
            ValueWriter::FactoryMethod { method, .. } => method.modifiers,
        }
    }

    /// Human-readable signature, e.g. `method com.example.Config.foo(String)`.
    pub fn describe(&self) -> String {
        let parameters: Vec<String> = self
            .parameters()
            .iter()
            .map(|parameter| {
                let mut block = CodeBlock::new();
                push_type_reference(&mut block, &parameter.ty.erased());
                block.to_string()
            })
            .collect();
        match self {
            ValueWriter::Constructor { declaring, .. } => {
                format!("constructor {declaring}({})", parameters.join(", "))
            }
            ValueWriter::FactoryMethod { declaring, method } => {
                format!("method {declaring}.{}({})", method.name, parameters.join(", "))
            }
        }
    }

    /// Whether the executable declares an exception that is neither a
    /// `RuntimeException` nor an `Error`.
    pub fn throws_checked(&self, catalog: &TypeCatalog) -> bool {
        let runtime = well_known::type_name(well_known::RUNTIME_EXCEPTION);
        let error = well_known::type_name(well_known::ERROR);
        self.exceptions()
            .iter()
            .any(|ty| !catalog.is_subtype(ty, &runtime) && !catalog.is_subtype(ty, &error))
    }

    /// Write the supplier expression for `entity`.
    pub fn write(
        &self,
        entity: &EntityDefinition,
        catalog: &TypeCatalog,
    ) -> Result<WrittenValue, GenerationProblem> {
        let parameters = self.parameters();
        if let Some((&position, _)) = entity
            .arguments
            .range(parameters.len()..)
            .next()
        {
            return Err(GenerationProblem::ArgumentIndexOutOfRange {
                entity: entity.name.clone(),
                position,
                parameter_count: parameters.len(),
            });
        }

        let resolver = DependencyResolver::new(catalog);
        let mut dependencies = Vec::with_capacity(parameters.len());
        let mut arguments = Vec::with_capacity(parameters.len());
        for (position, parameter) in parameters.iter().enumerate() {
            if let Some(value) = entity.arguments.get(&position) {
                let literal = literal::write_literal(value, &parameter.ty).map_err(|value| {
                    GenerationProblem::UnsupportedLiteral {
                        entity: entity.name.clone(),
                        position,
                        value,
                    }
                })?;
                dependencies.push(ParameterDependency {
                    position,
                    ty: parameter.ty.clone(),
                    kind: DependencyKind::Literal,
                });
                arguments.push(literal);
            } else {
                let (dependency, expression) = resolver.resolve(position, &parameter.ty);
                dependencies.push(dependency);
                arguments.push(expression);
            }
        }

        let mut supplier = self.construction(&arguments);
        if self.throws_checked(catalog) {
            supplier = CodeBlock::new()
                .with_type(&well_known::type_name(well_known::EXCEPTION_HANDLER))
                .with(".wrapException(")
                .with_block(&supplier)
                .with(")");
        }
        Ok(WrittenValue {
            supplier,
            dependencies,
        })
    }

    fn construction(&self, arguments: &[CodeBlock]) -> CodeBlock {
        let declaring = self.declaring_type();
        match self {
            ValueWriter::Constructor { .. } if arguments.is_empty() => {
                CodeBlock::new().with_type(&declaring).with("::new")
            }
            ValueWriter::Constructor { .. } => {
                let mut block = CodeBlock::of("() -> new ");
                block.push_type(&declaring).push("(");
                block.push_joined(arguments, ", ").push(")");
                block
            }
            ValueWriter::FactoryMethod { method, .. } => {
                let mut block = CodeBlock::of("() -> ");
                if method.modifiers.is_static() {
                    block.push_type(&declaring);
                } else {
                    block
                        .push("context.getBean(")
                        .push_type(&declaring)
                        .push(".class)");
                }
                block.push(".").push(&method.name).push("(");
                block.push_joined(arguments, ", ").push(")");
                block
            }
        }
    }
}
