//! Methods and source units.
//!
//! ```text
//! package com.example;
//!
//! import ...;
//!
//! public class ContextBootstrap {
//!   public void bootstrap(GenericApplicationContext context) {
//!     statement;
//!   }
//! }
//! ```

use std::path::PathBuf;

use boot_ir::TypeName;

use super::code_block::CodeBlock;
use super::emitter::{Emitter, StringEmitter};
use super::imports::ImportTable;

/// A `public void` method with a flat list of statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    name: String,
    is_static: bool,
    parameters: Vec<(TypeName, String)>,
    statements: Vec<CodeBlock>,
}

impl MethodSpec {
    /// A public instance method.
    pub fn new(name: impl Into<String>) -> Self {
        MethodSpec {
            name: name.into(),
            is_static: false,
            parameters: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// A public static method.
    pub fn new_static(name: impl Into<String>) -> Self {
        MethodSpec {
            is_static: true,
            ..MethodSpec::new(name)
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, ty: TypeName, name: impl Into<String>) -> Self {
        self.parameters.push((ty, name.into()));
        self
    }

    /// Append a statement. The terminating `;` is added on render.
    pub fn add_statement(&mut self, statement: CodeBlock) {
        self.statements.push(statement);
    }

    pub fn extend_statements(&mut self, statements: impl IntoIterator<Item = CodeBlock>) {
        self.statements.extend(statements);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn statements(&self) -> &[CodeBlock] {
        &self.statements
    }

    fn type_names(&self) -> impl Iterator<Item = &TypeName> {
        self.parameters
            .iter()
            .map(|(ty, _)| ty)
            .chain(self.statements.iter().flat_map(CodeBlock::type_names))
    }

    fn render(&self, emitter: &mut impl Emitter, imports: &ImportTable) {
        let mut signature = CodeBlock::of("public ");
        if self.is_static {
            signature.push("static ");
        }
        signature.push("void ").push(&self.name).push("(");
        for (i, (ty, name)) in self.parameters.iter().enumerate() {
            if i > 0 {
                signature.push(", ");
            }
            signature.push_type(ty).push(" ").push(name);
        }
        signature.push(") {");

        emitter.emit_line(1, &signature.render(imports));
        for statement in &self.statements {
            emitter.emit_indent(2);
            emitter.emit(&statement.render(imports));
            emitter.emit(";");
            emitter.emit_newline();
        }
        emitter.emit_line(1, "}");
    }
}

/// One generated class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    package: String,
    name: String,
    methods: Vec<MethodSpec>,
}

impl SourceUnit {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        SourceUnit {
            package: package.into(),
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> TypeName {
        TypeName::new(self.package.as_str(), self.name.as_str())
    }

    pub fn add_method(&mut self, method: MethodSpec) {
        self.methods.push(method);
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut MethodSpec> {
        self.methods.iter_mut().find(|method| method.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Path of the unit relative to a source root: `com/example/Foo.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.name));
        path
    }

    /// Render the unit as source text.
    pub fn render(&self) -> String {
        let mut imports = ImportTable::new(&self.package, &self.name);
        imports.claim_all(self.methods.iter().flat_map(MethodSpec::type_names));

        let mut emitter = StringEmitter::with_capacity(1024);
        if !self.package.is_empty() {
            emitter.emit("package ");
            emitter.emit(&self.package);
            emitter.emit(";");
            emitter.emit_newline();
            emitter.emit_newline();
        }

        let import_lines = imports.imports();
        if !import_lines.is_empty() {
            for import in &import_lines {
                emitter.emit("import ");
                emitter.emit(import);
                emitter.emit(";");
                emitter.emit_newline();
            }
            emitter.emit_newline();
        }

        emitter.emit("public class ");
        emitter.emit(&self.name);
        emitter.emit(" {");
        emitter.emit_newline();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                emitter.emit_newline();
            }
            method.render(&mut emitter, &imports);
        }
        emitter.emit("}");
        emitter.ensure_trailing_newline();
        emitter.output()
    }
}

#[cfg(test)]
mod tests;
