//! Entity definitions: what the container resolved for each managed bean.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{ConstructorInfo, MethodInfo};
use crate::descriptor::TypeDescriptor;
use crate::name::TypeName;

/// Role hint the container attaches to a definition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Application,
    Support,
    Infrastructure,
}

impl Role {
    /// The numeric role constant the runtime uses.
    pub fn value(self) -> u8 {
        match self {
            Role::Application => 0,
            Role::Support => 1,
            Role::Infrastructure => 2,
        }
    }
}

/// A method together with the class that declares it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundMethod {
    pub declaring: TypeName,
    pub method: MethodInfo,
}

/// A constructor together with the class that declares it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundConstructor {
    pub declaring: TypeName,
    pub constructor: ConstructorInfo,
}

/// The raw executable the container last used to build an entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Executable {
    Constructor(BoundConstructor),
    Method(BoundMethod),
}

/// An explicit argument value recorded at one parameter position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ArgumentValue {
    Char(char),
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    CharArray(Vec<char>),
    StringArray(Vec<String>),
    /// Another entity, looked up by name.
    Reference(String),
    /// An array of anything other than `char` or `String`.
    Array(Vec<ArgumentValue>),
    /// A value the container could only describe, not reproduce.
    Opaque(String),
}

/// How the runtime type of an entity is known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuntimeType {
    /// The bean class (or declared type) is the runtime type.
    #[default]
    Declared,
    /// The entity is a proxy; this is the class behind it.
    Target { class: TypeName },
    /// The container could not determine the type.
    Unresolvable { reason: String },
}

/// One entity as resolved by the container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub name: String,
    /// Declared type, possibly generic.
    pub bean_type: TypeDescriptor,
    #[serde(default)]
    pub bean_class: Option<TypeName>,
    #[serde(default)]
    pub factory_method: Option<BoundMethod>,
    #[serde(default)]
    pub factory_method_name: Option<String>,
    #[serde(default)]
    pub factory_class: Option<TypeName>,
    #[serde(default)]
    pub resolved_executable: Option<Executable>,
    /// Explicit values keyed by parameter position.
    #[serde(default)]
    pub arguments: BTreeMap<usize, ArgumentValue>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub runtime_type: RuntimeType,
}

impl EntityDefinition {
    /// A definition with only a name and declared type.
    pub fn new(name: impl Into<String>, bean_type: TypeDescriptor) -> Self {
        EntityDefinition {
            name: name.into(),
            bean_type,
            bean_class: None,
            factory_method: None,
            factory_method_name: None,
            factory_class: None,
            resolved_executable: None,
            arguments: BTreeMap::new(),
            primary: false,
            role: Role::Application,
            scope: None,
            runtime_type: RuntimeType::Declared,
        }
    }

    /// The class the container instantiates, falling back to the declared
    /// type's raw class.
    pub fn instantiated_class(&self) -> Option<&TypeName> {
        self.bean_class.as_ref().or_else(|| self.bean_type.class_name())
    }

    /// The user-declared class of the declared type, with any generated
    /// subclass suffix stripped.
    pub fn user_type(&self) -> Option<TypeName> {
        self.bean_type.class_name().map(TypeName::user_class)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
