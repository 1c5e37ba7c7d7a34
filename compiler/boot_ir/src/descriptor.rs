//! Type descriptors: possibly generic, possibly array types.
//!
//! Snapshots write descriptors compactly. A bare string is a class name, a
//! primitive keyword, `?` for a wildcard or unresolved variable, or any of
//! those followed by `[]`. Parameterized types use an object form:
//!
//! ```text
//! "java.lang.String"
//! "int[]"
//! { "raw": "com.example.Repository", "generics": ["java.lang.String"] }
//! { "array": { "raw": "java.util.List", "generics": ["?"] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::name::{TypeName, TypeNameError};
use crate::well_known;

/// The eight primitive kinds plus `void`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Void,
    ];

    /// Source keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// The `java.lang` wrapper class.
    pub fn boxed(self) -> TypeName {
        let simple = match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Void => "Void",
        };
        TypeName::new(well_known::JAVA_LANG, simple)
    }
}

/// A type as declared on a parameter, return type or entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DescriptorRepr", into = "DescriptorRepr")]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Class {
        name: TypeName,
        generics: Vec<TypeDescriptor>,
    },
    Array(Box<TypeDescriptor>),
    /// A wildcard or a type variable the container could not resolve.
    Wildcard,
}

impl TypeDescriptor {
    /// A non-generic class type.
    pub fn class(name: TypeName) -> Self {
        TypeDescriptor::Class {
            name,
            generics: Vec::new(),
        }
    }

    /// A parameterized class type.
    pub fn generic(name: TypeName, generics: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Class { name, generics }
    }

    pub fn array(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    /// The class name if this is a class type.
    pub fn class_name(&self) -> Option<&TypeName> {
        match self {
            TypeDescriptor::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this is a class type with at least one type argument.
    pub fn has_generics(&self) -> bool {
        matches!(self, TypeDescriptor::Class { generics, .. } if !generics.is_empty())
    }

    /// Whether generics appear anywhere, including inside array components.
    pub fn carries_generics(&self) -> bool {
        match self {
            TypeDescriptor::Class { generics, .. } => !generics.is_empty(),
            TypeDescriptor::Array(component) => component.carries_generics(),
            TypeDescriptor::Primitive(_) | TypeDescriptor::Wildcard => false,
        }
    }

    /// The `index`th type argument, if present.
    pub fn generic_argument(&self, index: usize) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Class { generics, .. } => generics.get(index),
            _ => None,
        }
    }

    /// The descriptor with every type argument removed.
    ///
    /// Wildcards erase to `java.lang.Object`.
    #[must_use]
    pub fn erased(&self) -> TypeDescriptor {
        match self {
            TypeDescriptor::Primitive(kind) => TypeDescriptor::Primitive(*kind),
            TypeDescriptor::Class { name, .. } => TypeDescriptor::class(name.clone()),
            TypeDescriptor::Array(component) => TypeDescriptor::array(component.erased()),
            TypeDescriptor::Wildcard => TypeDescriptor::class(well_known::object()),
        }
    }

    /// Push every class name mentioned by this descriptor, outermost first.
    pub fn collect_type_names(&self, out: &mut Vec<TypeName>) {
        match self {
            TypeDescriptor::Class { name, generics } => {
                out.push(name.clone());
                for generic in generics {
                    generic.collect_type_names(out);
                }
            }
            TypeDescriptor::Array(component) => component.collect_type_names(out),
            TypeDescriptor::Primitive(_) | TypeDescriptor::Wildcard => {}
        }
    }

    fn parse_compact(text: &str) -> Result<Self, TypeNameError> {
        let text = text.trim();
        if let Some(component) = text.strip_suffix("[]") {
            return Ok(TypeDescriptor::array(Self::parse_compact(component)?));
        }
        if text == "?" {
            return Ok(TypeDescriptor::Wildcard);
        }
        if let Some(kind) = PrimitiveKind::from_keyword(text) {
            return Ok(TypeDescriptor::Primitive(kind));
        }
        Ok(TypeDescriptor::class(TypeName::parse(text)?))
    }
}

impl From<TypeName> for TypeDescriptor {
    fn from(name: TypeName) -> Self {
        TypeDescriptor::class(name)
    }
}

impl std::str::FromStr for TypeDescriptor {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeDescriptor::parse_compact(s)
    }
}

// Wire form

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DescriptorRepr {
    Compact(String),
    Generic {
        raw: TypeName,
        #[serde(default)]
        generics: Vec<TypeDescriptor>,
    },
    Array {
        array: Box<TypeDescriptor>,
    },
}

impl TryFrom<DescriptorRepr> for TypeDescriptor {
    type Error = TypeNameError;

    fn try_from(repr: DescriptorRepr) -> Result<Self, Self::Error> {
        match repr {
            DescriptorRepr::Compact(text) => TypeDescriptor::parse_compact(&text),
            DescriptorRepr::Generic { raw, generics } => Ok(TypeDescriptor::generic(raw, generics)),
            DescriptorRepr::Array { array } => Ok(TypeDescriptor::Array(array)),
        }
    }
}

impl From<TypeDescriptor> for DescriptorRepr {
    fn from(descriptor: TypeDescriptor) -> Self {
        if let Some(text) = descriptor.compact_form() {
            return DescriptorRepr::Compact(text);
        }
        match descriptor {
            TypeDescriptor::Class { name, generics } => DescriptorRepr::Generic {
                raw: name,
                generics,
            },
            TypeDescriptor::Array(component) => DescriptorRepr::Array { array: component },
            TypeDescriptor::Primitive(kind) => DescriptorRepr::Compact(kind.keyword().to_owned()),
            TypeDescriptor::Wildcard => DescriptorRepr::Compact("?".to_owned()),
        }
    }
}

impl TypeDescriptor {
    /// The string form, available when no generics are involved.
    fn compact_form(&self) -> Option<String> {
        match self {
            TypeDescriptor::Primitive(kind) => Some(kind.keyword().to_owned()),
            TypeDescriptor::Wildcard => Some("?".to_owned()),
            TypeDescriptor::Class { name, generics } if generics.is_empty() => {
                Some(name.binary_name())
            }
            TypeDescriptor::Class { .. } => None,
            TypeDescriptor::Array(component) => {
                component.compact_form().map(|text| format!("{text}[]"))
            }
        }
    }
}
