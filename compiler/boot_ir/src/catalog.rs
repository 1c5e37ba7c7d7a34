//! Class catalog: the structural facts the generator needs about types.
//!
//! The container collaborator records, for every class it touched, the
//! modifiers, transitive supertypes, constructors and methods. Types absent
//! from the catalog fall back to the built-in table in [`crate::well_known`];
//! anything else is treated as a public top-level class with no known
//! supertypes.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;
use crate::name::TypeName;
use crate::well_known;

bitflags! {
    /// Declaration modifiers of a class, constructor or method.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const INTERFACE = 1 << 6;
    }
}

impl Modifiers {
    pub fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    pub fn is_private(self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    /// Whether a member with these modifiers can be referenced from code in
    /// `from_package`, given the package it is declared in.
    ///
    /// Protected members count as package-private: generated code never
    /// subclasses the declaring type.
    pub fn is_accessible(self, declared_in: &str, from_package: &str) -> bool {
        self.is_public() || (!self.is_private() && declared_in == from_package)
    }
}

/// A named, typed parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

/// A declared constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared exception types.
    #[serde(default)]
    pub exceptions: Vec<TypeName>,
    /// Marked as the injection point among several constructors.
    #[serde(default)]
    pub inject: bool,
}

/// The annotation a listener method carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerDeclaration {
    #[serde(default = "well_known::event_listener_annotation")]
    pub annotation: TypeName,
}

impl Default for ListenerDeclaration {
    fn default() -> Self {
        ListenerDeclaration {
            annotation: well_known::event_listener_annotation(),
        }
    }
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "void_descriptor")]
    pub return_type: TypeDescriptor,
    #[serde(default)]
    pub exceptions: Vec<TypeName>,
    #[serde(default)]
    pub listener: Option<ListenerDeclaration>,
}

fn void_descriptor() -> TypeDescriptor {
    TypeDescriptor::Primitive(crate::descriptor::PrimitiveKind::Void)
}

impl MethodInfo {
    /// A public instance method with no parameters returning `void`.
    pub fn new(name: impl Into<String>) -> Self {
        MethodInfo {
            name: name.into(),
            modifiers: Modifiers::PUBLIC,
            parameters: Vec::new(),
            return_type: void_descriptor(),
            exceptions: Vec::new(),
            listener: None,
        }
    }
}

/// Everything recorded about one class or interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: TypeName,
    #[serde(default = "public_modifiers")]
    pub modifiers: Modifiers,
    /// Transitive supertypes (superclasses and interfaces).
    #[serde(default)]
    pub supertypes: Vec<TypeName>,
    #[serde(default)]
    pub constructors: Vec<ConstructorInfo>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

fn public_modifiers() -> Modifiers {
    Modifiers::PUBLIC
}

impl ClassInfo {
    /// A public class with no members and no known supertypes.
    pub fn new(name: TypeName) -> Self {
        ClassInfo {
            name,
            modifiers: Modifiers::PUBLIC,
            supertypes: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Methods with the given name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodInfo> {
        self.methods.iter().filter(move |method| method.name == name)
    }
}

/// Lookup table of [`ClassInfo`] by type name.
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    classes: FxHashMap<TypeName, ClassInfo>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for a class.
    pub fn insert(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &TypeName) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Modifiers of a class. Unknown classes are public.
    pub fn modifiers(&self, name: &TypeName) -> Modifiers {
        if let Some(class) = self.classes.get(name) {
            return class.modifiers;
        }
        well_known::builtin(name).map_or(Modifiers::PUBLIC, |builtin| builtin.modifiers)
    }

    /// Whether `sub` is `sup` or one of its subtypes.
    ///
    /// Every type is a subtype of `java.lang.Object`.
    pub fn is_subtype(&self, sub: &TypeName, sup: &TypeName) -> bool {
        if sub == sup || sup.binary_name() == well_known::OBJECT {
            return true;
        }
        if let Some(class) = self.classes.get(sub) {
            return class.supertypes.iter().any(|ty| ty == sup);
        }
        let target = sup.binary_name();
        well_known::builtin(sub).is_some_and(|builtin| builtin.supertypes.contains(&target.as_str()))
    }

    /// Whether a type can be named from `package`.
    ///
    /// Nested types must be accessible at every enclosing level.
    pub fn is_accessible_from(&self, name: &TypeName, package: &str) -> bool {
        let user = name.user_class();
        let mut current = Some(user);
        while let Some(ty) = current {
            if !self.modifiers(&ty).is_accessible(ty.package(), package) {
                return false;
            }
            current = ty.enclosing();
        }
        true
    }
}

impl FromIterator<ClassInfo> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = ClassInfo>>(iter: I) -> Self {
        let mut catalog = TypeCatalog::new();
        for class in iter {
            catalog.insert(class);
        }
        catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
