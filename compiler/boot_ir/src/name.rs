//! Fully qualified type names.
//!
//! A [`TypeName`] is a package plus a chain of simple names, outermost class
//! first. Snapshots spell names in binary form (`a.b.Outer$Inner`); generated
//! code spells them in canonical form (`a.b.Outer.Inner`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker the container uses for generated subclasses (`Foo$$EnhancerBy...`).
const GENERATED_SUBCLASS_MARKER: &str = "$$";

/// Error raised when a binary type name cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeNameError {
    #[error("type name is empty")]
    Empty,
    #[error("type name `{0}` has an empty segment")]
    EmptySegment(String),
}

/// A fully qualified class or interface name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    package: String,
    simple_names: Vec<String>,
}

impl TypeName {
    /// Create a top-level type name.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        TypeName {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Create a type nested inside this one.
    #[must_use]
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        TypeName {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Parse a binary name such as `com.example.Outer$Inner`.
    ///
    /// Everything from the first `$$` on is kept verbatim on the innermost
    /// simple name; [`TypeName::user_class`] strips it.
    pub fn parse(binary_name: &str) -> Result<Self, TypeNameError> {
        let binary_name = binary_name.trim();
        if binary_name.is_empty() {
            return Err(TypeNameError::Empty);
        }

        let (head, generated) = match binary_name.find(GENERATED_SUBCLASS_MARKER) {
            Some(idx) => binary_name.split_at(idx),
            None => (binary_name, ""),
        };

        let first_nested = head.find('$').unwrap_or(head.len());
        let (package, rest) = match head[..first_nested].rfind('.') {
            Some(dot) => (&head[..dot], &head[dot + 1..]),
            None => ("", head),
        };

        let mut simple_names: Vec<String> = rest.split('$').map(str::to_owned).collect();
        let has_empty_segment = simple_names.iter().any(String::is_empty)
            || (!package.is_empty() && package.split('.').any(str::is_empty));
        if has_empty_segment {
            return Err(TypeNameError::EmptySegment(binary_name.to_owned()));
        }
        if let Some(last) = simple_names.last_mut() {
            last.push_str(generated);
        }

        Ok(TypeName {
            package: package.to_owned(),
            simple_names,
        })
    }

    /// The package, empty for the default package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map_or("", String::as_str)
    }

    /// All simple names, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The outermost class that contains this one (itself if top-level).
    #[must_use]
    pub fn top_level(&self) -> TypeName {
        TypeName {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    /// The directly enclosing class, if this one is nested.
    pub fn enclosing(&self) -> Option<TypeName> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(TypeName {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// Whether this type is nested in another class.
    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// Whether this is a container-generated subclass.
    pub fn is_generated_subclass(&self) -> bool {
        self.simple_name().contains(GENERATED_SUBCLASS_MARKER)
    }

    /// Strip a generated-subclass suffix, returning the user-declared class.
    #[must_use]
    pub fn user_class(&self) -> TypeName {
        let mut user = self.clone();
        if let Some(last) = user.simple_names.last_mut() {
            if let Some(idx) = last.find(GENERATED_SUBCLASS_MARKER) {
                last.truncate(idx);
            }
        }
        user
    }

    /// Canonical name: `a.b.Outer.Inner`.
    pub fn canonical_name(&self) -> String {
        self.qualified('.')
    }

    /// Binary name: `a.b.Outer$Inner`.
    pub fn binary_name(&self) -> String {
        self.qualified('$')
    }

    /// Simple names joined for use inside the package: `Outer.Inner`.
    pub fn nested_name(&self) -> String {
        self.simple_names.join(".")
    }

    fn qualified(&self, nesting: char) -> String {
        let nested = self.simple_names.join(&nesting.to_string());
        if self.package.is_empty() {
            nested
        } else {
            format!("{}.{nested}", self.package)
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl std::str::FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::parse(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeName::parse(&value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.binary_name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
