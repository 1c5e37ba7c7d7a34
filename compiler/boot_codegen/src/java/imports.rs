//! Import resolution for one source unit.
//!
//! Simple names are claimed first come, first served: the unit's own name,
//! then every referenced top-level type in order of first appearance. A type
//! whose simple name was claimed by a different type is spelled fully
//! qualified. `java.lang` and same-package types are never imported but
//! still claim their name.

use rustc_hash::FxHashMap;

use boot_ir::{well_known, TypeName};

use super::code_block::TypeNamer;

/// Which simple names refer to which top-level types inside a unit.
#[derive(Debug)]
pub struct ImportTable {
    package: String,
    claimed: FxHashMap<String, TypeName>,
}

impl ImportTable {
    /// Start a table for the unit `package.unit_name`.
    pub fn new(package: &str, unit_name: &str) -> Self {
        let mut claimed = FxHashMap::default();
        claimed.insert(unit_name.to_owned(), TypeName::new(package, unit_name));
        ImportTable {
            package: package.to_owned(),
            claimed,
        }
    }

    /// Claim the simple name of `ty`'s top-level class if it is free.
    pub fn claim(&mut self, ty: &TypeName) {
        let top = ty.top_level();
        self.claimed
            .entry(top.simple_name().to_owned())
            .or_insert(top);
    }

    /// Claim every type in order.
    pub fn claim_all<'a>(&mut self, types: impl IntoIterator<Item = &'a TypeName>) {
        for ty in types {
            self.claim(ty);
        }
    }

    fn owns(&self, ty: &TypeName) -> bool {
        let top = ty.top_level();
        self.claimed.get(top.simple_name()) == Some(&top)
    }

    /// Import lines to emit, sorted by canonical name.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self
            .claimed
            .values()
            .filter(|ty| {
                !ty.package().is_empty()
                    && ty.package() != self.package
                    && ty.package() != well_known::JAVA_LANG
            })
            .map(TypeName::canonical_name)
            .collect();
        imports.sort_unstable();
        imports
    }
}

impl TypeNamer for ImportTable {
    fn name_of(&self, ty: &TypeName) -> String {
        if self.owns(ty) {
            ty.nested_name()
        } else {
            ty.canonical_name()
        }
    }
}

#[cfg(test)]
mod tests;
