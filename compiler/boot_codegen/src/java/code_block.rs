//! Code fragments with type references kept symbolic.
//!
//! A [`CodeBlock`] is text interleaved with [`TypeName`]s. Types stay
//! symbolic until the enclosing unit is rendered, so the unit can decide
//! which names to import and which to spell fully qualified.

use std::fmt;

use boot_ir::TypeName;

/// One piece of a [`CodeBlock`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Text(String),
    Type(TypeName),
}

/// Decides how a type reference is spelled in the unit being rendered.
pub trait TypeNamer {
    fn name_of(&self, ty: &TypeName) -> String;
}

/// Spells every type by its nested simple name, as if all were imported.
pub struct SimpleNames;

impl TypeNamer for SimpleNames {
    fn name_of(&self, ty: &TypeName) -> String {
        ty.nested_name()
    }
}

/// A fragment of code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    segments: Vec<Segment>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block holding only text.
    pub fn of(text: impl AsRef<str>) -> Self {
        let mut block = CodeBlock::new();
        block.push(text.as_ref());
        block
    }

    /// Append text, merging with a trailing text segment.
    pub fn push(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_owned()));
        }
        self
    }

    /// Append a type reference.
    ///
    /// Generated subclasses are never referenced; the user class is used.
    pub fn push_type(&mut self, ty: &TypeName) -> &mut Self {
        self.segments.push(Segment::Type(ty.user_class()));
        self
    }

    /// Append another block.
    pub fn push_block(&mut self, other: &CodeBlock) -> &mut Self {
        for segment in &other.segments {
            match segment {
                Segment::Text(text) => {
                    self.push(text);
                }
                Segment::Type(ty) => self.segments.push(Segment::Type(ty.clone())),
            }
        }
        self
    }

    /// Append blocks separated by `separator`.
    pub fn push_joined<'a>(
        &mut self,
        blocks: impl IntoIterator<Item = &'a CodeBlock>,
        separator: &str,
    ) -> &mut Self {
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            self.push_block(block);
        }
        self
    }

    /// Consuming form of [`CodeBlock::push`].
    #[must_use]
    pub fn with(mut self, text: &str) -> Self {
        self.push(text);
        self
    }

    /// Consuming form of [`CodeBlock::push_type`].
    #[must_use]
    pub fn with_type(mut self, ty: &TypeName) -> Self {
        self.push_type(ty);
        self
    }

    /// Consuming form of [`CodeBlock::push_block`].
    #[must_use]
    pub fn with_block(mut self, other: &CodeBlock) -> Self {
        self.push_block(other);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Type references in order of appearance.
    pub fn type_names(&self) -> impl Iterator<Item = &TypeName> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Type(ty) => Some(ty),
            Segment::Text(_) => None,
        })
    }

    /// Render with the given naming policy.
    pub fn render(&self, namer: &dyn TypeNamer) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Type(ty) => out.push_str(&namer.name_of(ty)),
            }
        }
        out
    }
}

/// Renders with simple names.
impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&SimpleNames))
    }
}
