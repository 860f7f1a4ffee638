use std::hash::{Hash, Hasher};

use crate::{Compound, Value};

/// A value together with an optional name.
///
/// A whole tree is a `Tag` holding a [`Compound`]; the name is the root name
/// found in files, which is usually empty. Members of a compound get their
/// names from the compound's keys, see [`Compound::tags`] and
/// [`Compound::insert_tag`].
///
/// ```
/// # use blocknbt::{Tag, Value};
/// let mut tag = Tag::new("int", 5);
/// assert_eq!(tag.id(), 3);
/// assert_eq!(tag.name(), Some("int"));
///
/// let old = tag.set_value(6);
/// assert_eq!(old, Value::Int(5));
/// ```
///
/// Files have no way to leave a root unnamed, so an unnamed tag is written
/// with the empty name. Equality follows that: a missing name and an empty
/// one compare equal.
///
/// ```
/// # use blocknbt::{compound, Tag};
/// assert_eq!(Tag::unnamed(compound! {}), Tag::new("", compound! {}));
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
    name: Option<String>,
    value: Value,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    pub fn unnamed(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    /// The type ID of the value.
    pub fn id(&self) -> u8 {
        self.value.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) -> Option<String> {
        self.name.take()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replace the value, returning the old one. The name is kept.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// The value as a compound, when this tag is a tree root.
    pub fn compound(&self) -> Option<&Compound> {
        self.value.as_compound()
    }

    pub fn compound_mut(&mut self) -> Option<&mut Compound> {
        self.value.as_compound_mut()
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn into_parts(self) -> (Option<String>, Value) {
        (self.name, self.value)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name_or_empty() == other.name_or_empty() && self.value == other.value
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name_or_empty().hash(state);
        self.value.hash(state);
    }
}

impl From<Compound> for Tag {
    /// An unnamed root.
    fn from(compound: Compound) -> Self {
        Tag::unnamed(compound)
    }
}
