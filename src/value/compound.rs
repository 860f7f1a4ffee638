use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, LongArray, Tag};

use super::{List, Value};

/// An NBT Compound (type 10): named values with unique names.
///
/// Members keep the order they were first inserted in, so every view of the
/// tree comes out in a stable order. Order is not part of equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

macro_rules! scalar_getter {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self, name: &str) -> Option<$ty> {
            match self.entries.get(name) {
                Some(Value::$variant(v)) => Some(*v),
                _ => None,
            }
        }
    };
}

macro_rules! ref_getter {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self, name: &str) -> Option<&$ty> {
            match self.entries.get(name) {
                Some(Value::$variant(v)) => Some(v),
                _ => None,
            }
        }
    };
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a member. A member already under `name` is replaced in place
    /// and returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Insert a named tag under its own name. Unnamed tags cannot be members
    /// of a compound.
    pub fn insert_tag(&mut self, tag: Tag) -> Result<Option<Value>> {
        match tag.into_parts() {
            (Some(name), value) => Ok(self.insert(name, value)),
            (None, value) => Err(Error::malformed(format!(
                "cannot add unnamed tag of type {} to a compound",
                value.id()
            ))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Remove a member, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether there is a member called `name` with the given type ID.
    pub fn contains_type(&self, name: &str, id: u8) -> bool {
        self.entries.get(name).map_or(false, |v| v.id() == id)
    }

    /// Whether there is a list called `name` whose element type is `id`.
    pub fn contains_list_of(&self, name: &str, id: u8) -> bool {
        self.get_list(name)
            .map_or(false, |list| list.element_type() == Some(id))
    }

    scalar_getter!(get_byte, Byte, i8);
    scalar_getter!(get_short, Short, i16);
    scalar_getter!(
        /// The value of an Int member. `None` if missing or of another type.
        get_int,
        Int,
        i32
    );
    scalar_getter!(get_long, Long, i64);
    scalar_getter!(get_float, Float, f32);
    scalar_getter!(get_double, Double, f64);

    ref_getter!(get_byte_array, ByteArray, ByteArray);
    ref_getter!(get_int_array, IntArray, IntArray);
    ref_getter!(get_long_array, LongArray, LongArray);
    ref_getter!(get_list, List, List);
    ref_getter!(get_compound, Compound, Compound);

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_list_mut(&mut self, name: &str) -> Option<&mut List> {
        match self.entries.get_mut(name) {
            Some(Value::List(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_compound_mut(&mut self, name: &str) -> Option<&mut Compound> {
        match self.entries.get_mut(name) {
            Some(Value::Compound(v)) => Some(v),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Each member as a named [`Tag`].
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| Tag::new(name.clone(), value.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// Must agree with the order-insensitive PartialEq from IndexMap, so members
// are hashed individually and combined with a commutative sum.
impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        let mut sum: u64 = 0;
        for (name, value) in &self.entries {
            let mut member = DefaultHasher::new();
            name.hash(&mut member);
            value.hash(&mut member);
            sum = sum.wrapping_add(member.finish());
        }
        sum.hash(state);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
