use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

use super::{Compound, Value};

/// An NBT List (type 9): an ordered sequence of unnamed values that all share
/// one type.
///
/// A list made with [`List::new`] has no element type until the first value
/// is pushed. After that, values of any other type are rejected with
/// [`ErrorKind::ListTypeMismatch`][`crate::error::ErrorKind::ListTypeMismatch`].
/// [`List::of`] fixes the element type up front, which also decides the type
/// ID an empty list is written with.
///
/// ```
/// # use blocknbt::{List, Value};
/// let mut list = List::new();
/// list.push(1).unwrap();
/// list.push(2).unwrap();
/// assert!(list.push("three").is_err());
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    element_type: Option<u8>,
    items: Vec<Value>,
}

impl List {
    /// An empty list whose element type is set by the first push.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list that only accepts values of the given type ID.
    pub fn of(element_type: u8) -> Self {
        Self {
            element_type: Some(element_type),
            items: Vec::new(),
        }
    }

    /// The type ID of the elements, if established.
    pub fn element_type(&self) -> Option<u8> {
        self.element_type
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.accept(value.id())?;
        self.items.push(value);
        Ok(())
    }

    /// Insert at `index`, shifting later elements along.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if index > self.items.len() {
            return Err(Error::malformed(format!(
                "list insert index {} out of bounds for length {}",
                index,
                self.items.len()
            )));
        }
        self.accept(value.id())?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        self.accept(value.id())?;
        let len = self.items.len();
        let slot = self.items.get_mut(index).ok_or_else(|| {
            Error::malformed(format!(
                "list index {} out of bounds for length {}",
                index, len
            ))
        })?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// The compound at `index`, for editing in place.
    ///
    /// There is no general `get_mut`: through a `&mut Value` an element could
    /// be swapped for a value of another type.
    pub fn get_compound_mut(&mut self, index: usize) -> Option<&mut Compound> {
        self.items.get_mut(index).and_then(Value::as_compound_mut)
    }

    pub fn get_list_mut(&mut self, index: usize) -> Option<&mut List> {
        self.items.get_mut(index).and_then(Value::as_list_mut)
    }

    /// Every element that is a compound, for editing in place.
    pub fn compounds_mut(&mut self) -> impl Iterator<Item = &mut Compound> + '_ {
        self.items.iter_mut().filter_map(Value::as_compound_mut)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every element. The element type stays as it was.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn accept(&mut self, id: u8) -> Result<()> {
        match self.element_type {
            Some(expected) if expected != id => Err(Error::list_mismatch(expected, id)),
            Some(_) => Ok(()),
            None => {
                self.element_type = Some(id);
                Ok(())
            }
        }
    }
}

// The declared type of an empty list is not part of its value.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(items: Vec<Value>) -> Result<Self> {
        let mut list = List::new();
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
