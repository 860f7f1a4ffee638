use std::ops::{Deref, DerefMut};

/// Payload of an NBT ByteArray (type 7). Stored as one length prefix followed
/// by the raw bytes, unlike a [`List`][`crate::List`] of Byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.data
    }
}

/// Payload of an NBT IntArray (type 11).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }
}

/// Payload of an NBT LongArray (type 12).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }
}

macro_rules! array_impls {
    ($array:ident, $elem:ty) => {
        impl Deref for $array {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl DerefMut for $array {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.data
            }
        }

        impl From<Vec<$elem>> for $array {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl From<&[$elem]> for $array {
            fn from(data: &[$elem]) -> Self {
                Self::new(data.to_vec())
            }
        }

        impl FromIterator<$elem> for $array {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

array_impls!(ByteArray, i8);
array_impls!(IntArray, i32);
array_impls!(LongArray, i64);
