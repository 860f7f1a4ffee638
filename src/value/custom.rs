use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};

use crate::error::Result;

/// The payload of a custom tag type. Implement this and register it with
/// [`TypeRegistry::register_custom`][`crate::TypeRegistry::register_custom`]
/// to make a new type ID readable and writable by every codec.
///
/// The registry only knows how to make an empty instance; the payload decides
/// its own encoding in each format.
///
/// ```
/// use std::io::{Read, Write};
/// use blocknbt::{error::Result, CustomPayload};
/// use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
///
/// #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// struct Position { x: i32, z: i32 }
///
/// impl CustomPayload for Position {
///     fn read(&mut self, input: &mut dyn Read) -> Result<()> {
///         self.x = input.read_i32::<BigEndian>()?;
///         self.z = input.read_i32::<BigEndian>()?;
///         Ok(())
///     }
///
///     fn write(&self, output: &mut dyn Write) -> Result<()> {
///         output.write_i32::<BigEndian>(self.x)?;
///         output.write_i32::<BigEndian>(self.z)?;
///         Ok(())
///     }
///
///     fn write_snbt(&self, out: &mut String) {
///         out.push_str(&format!("[I;{},{}]", self.x, self.z));
///     }
///
///     fn to_json(&self) -> Result<serde_json::Value> {
///         Ok(serde_json::json!([self.x, self.z]))
///     }
///
///     fn from_json(&mut self, value: &serde_json::Value) -> Result<()> {
///         let pos: [i32; 2] = serde_json::from_value(value.clone())?;
///         self.x = pos[0];
///         self.z = pos[1];
///         Ok(())
///     }
/// }
/// ```
pub trait CustomPayload: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Read the binary payload. The type ID and name have already been read.
    fn read(&mut self, input: &mut dyn Read) -> Result<()>;

    /// Write the binary payload, without the type ID or name.
    fn write(&self, output: &mut dyn Write) -> Result<()>;

    /// Append the SNBT form of this payload.
    fn write_snbt(&self, out: &mut String);

    /// The `value` field of this payload's JSON document.
    fn to_json(&self) -> Result<serde_json::Value>;

    /// Fill this payload from the `value` field of a JSON document.
    fn from_json(&mut self, value: &serde_json::Value) -> Result<()>;
}

// Object safe mirror of CustomPayload so Value can stay Clone + Eq + Hash.
trait DynPayload: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clone_box(&self) -> Box<dyn DynPayload>;
    fn eq_dyn(&self, other: &dyn DynPayload) -> bool;
    fn hash_dyn(&self, state: &mut dyn Hasher);
    fn read_dyn(&mut self, input: &mut dyn Read) -> Result<()>;
    fn write_dyn(&self, output: &mut dyn Write) -> Result<()>;
    fn write_snbt_dyn(&self, out: &mut String);
    fn to_json_dyn(&self) -> Result<serde_json::Value>;
    fn from_json_dyn(&mut self, value: &serde_json::Value) -> Result<()>;
}

impl<T: CustomPayload> DynPayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn DynPayload> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn DynPayload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn hash_dyn(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn read_dyn(&mut self, input: &mut dyn Read) -> Result<()> {
        self.read(input)
    }

    fn write_dyn(&self, output: &mut dyn Write) -> Result<()> {
        self.write(output)
    }

    fn write_snbt_dyn(&self, out: &mut String) {
        self.write_snbt(out)
    }

    fn to_json_dyn(&self) -> Result<serde_json::Value> {
        self.to_json()
    }

    fn from_json_dyn(&mut self, value: &serde_json::Value) -> Result<()> {
        self.from_json(value)
    }
}

/// A value of a custom tag type: the type ID it was registered under plus the
/// payload.
pub struct CustomValue {
    id: u8,
    payload: Box<dyn DynPayload>,
}

impl CustomValue {
    pub fn new<T: CustomPayload>(id: u8, payload: T) -> Self {
        Self {
            id,
            payload: Box::new(payload),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the payload if it is a `T`.
    pub fn downcast_ref<T: CustomPayload>(&self) -> Option<&T> {
        self.payload.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: CustomPayload>(&mut self) -> Option<&mut T> {
        self.payload.as_any_mut().downcast_mut()
    }

    pub(crate) fn read_payload(&mut self, input: &mut dyn Read) -> Result<()> {
        self.payload.read_dyn(input)
    }

    pub(crate) fn write_payload(&self, output: &mut dyn Write) -> Result<()> {
        self.payload.write_dyn(output)
    }

    pub(crate) fn write_snbt(&self, out: &mut String) {
        self.payload.write_snbt_dyn(out)
    }

    pub(crate) fn to_json(&self) -> Result<serde_json::Value> {
        self.payload.to_json_dyn()
    }

    pub(crate) fn from_json(&mut self, value: &serde_json::Value) -> Result<()> {
        self.payload.from_json_dyn(value)
    }
}

impl Clone for CustomValue {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            payload: self.payload.clone_box(),
        }
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.payload.eq_dyn(&*other.payload)
    }
}

impl Eq for CustomValue {}

impl Hash for CustomValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.payload.hash_dyn(state);
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .finish()
    }
}
