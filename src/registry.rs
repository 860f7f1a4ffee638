use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, CustomPayload, CustomValue, IntArray, List, LongArray, TagType, Value};

type Factory = Arc<dyn Fn() -> Value + Send + Sync>;

/// What the registry knows about one type ID: a display name and a way to make
/// an empty value of that type, which a codec then fills in.
#[derive(Clone)]
pub struct TagDescriptor {
    name: Cow<'static, str>,
    factory: Factory,
}

impl TagDescriptor {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A fresh empty value of this type.
    pub fn instantiate(&self) -> Value {
        (self.factory)()
    }
}

impl fmt::Debug for TagDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Maps a one byte type ID to the type it stands for.
///
/// A new registry holds the 12 standard types. Extra types can be registered
/// under any unused ID; the standard ones can not be removed. Each codec call
/// takes the registry to use, so different callers can use different sets of
/// types.
///
/// A registry is plain data: to change it while it is shared you need `&mut`,
/// so it can not change under a read or write in progress.
///
/// ```
/// # use blocknbt::{TypeRegistry, error::ErrorKind};
/// let mut registry = TypeRegistry::new();
/// let err = registry.register_custom::<Marker>(1, "Marker").unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::RegistryConflict(1));
///
/// assert!(!registry.deregister(1));
/// assert!(registry.contains(1));
/// # #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// # struct Marker;
/// # impl blocknbt::CustomPayload for Marker {
/// #     fn read(&mut self, _: &mut dyn std::io::Read) -> blocknbt::error::Result<()> { Ok(()) }
/// #     fn write(&self, _: &mut dyn std::io::Write) -> blocknbt::error::Result<()> { Ok(()) }
/// #     fn write_snbt(&self, out: &mut String) { out.push_str("marker") }
/// #     fn to_json(&self) -> blocknbt::error::Result<serde_json::Value> { Ok(serde_json::Value::Null) }
/// #     fn from_json(&mut self, _: &serde_json::Value) -> blocknbt::error::Result<()> { Ok(()) }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: BTreeMap<u8, TagDescriptor>,
}

impl TypeRegistry {
    /// A registry holding the standard types.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        let mut seed = |ty: TagType, factory: fn() -> Value| {
            entries.insert(ty.id(), TagDescriptor::new(ty.name(), factory));
        };

        seed(TagType::Byte, || Value::Byte(0));
        seed(TagType::Short, || Value::Short(0));
        seed(TagType::Int, || Value::Int(0));
        seed(TagType::Long, || Value::Long(0));
        seed(TagType::Float, || Value::Float(0.0));
        seed(TagType::Double, || Value::Double(0.0));
        seed(TagType::ByteArray, || Value::ByteArray(ByteArray::default()));
        seed(TagType::String, || Value::String(String::new()));
        seed(TagType::List, || Value::List(List::new()));
        seed(TagType::Compound, || Value::Compound(Compound::new()));
        seed(TagType::IntArray, || Value::IntArray(IntArray::default()));
        seed(TagType::LongArray, || Value::LongArray(LongArray::default()));

        Self { entries }
    }

    /// Register a type under `id`. Fails if `id` is 0 (End), is already in
    /// use, or if the descriptor makes values of some other type ID. A failed
    /// registration leaves the registry as it was.
    pub fn register(&mut self, id: u8, descriptor: TagDescriptor) -> Result<()> {
        if id == TagType::End.id() {
            return Err(Error::reserved_id(id));
        }
        if let Some(existing) = self.entries.get(&id) {
            return Err(Error::id_in_use(id, existing.name()));
        }

        let made = descriptor.instantiate().id();
        if made != id {
            return Err(Error::malformed(format!(
                "descriptor {} registered as {} makes values of type {}",
                descriptor.name(),
                id,
                made
            )));
        }

        tracing::debug!(id, name = descriptor.name(), "registered tag type");
        self.entries.insert(id, descriptor);
        Ok(())
    }

    /// Register the custom payload `T` under `id`, with `T::default()` as the
    /// empty value.
    pub fn register_custom<T>(&mut self, id: u8, name: impl Into<Cow<'static, str>>) -> Result<()>
    where
        T: CustomPayload + Default,
    {
        self.register(
            id,
            TagDescriptor::new(name, move || Value::Custom(CustomValue::new(id, T::default()))),
        )
    }

    /// Remove a registered type. The End ID and the standard types can not be
    /// removed; for those, and for unknown IDs, this returns `false`.
    pub fn deregister(&mut self, id: u8) -> bool {
        if id <= TagType::MAX_STANDARD_ID {
            return false;
        }

        let removed = self.entries.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "deregistered tag type");
        }
        removed
    }

    pub fn resolve(&self, id: u8) -> Option<&TagDescriptor> {
        self.entries.get(&id)
    }

    /// A fresh empty value for `id`, or `None` if nothing is registered there.
    pub fn instantiate(&self, id: u8) -> Option<Value> {
        self.resolve(id).map(TagDescriptor::instantiate)
    }

    pub fn contains(&self, id: u8) -> bool {
        self.entries.contains_key(&id)
    }

    /// Registered IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.keys().copied()
    }

    /// Resolve `id` or fail with an unknown type error.
    pub(crate) fn require(&self, id: u8) -> Result<Value> {
        self.instantiate(id).ok_or_else(|| Error::unknown_type(id))
    }

    pub(crate) fn ensure_known(&self, id: u8) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::unknown_type(id))
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
