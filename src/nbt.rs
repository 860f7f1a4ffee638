use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::{binary, json, snbt, Compression, SnbtConfig, Tag, TypeRegistry, Value};

/// One place holding everything the codecs need: a type registry, the SNBT
/// layout, and the compression to write with.
///
/// Reads detect compression on their own, so a file written gzip compressed
/// can be read by an `Nbt` set up for zlib.
///
/// ```
/// # use blocknbt::{compound, Compression, Nbt, Tag};
/// let nbt = Nbt::new().with_compression(Compression::Gzip);
/// let root = Tag::new("root", compound! { "int" => -981735 });
///
/// let bytes = nbt.to_bytes(&root).unwrap();
/// assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
/// assert_eq!(nbt.from_bytes(&bytes).unwrap(), root);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nbt {
    registry: TypeRegistry,
    snbt_config: SnbtConfig,
    compression: Compression,
}

impl Nbt {
    /// Standard types, compact SNBT, no compression.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_snbt_config(mut self, config: SnbtConfig) -> Self {
        self.snbt_config = config;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The registry, for registering custom types.
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    pub fn set_registry(&mut self, registry: TypeRegistry) {
        self.registry = registry;
    }

    pub fn snbt_config(&self) -> &SnbtConfig {
        &self.snbt_config
    }

    pub fn set_snbt_config(&mut self, config: SnbtConfig) {
        self.snbt_config = config;
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn set_compression(&mut self, compression: Compression) {
        self.compression = compression;
    }

    /// Encode `tag` with the configured compression.
    pub fn to_bytes(&self, tag: &Tag) -> Result<Vec<u8>> {
        let raw = binary::to_bytes(tag, &self.registry)?;
        Ok(self.compression.compress(&raw)?)
    }

    /// Decode a tree, detecting its compression.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<Tag> {
        match Compression::detect(bytes) {
            Compression::None => binary::from_bytes(bytes, &self.registry),
            compression => binary::from_reader(compression.decoder(bytes), &self.registry),
        }
    }

    /// Encode `tag` to `writer` with the configured compression.
    pub fn to_writer<W: Write>(&self, writer: W, tag: &Tag) -> Result<()> {
        self.to_writer_with(writer, tag, self.compression)
    }

    /// Encode `tag` to `writer` with the given compression.
    pub fn to_writer_with<W: Write>(
        &self,
        writer: W,
        tag: &Tag,
        compression: Compression,
    ) -> Result<()> {
        let mut encoder = compression.encoder(writer);
        binary::to_writer(&mut encoder, tag, &self.registry)?;
        encoder.finish()?;
        Ok(())
    }

    /// Decode a tree from `reader`, detecting its compression.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Tag> {
        let mut reader = BufReader::new(reader);
        let compression = Compression::detect(reader.fill_buf()?);
        binary::from_reader(compression.decoder(reader), &self.registry)
    }

    pub fn to_file(&self, path: impl AsRef<Path>, tag: &Tag) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut out = BufWriter::new(file);
        self.to_writer(&mut out, tag)?;
        out.flush()?;
        tracing::debug!(path = %path.as_ref().display(), "wrote nbt file");
        Ok(())
    }

    pub fn from_file(&self, path: impl AsRef<Path>) -> Result<Tag> {
        let file = File::open(path.as_ref())?;
        let tag = self.from_reader(file)?;
        tracing::debug!(path = %path.as_ref().display(), "read nbt file");
        Ok(tag)
    }

    /// Render `value` as SNBT with the configured layout.
    pub fn to_snbt(&self, value: &Value) -> Result<String> {
        snbt::to_string(value, &self.registry, &self.snbt_config)
    }

    pub fn to_json(&self, tag: &Tag) -> Result<serde_json::Value> {
        json::to_json(tag, &self.registry)
    }

    pub fn from_json(&self, doc: &serde_json::Value) -> Result<Tag> {
        json::from_json(doc, &self.registry)
    }

    /// JSON text for `tag`, pretty printed when the SNBT layout is.
    pub fn to_json_string(&self, tag: &Tag) -> Result<String> {
        json::to_json_string(tag, &self.registry, self.snbt_config.pretty_print)
    }

    pub fn from_json_str(&self, s: &str) -> Result<Tag> {
        json::from_json_str(s, &self.registry)
    }
}
