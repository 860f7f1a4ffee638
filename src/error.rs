//! Contains the Error and Result type used by every codec in this crate.
use std::fmt::Display;

/// An error from reading, writing or converting NBT data, or from mutating a
/// [`TypeRegistry`][`crate::TypeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Nesting went deeper than [`MAX_DEPTH`][`crate::MAX_DEPTH`].
    StructureTooComplex,

    /// The first tag of a stream was not a compound.
    InvalidRoot,

    /// A type ID had no entry in the registry in use.
    UnknownType(u8),

    /// Tried to register the End ID or an ID that is already taken.
    RegistryConflict(u8),

    /// The input ended part way through a value.
    UnexpectedEof,

    /// Any other IO failure from the underlying reader or writer.
    Io,

    /// Expected Java modified UTF-8 but was not valid. Contains the raw bytes.
    Nonunicode(Vec<u8>),

    /// Something was present but could not be a valid value, eg a negative
    /// length or a JSON document without a `type` field.
    Malformed,

    /// An element was added to a list holding a different element type.
    ListTypeMismatch { expected: u8, found: u8 },
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn too_complex(depth: usize) -> Error {
        Error {
            msg: format!("nbt structure too complex (depth {} > {})", depth, crate::MAX_DEPTH),
            kind: ErrorKind::StructureTooComplex,
        }
    }

    pub(crate) fn json_too_deep(limit: usize) -> Error {
        Error {
            msg: format!("json nested more than {} levels deep", limit),
            kind: ErrorKind::StructureTooComplex,
        }
    }

    pub(crate) fn invalid_root(tag: u8) -> Error {
        Error {
            msg: format!("invalid nbt: root tag must be a compound, found {}", tag),
            kind: ErrorKind::InvalidRoot,
        }
    }

    pub(crate) fn unknown_type(id: u8) -> Error {
        Error {
            msg: format!("tag type with id {} not present in type registry", id),
            kind: ErrorKind::UnknownType(id),
        }
    }

    pub(crate) fn reserved_id(id: u8) -> Error {
        Error {
            msg: format!("cannot register tag type with id {}: id is reserved", id),
            kind: ErrorKind::RegistryConflict(id),
        }
    }

    pub(crate) fn id_in_use(id: u8, existing: &str) -> Error {
        Error {
            msg: format!(
                "cannot register tag type with id {}: already in use by {}",
                id, existing
            ),
            kind: ErrorKind::RegistryConflict(id),
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Error {
        Error {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }

    pub(crate) fn list_mismatch(expected: u8, found: u8) -> Error {
        Error {
            msg: format!(
                "list holds elements of type {}, cannot add type {}",
                expected, found
            ),
            kind: ErrorKind::ListTypeMismatch { expected, found },
        }
    }

    pub(crate) fn malformed(msg: impl Display) -> Error {
        Error {
            msg: msg.to_string(),
            kind: ErrorKind::Malformed,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: format!("eof: unexpectedly ran out of input: {}", e),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            };
        }
        if e.is_eof() {
            return Self {
                msg: format!("eof: unexpectedly ran out of input: {}", e),
                kind: ErrorKind::UnexpectedEof,
            };
        }
        Error::malformed(format!("invalid json: {}", e))
    }
}
