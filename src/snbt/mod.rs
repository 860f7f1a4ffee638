//! Stringified NBT (SNBT), the text form used by Minecraft commands.
//!
//! Only writing is supported. Numbers carry a suffix giving their width:
//!
//! | Type   | Example    |
//! |--------|------------|
//! | Byte   | `5b`       |
//! | Short  | `5s`       |
//! | Int    | `5`        |
//! | Long   | `5L`       |
//! | Float  | `0.5f`     |
//! | Double | `0.5d`     |
//!
//! Arrays get a type prefix, `[B;1B,2B]`, `[I;1,2]` and `[L;1L,2L]`, while
//! lists are plain `[1,2]`. Compound members are written in insertion order.
//!
//! ```
//! # use blocknbt::{compound, snbt, SnbtConfig, TypeRegistry, Value};
//! let registry = TypeRegistry::new();
//! let value = Value::from(compound! { "b" => 5i8, "l" => -1i64 });
//!
//! let text = snbt::to_string(&value, &registry, &SnbtConfig::default()).unwrap();
//! assert_eq!(text, "{b:5b,l:-1L}");
//! ```
use crate::error::{Error, Result};
use crate::{Compound, List, TypeRegistry, Value};
use crate::stack::ensure_sufficient_stack;
use crate::MAX_DEPTH;

mod config;
mod escape;

pub use config::SnbtConfig;

/// Render `value` as SNBT.
///
/// Fails if the value nests deeper than [`MAX_DEPTH`] or holds a custom
/// type that `registry` doesn't know.
pub fn to_string(value: &Value, registry: &TypeRegistry, config: &SnbtConfig) -> Result<String> {
    let mut ser = Serializer {
        out: String::new(),
        registry,
        config,
    };
    ser.write_value(value, 0)?;
    Ok(ser.out)
}

struct Serializer<'a> {
    out: String,
    registry: &'a TypeRegistry,
    config: &'a SnbtConfig,
}

impl<'a> Serializer<'a> {
    fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_int(*v, "b"),
            Value::Short(v) => self.write_int(*v, "s"),
            Value::Int(v) => self.write_int(*v, ""),
            Value::Long(v) => self.write_int(*v, "L"),
            Value::Float(v) => self.write_float(*v, "f"),
            Value::Double(v) => self.write_float(*v, "d"),
            Value::String(v) => escape::write_quoted(&mut self.out, v),
            Value::ByteArray(v) => self.write_seq("[B;", v.as_slice(), depth, |s, b| {
                s.write_int(*b, "B");
                Ok(())
            })?,
            Value::IntArray(v) => self.write_seq("[I;", v.as_slice(), depth, |s, i| {
                s.write_int(*i, "");
                Ok(())
            })?,
            Value::LongArray(v) => self.write_seq("[L;", v.as_slice(), depth, |s, l| {
                s.write_int(*l, "L");
                Ok(())
            })?,
            Value::List(v) => ensure_sufficient_stack(|| self.write_list(v, depth))?,
            Value::Compound(v) => ensure_sufficient_stack(|| self.write_compound(v, depth))?,
            Value::Custom(v) => {
                self.registry.ensure_known(v.id())?;
                v.write_snbt(&mut self.out);
            }
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }
        if compound.is_empty() {
            self.out.push_str("{}");
            return Ok(());
        }

        let pretty = self.config.pretty_print;
        self.out.push('{');
        if pretty {
            self.newline(depth + 1);
        }

        for (i, (name, value)) in compound.iter().enumerate() {
            if i != 0 {
                self.out.push(',');
                if pretty {
                    self.newline(depth + 1);
                }
            }
            escape::write_name(&mut self.out, name);
            self.out.push_str(if pretty { ": " } else { ":" });
            self.write_value(value, depth + 1)?;
        }

        if pretty {
            self.newline(depth);
        }
        self.out.push('}');
        Ok(())
    }

    fn write_list(&mut self, list: &List, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }
        self.write_seq("[", list.as_slice(), depth, |s, v| s.write_value(v, depth + 1))
    }

    /// Write a bracketed sequence. Short sequences in pretty mode get one
    /// element per line, everything else stays on one line.
    fn write_seq<T>(
        &mut self,
        prefix: &str,
        items: &[T],
        depth: usize,
        mut each: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        self.out.push_str(prefix);
        if items.is_empty() {
            self.out.push(']');
            return Ok(());
        }

        let pretty = self.config.pretty_print;
        let spread = pretty && items.len() < self.config.inline_threshold;
        if spread {
            self.newline(depth + 1);
        } else if pretty {
            self.out.push(' ');
        }

        for (i, item) in items.iter().enumerate() {
            if i != 0 {
                self.out.push(',');
                if spread {
                    self.newline(depth + 1);
                } else if pretty {
                    self.out.push(' ');
                }
            }
            each(self, item)?;
        }

        if spread {
            self.newline(depth);
        }
        self.out.push(']');
        Ok(())
    }

    fn write_int<I: itoa::Integer>(&mut self, v: I, suffix: &str) {
        let mut buffer = itoa::Buffer::new();
        self.out.push_str(buffer.format(v));
        self.out.push_str(suffix);
    }

    fn write_float<F: ryu::Float>(&mut self, v: F, suffix: &str) {
        let mut buffer = ryu::Buffer::new();
        self.out.push_str(buffer.format(v));
        self.out.push_str(suffix);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        self.out
            .extend(std::iter::repeat(' ').take(depth * self.config.indent));
    }
}
