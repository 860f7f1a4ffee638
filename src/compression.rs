//! File level compression. NBT files are usually gzip compressed, chunk data
//! inside region files usually zlib compressed.
use std::io::{self, BufRead, Read, Write};

use flate2::bufread::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use serde::{Deserialize, Serialize};

/// How a binary stream is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zlib,
}

impl Compression {
    /// Guess the compression from the first bytes of a stream. Gzip streams
    /// start `1f 8b`, zlib streams `78` followed by one of the standard
    /// level bytes. Anything else is taken to be uncompressed.
    ///
    /// ```
    /// # use blocknbt::Compression;
    /// assert_eq!(Compression::detect(&[0x1f, 0x8b, 0x08]), Compression::Gzip);
    /// assert_eq!(Compression::detect(&[0x78, 0x9c]), Compression::Zlib);
    /// assert_eq!(Compression::detect(&[10, 0, 0]), Compression::None);
    /// ```
    pub fn detect(head: &[u8]) -> Compression {
        let detected = match head {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
            _ => Compression::None,
        };
        tracing::trace!(?detected, "detected compression");
        detected
    }

    /// Wrap `input` so reads give the decompressed bytes.
    pub fn decoder<R: BufRead>(self, input: R) -> Decoder<R> {
        match self {
            Compression::None => Decoder::None(input),
            Compression::Gzip => Decoder::Gzip(GzDecoder::new(input)),
            Compression::Zlib => Decoder::Zlib(ZlibDecoder::new(input)),
        }
    }

    /// Wrap `output` so writes are compressed. Call [`Encoder::finish`] when
    /// done, dropping the encoder may lose the end of the stream.
    pub fn encoder<W: Write>(self, output: W) -> Encoder<W> {
        let level = flate2::Compression::default();
        match self {
            Compression::None => Encoder::None(output),
            Compression::Gzip => Encoder::Gzip(GzEncoder::new(output, level)),
            Compression::Zlib => Encoder::Zlib(ZlibEncoder::new(output, level)),
        }
    }

    pub fn compress(self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = self.encoder(Vec::with_capacity(data.len()));
        encoder.write_all(data)?;
        encoder.finish()
    }

    pub fn decompress(self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decoder(data).read_to_end(&mut out)?;
        Ok(out)
    }
}

/// A reader undoing one of the [`Compression`] schemes.
pub enum Decoder<R: BufRead> {
    None(R),
    Gzip(GzDecoder<R>),
    Zlib(ZlibDecoder<R>),
}

impl<R: BufRead> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decoder::None(r) => r.read(buf),
            Decoder::Gzip(r) => r.read(buf),
            Decoder::Zlib(r) => r.read(buf),
        }
    }
}

/// A writer applying one of the [`Compression`] schemes.
pub enum Encoder<W: Write> {
    None(W),
    Gzip(GzEncoder<W>),
    Zlib(ZlibEncoder<W>),
}

impl<W: Write> Encoder<W> {
    /// Write out the rest of the compressed stream and return the inner
    /// writer.
    pub fn finish(self) -> io::Result<W> {
        match self {
            Encoder::None(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Encoder::Gzip(w) => w.finish(),
            Encoder::Zlib(w) => w.finish(),
        }
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Encoder::None(w) => w.write(buf),
            Encoder::Gzip(w) => w.write(buf),
            Encoder::Zlib(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Encoder::None(w) => w.flush(),
            Encoder::Gzip(w) => w.flush(),
            Encoder::Zlib(w) => w.flush(),
        }
    }
}
