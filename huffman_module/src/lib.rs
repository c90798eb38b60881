//! A canonical Huffman-coding compressor/decompressor over a byte alphabet.
//!
//! [`encode`] makes two passes over a rewindable source: it counts byte
//! frequencies, builds a throwaway Huffman tree to derive a code length per
//! symbol, canonicalizes the lengths into concrete codewords, writes a
//! self-describing 257-byte header, rewinds, then streams the body as
//! packed codewords. [`decode`] reads that header, rebuilds the same
//! canonical codes from the length table alone, and streams symbols back
//! out using a length-dispatch lookup table.

pub mod bit_io;
pub mod canonical;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod stream;
pub mod tree;

pub use bit_io::CODE_WIDTH;
pub use canonical::CodeEntry;
pub use decoder::decode;
pub use encoder::encode;
pub use error::CodecError;
pub use stream::{ByteSink, ByteSource, FileSink, FileSource, SliceSource, VecSink};

/// Length in bytes of the header: 256 code-length bytes plus one `ignore_bits` byte.
pub const HEADER_LEN: usize = 257;
