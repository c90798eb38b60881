//! Orchestrates the two-pass encode: count, build a tree, canonicalize,
//! emit the header, then stream codewords for the body.

use crate::bit_io::BitWriter;
use crate::canonical;
use crate::error::CodecError;
use crate::frequency::count_frequencies;
use crate::stream::{ByteSink, ByteSource};
use crate::tree::build_lengths;

/// Encodes `src` into a Huffman-coded stream written to `sink`.
///
/// `src` must support [`ByteSource::rewind`]: frequencies are counted on a
/// first pass, then the source is rewound so its bytes can be translated
/// into codewords on the second.
pub fn encode(src: &mut impl ByteSource, sink: &mut impl ByteSink) -> Result<(), CodecError> {
    let counts = count_frequencies(src)?;
    let lengths = build_lengths(&counts);
    let (codes, _perm) = canonical::build(&lengths)?;

    for &length in lengths.iter() {
        sink.write_byte(length)?;
    }

    let msg_bits: u64 = counts
        .iter()
        .zip(lengths.iter())
        .map(|(&count, &length)| count * length as u64)
        .sum();
    let ignore_bits = ((8 - (msg_bits % 8)) % 8) as u8;
    sink.write_byte(ignore_bits)?;

    src.rewind()?;

    let mut writer = BitWriter::new(SinkHandle(sink));
    while let Some(byte) = src.read_byte()? {
        let entry = codes[byte as usize];
        writer.push(entry.value, entry.length)?;
    }
    let (SinkHandle(_sink), actual_ignore_bits) = writer.finish()?;
    debug_assert_eq!(actual_ignore_bits, ignore_bits);

    Ok(())
}

/// Adapts a borrowed `&mut impl ByteSink` into an owned [`ByteSink`] so it
/// can be handed to [`BitWriter`], which takes its sink by value.
struct SinkHandle<'a, S: ByteSink + ?Sized>(&'a mut S);

impl<'a, S: ByteSink + ?Sized> ByteSink for SinkHandle<'a, S> {
    fn write_byte(&mut self, byte: u8) -> std::io::Result<()> {
        self.0.write_byte(byte)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{SliceSource, VecSink};

    #[test]
    fn empty_input_produces_minimum_header_only() {
        let mut src = SliceSource::new(Vec::new());
        let mut sink = VecSink::new();
        encode(&mut src, &mut sink).unwrap();
        let out = sink.into_inner();
        assert_eq!(out.len(), 257);
        assert!(out[..256].iter().all(|&b| b == 0));
        assert_eq!(out[256], 0);
    }

    #[test]
    fn single_symbol_message_matches_spec_example() {
        let mut src = SliceSource::new(b"a".to_vec());
        let mut sink = VecSink::new();
        encode(&mut src, &mut sink).unwrap();
        let out = sink.into_inner();
        assert_eq!(out[b'a' as usize], 1);
        assert_eq!(out[256], 7);
        assert_eq!(out[257], 0x00);
    }

    #[test]
    fn two_symbol_message_matches_spec_example() {
        let mut src = SliceSource::new(b"ab".to_vec());
        let mut sink = VecSink::new();
        encode(&mut src, &mut sink).unwrap();
        let out = sink.into_inner();
        assert_eq!(out[b'a' as usize], 1);
        assert_eq!(out[b'b' as usize], 1);
        assert_eq!(out[256], 6);
        assert_eq!(out[257], 0x40);
    }
}
