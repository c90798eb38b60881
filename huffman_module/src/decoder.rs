//! Reads a header, rebuilds canonical codes and lookup tables, and streams
//! the compressed body back out as bytes.

use crate::bit_io::{BitReader, CODE_WIDTH};
use crate::canonical;
use crate::error::CodecError;
use crate::stream::{ByteSink, ByteSource};

const NOT_FOUND: u16 = 256;

/// Decodes a Huffman-coded stream produced by [`crate::encoder::encode`].
///
/// `src` is consumed forward only. Returns [`CodecError::CorruptHeader`] if
/// the 257-byte header is short or describes an incomplete code, and
/// [`CodecError::CorruptMessage`] if the body cannot be resolved to valid
/// symbols.
pub fn decode(src: &mut impl ByteSource, sink: &mut impl ByteSink) -> Result<(), CodecError> {
    let mut lengths = [0u8; 256];
    for slot in lengths.iter_mut() {
        *slot = src.read_byte()?.ok_or(CodecError::CorruptHeader)?;
    }
    let ignore_bits = src.read_byte()?.ok_or(CodecError::CorruptHeader)?;
    if ignore_bits >= 8 {
        return Err(CodecError::CorruptHeader);
    }

    let (codes, perm) = canonical::build(&lengths)?;

    let mut inv_perm = [0u8; 256];
    for (i, &s) in perm.iter().enumerate() {
        inv_perm[s as usize] = i as u8;
    }

    let mut smallest_char = [0u8; 256];
    let mut smallest_code = [0u64; 256];
    let mut next_smallest_code = [0u64; 256];
    let mut max_length: u8 = 0;

    for i in 0..256usize {
        let symbol = perm[i];
        let cur_length = lengths[symbol as usize];
        let is_boundary = i == 0 || lengths[perm[i - 1] as usize] != cur_length;

        if is_boundary {
            if cur_length > 0 {
                smallest_char[cur_length as usize] = symbol;
                smallest_code[cur_length as usize] = codes[symbol as usize].value;
            }
            if i > 0 {
                let prev_length = lengths[perm[i - 1] as usize];
                next_smallest_code[prev_length as usize] =
                    codes[symbol as usize].value << (CODE_WIDTH - 1 - cur_length as u32);
            }
        }
        if cur_length > max_length {
            max_length = cur_length;
        }
    }
    next_smallest_code[max_length as usize] = 1u64 << 63;

    let mut start = [NOT_FOUND; 256];
    for (symbol, &length) in lengths.iter().enumerate() {
        if length == 0 {
            continue;
        }
        let value = codes[symbol].value;
        if length >= 8 {
            let fb = (value >> (length - 8)) as usize;
            start[fb] = start[fb].min(length as u16);
        } else {
            let fb = (value << (8 - length)) as usize;
            let span = 1usize << (8 - length);
            for i in 0..span {
                let idx = fb | i;
                start[idx] = start[idx].min(length as u16);
            }
        }
    }

    let mut reader = BitReader::new(src);
    reader.refill()?;

    loop {
        if reader.is_exhausted() && reader.buffered_len() <= ignore_bits as u32 {
            break;
        }

        let d9 = reader.peek9() as usize;
        let mut len = start[d9];
        if len >= NOT_FOUND {
            return Err(CodecError::CorruptMessage);
        }

        if len > 8 {
            while reader.value() >= next_smallest_code[len as usize] {
                len += 1;
            }
        }

        let offset =
            (reader.value() >> (CODE_WIDTH - 1 - len as u32)) - smallest_code[len as usize];
        let base = inv_perm[smallest_char[len as usize] as usize] as u64;
        let idx = base + offset;
        if idx >= 256 {
            return Err(CodecError::CorruptMessage);
        }

        sink.write_byte(perm[idx as usize])?;

        reader.consume(len as u32);
        reader.refill()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::stream::{SliceSource, VecSink};

    fn roundtrip(data: &[u8]) -> Vec<u8> {
        let mut src = SliceSource::new(data.to_vec());
        let mut encoded = VecSink::new();
        encode(&mut src, &mut encoded).unwrap();

        let mut encoded_src = SliceSource::new(encoded.into_inner());
        let mut decoded = VecSink::new();
        decode(&mut encoded_src, &mut decoded).unwrap();
        decoded.into_inner()
    }

    #[test]
    fn empty_input_roundtrips() {
        assert_eq!(roundtrip(b""), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol_roundtrips() {
        assert_eq!(roundtrip(b"aaaaaaaaaa"), b"aaaaaaaaaa".to_vec());
    }

    #[test]
    fn two_symbol_alphabet_roundtrips() {
        assert_eq!(roundtrip(b"ababababab"), b"ababababab".to_vec());
    }

    #[test]
    fn every_byte_value_roundtrips() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn tampered_ignore_bits_byte_is_rejected() {
        let mut src = SliceSource::new(b"test message".to_vec());
        let mut encoded = VecSink::new();
        encode(&mut src, &mut encoded).unwrap();
        let mut bytes = encoded.into_inner();
        bytes[256] = 0x7F;

        let mut bad_src = SliceSource::new(bytes);
        let mut sink = VecSink::new();
        assert!(matches!(
            decode(&mut bad_src, &mut sink),
            Err(CodecError::CorruptHeader)
        ));
    }

    #[test]
    fn short_header_is_rejected() {
        let mut src = SliceSource::new(vec![0u8; 10]);
        let mut sink = VecSink::new();
        assert!(matches!(
            decode(&mut src, &mut sink),
            Err(CodecError::CorruptHeader)
        ));
    }
}
