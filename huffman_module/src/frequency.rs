//! A single sequential pass over the source, counting byte occurrences.

use crate::stream::ByteSource;
use std::io;

/// Reads `src` to exhaustion, returning a 256-entry occurrence histogram.
///
/// Does not rewind `src`; the caller rewinds once it needs to stream the
/// bytes again.
pub fn count_frequencies(src: &mut impl ByteSource) -> io::Result<[u64; 256]> {
    let mut counts = [0u64; 256];
    while let Some(byte) = src.read_byte()? {
        counts[byte as usize] += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SliceSource;

    #[test]
    fn counts_every_byte() {
        let mut src = SliceSource::new(vec![b'a', b'a', b'b']);
        let counts = count_frequencies(&mut src).unwrap();
        assert_eq!(counts[b'a' as usize], 2);
        assert_eq!(counts[b'b' as usize], 1);
        assert_eq!(counts.iter().sum::<u64>(), 3);
    }

    #[test]
    fn empty_source_yields_all_zero() {
        let mut src = SliceSource::new(Vec::new());
        let counts = count_frequencies(&mut src).unwrap();
        assert_eq!(counts, [0u64; 256]);
    }
}
