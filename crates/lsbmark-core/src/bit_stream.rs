use bitstream_io::{BigEndian, BitRead, BitReader};

/// Lazily yields the bits of a byte slice, most significant bit first.
///
/// The stream is finite and cannot be restarted, it always knows how many bits are left.
///
/// ## Example of usage
/// ```rust
/// use lsbmark_core::BitStream;
///
/// // 'A' = 0b0100_0001
/// let bits: Vec<bool> = BitStream::new(b"A").collect();
/// assert_eq!(bits, [false, true, false, false, false, false, false, true]);
/// ```
pub struct BitStream<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
    remaining: usize,
}

impl<'a> BitStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: BitReader::endian(bytes, BigEndian),
            remaining: bytes.len() << 3,
        }
    }
}

impl Iterator for BitStream<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.reader.read_bit().ok()?;
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BitStream<'_> {}
