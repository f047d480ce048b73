use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::media::codec_options::{CodecOptions, Framing, LENGTH_HEADER_BYTES};
use crate::media::grid::PixelGrid;
use crate::media::image::iterators::RasterChannels;
use crate::{LsbError, Result};

/// Reads the one bit of information a carrier holds
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        self & 1 == 1
    }
}

/// A group of up to 8 unveiled bits, MSB first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    Byte(u8),
    /// the carrier ran out before 8 bits were read, `value` holds the `bits` read so far
    Partial { value: u8, bits: u8 },
}

/// Turns the channel LSBs of a grid into bytes, in raster order
pub struct ByteScanner<'i> {
    channels: RasterChannels<'i>,
}

impl<'i> ByteScanner<'i> {
    pub fn new(grid: &'i PixelGrid) -> Self {
        Self {
            channels: grid.channels(),
        }
    }

    /// Next complete byte, `None` once fewer than 8 bits are left
    pub fn next_byte(&mut self) -> Option<u8> {
        match self.next()? {
            Chunk::Byte(b) => Some(b),
            Chunk::Partial { .. } => None,
        }
    }
}

impl Iterator for ByteScanner<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        let mut value = 0u8;
        let mut bits = 0u8;
        while bits < 8 {
            let Some(channel) = self.channels.next() else {
                break;
            };
            value = (value << 1) | u8::from(channel.unveil_bit());
            bits += 1;
        }

        match bits {
            0 => None,
            8 => Some(Chunk::Byte(value)),
            bits => Some(Chunk::Partial { value, bits }),
        }
    }
}

/// Unveils the plaintext hidden in `grid` according to the framing and byte check of `options`.
pub fn decode(grid: &PixelGrid, options: &CodecOptions) -> Result<Vec<u8>> {
    let content = match options.framing {
        Framing::Terminator(terminator) => {
            unveil_until(grid, terminator, options.legacy_truncation)
        }
        Framing::LengthPrefixed => unveil_length_prefixed(grid)?,
    };
    options.byte_check.verify(&content)?;

    Ok(content)
}

/// Collects bytes until `terminator` shows up, the terminator is not part of the result.
///
/// The scan stops right at the terminator, the rest of the grid is not looked at.
/// When the grid ends without a terminator all complete bytes are returned,
/// unless `legacy_truncation` asks for the behaviour of the first generation:
/// then a trailing partial chunk counts as byte and the last byte gets dropped.
pub fn unveil_until(grid: &PixelGrid, terminator: u8, legacy_truncation: bool) -> Vec<u8> {
    let mut content = Vec::new();

    for chunk in ByteScanner::new(grid) {
        let value = match chunk {
            Chunk::Byte(b) => b,
            Chunk::Partial { value, .. } if legacy_truncation => value,
            Chunk::Partial { .. } => break,
        };
        if value == terminator {
            debug!("terminator found after {} bytes", content.len());
            return content;
        }
        content.push(value);
    }

    debug!("no terminator found in {} bytes", content.len());
    if legacy_truncation {
        content.pop();
    }

    content
}

/// Reads a 32 bit big endian length header followed by that many bytes.
pub fn unveil_length_prefixed(grid: &PixelGrid) -> Result<Vec<u8>> {
    let mut scanner = ByteScanner::new(grid);
    let mut header = [0u8; LENGTH_HEADER_BYTES];
    for slot in header.iter_mut() {
        *slot = scanner.next_byte().ok_or(LsbError::NoSecretData)?;
    }

    let declared = (&header[..]).read_u32::<BigEndian>()? as usize;
    let available = (grid.capacity() >> 3) - LENGTH_HEADER_BYTES;
    if declared > available {
        return Err(LsbError::InvalidLengthHeader {
            declared,
            available,
        });
    }

    let content: Vec<u8> = std::iter::from_fn(|| scanner.next_byte())
        .take(declared)
        .collect();
    debug!("unveiled {} length prefixed bytes", content.len());

    Ok(content)
}
