use log::debug;

use crate::bit_stream::BitStream;
use crate::media::grid::PixelGrid;
use crate::{LsbError, Result};

/// Replaces the least significant bit of a carrier with one bit of information
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// Hides `payload` in the color channel LSBs of a copy of `grid`, 8 bits per byte, MSB first.
///
/// The caller's grid is left untouched. Fails with [`LsbError::CapacityExceeded`]
/// before anything is written when the payload does not fit.
///
/// ## Example of usage
/// ```rust
/// use lsbmark_core::{encode, PixelGrid};
///
/// let carrier = PixelGrid::filled(3, 3, [0, 0, 0]);
/// let secret = encode(&carrier, b"A#").expect("Cannot hide payload");
///
/// // 'A' = 0b0100_0001
/// assert_eq!(secret.pixel(0, 0), Some(&[0, 1, 0]));
/// assert_eq!(carrier.pixel(0, 0), Some(&[0, 0, 0]));
/// ```
pub fn encode(grid: &PixelGrid, payload: &[u8]) -> Result<PixelGrid> {
    encode_bits(grid, BitStream::new(payload))
}

/// Hides any exact sized sequence of bits, the building block of [`encode`].
pub fn encode_bits<I>(grid: &PixelGrid, bits: I) -> Result<PixelGrid>
where
    I: IntoIterator<Item = bool>,
    I::IntoIter: ExactSizeIterator,
{
    let bits = bits.into_iter();
    let required = bits.len();
    let available = grid.capacity();
    if required > available {
        return Err(LsbError::CapacityExceeded {
            required,
            available,
        });
    }

    let mut carrier = grid.clone();
    for (bit, channel) in bits.zip(carrier.channels_mut()) {
        channel.hide_bit(bit);
    }
    debug!(
        "hid {required} of {available} bits in a {}x{} grid",
        grid.width(),
        grid.height()
    );

    Ok(carrier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_set_and_clear_the_lowest_bit_only() {
        let mut c: u8 = 0b1010_1010;
        (&mut c).hide_bit(true);
        assert_eq!(c, 0b1010_1011);
        (&mut c).hide_bit(false);
        assert_eq!(c, 0b1010_1010);
        (&mut c).hide_bit(false);
        assert_eq!(c, 0b1010_1010);
    }

    #[test]
    fn should_fail_on_a_2x2_image_for_two_bytes() {
        let carrier = PixelGrid::filled(2, 2, [0, 0, 0]);

        match encode(&carrier, b"A#") {
            Err(LsbError::CapacityExceeded {
                required,
                available,
            }) => {
                assert_eq!(required, 16);
                assert_eq!(available, 12);
            }
            other => panic!("Expected a capacity error, got {other:?}"),
        }
    }

    #[test]
    fn should_fill_channels_in_raster_order() {
        let carrier = PixelGrid::filled(3, 3, [0, 0, 0]);
        let secret = encode(&carrier, b"A#").unwrap();

        // A = 01000001, # = 00100011
        let expected = [
            [0, 1, 0],
            [0, 0, 0],
            [0, 1, 0],
            [0, 1, 0],
            [0, 0, 1],
            [1, 0, 0],
            [0, 0, 0],
            [0, 0, 0],
            [0, 0, 0],
        ];
        assert_eq!(secret.pixels(), expected);
    }

    #[test]
    fn should_write_a_partially_used_pixel_as_computed() {
        let carrier = PixelGrid::filled(2, 1, [0xff, 0xff, 0xff]);
        let secret = encode_bits(&carrier, [false, false, true, false]).unwrap();

        assert_eq!(secret.pixels(), [[0xfe, 0xfe, 0xff], [0xfe, 0xff, 0xff]]);
    }

    #[test]
    fn should_accept_an_empty_payload() {
        let carrier = PixelGrid::filled(1, 1, [7, 8, 9]);

        assert_eq!(encode(&carrier, &[]).unwrap(), carrier);
    }
}
