use image::{Rgb, RgbImage};

use crate::media::image::iterators::{RasterChannels, RasterChannelsMut};
use crate::{LsbError, Result};

/// Number of color channels per pixel that carry information, R, G and B
pub const CHANNELS: usize = 3;

/// One pixel as `[R, G, B]`
pub type RgbPixel = [u8; CHANNELS];

/// A plain grid of RGB pixels, stored row by row.
///
/// This is the carrier the codec works on; it owns no file resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<RgbPixel>,
}

impl PixelGrid {
    /// Creates a grid from row major pixels, the number of pixels must match `width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<RgbPixel>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(LsbError::DimensionMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a grid where every pixel has the same color
    pub fn filled(width: u32, height: u32, pixel: RgbPixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Creates a grid by calling `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> RgbPixel,
    {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&RgbPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    pub fn pixels(&self) -> &[RgbPixel] {
        &self.pixels
    }

    /// Number of bits that can be hidden, one per color channel
    pub fn capacity(&self) -> usize {
        self.pixels.len() * CHANNELS
    }

    /// All color channels in raster order: row by row, left to right, R before G before B
    pub fn channels(&self) -> RasterChannels<'_> {
        RasterChannels::new(&self.pixels)
    }

    pub(crate) fn channels_mut(&mut self) -> RasterChannelsMut<'_> {
        RasterChannelsMut::new(&mut self.pixels)
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();

        Self {
            width,
            height,
            pixels: image.pixels().map(|p| p.0).collect(),
        }
    }
}

impl From<&PixelGrid> for RgbImage {
    fn from(grid: &PixelGrid) -> Self {
        let width = grid.width as usize;
        RgbImage::from_fn(grid.width, grid.height, |x, y| {
            Rgb(grid.pixels[y as usize * width + x as usize])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_refuse_pixels_not_matching_the_dimensions() {
        let result = PixelGrid::new(2, 2, vec![[0, 0, 0]; 3]);

        match result {
            Err(LsbError::DimensionMismatch {
                width,
                height,
                pixels,
            }) => assert_eq!((width, height, pixels), (2, 2, 3)),
            other => panic!("Expected a dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_store_pixels_row_by_row() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]);

        assert_eq!(
            grid.pixels(),
            [
                [0, 0, 0],
                [1, 0, 0],
                [2, 0, 0],
                [0, 1, 0],
                [1, 1, 0],
                [2, 1, 0]
            ]
        );
        assert_eq!(grid.pixel(2, 1), Some(&[2, 1, 0]));
        assert_eq!(grid.pixel(3, 0), None);
    }

    #[test]
    fn should_offer_three_bits_per_pixel() {
        assert_eq!(PixelGrid::filled(2, 2, [0, 0, 0]).capacity(), 12);
        assert_eq!(PixelGrid::filled(3, 3, [0, 0, 0]).capacity(), 27);
        assert_eq!(PixelGrid::filled(0, 5, [0, 0, 0]).capacity(), 0);
    }

    #[test]
    fn should_convert_from_and_into_rgb_images() {
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));
        let grid = PixelGrid::from(image.clone());

        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.pixel(3, 2), Some(&[3, 2, 6]));
        assert_eq!(RgbImage::from(&grid), image);
    }
}
