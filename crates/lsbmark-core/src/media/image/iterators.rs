use std::iter::Flatten;
use std::slice::{Iter, IterMut};

use crate::media::grid::RgbPixel;

/// Readonly access to the color channels of row major pixels, in raster order
pub struct RasterChannels<'a> {
    channels: Flatten<Iter<'a, RgbPixel>>,
}

impl<'a> RasterChannels<'a> {
    pub(crate) fn new(pixels: &'a [RgbPixel]) -> Self {
        Self {
            channels: pixels.iter().flatten(),
        }
    }
}

impl<'a> Iterator for RasterChannels<'a> {
    type Item = &'a u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next()
    }
}

/// Mutable access to the color channels of row major pixels, in raster order
pub struct RasterChannelsMut<'a> {
    channels: Flatten<IterMut<'a, RgbPixel>>,
}

impl<'a> RasterChannelsMut<'a> {
    pub(crate) fn new(pixels: &'a mut [RgbPixel]) -> Self {
        Self {
            channels: pixels.iter_mut().flatten(),
        }
    }
}

impl<'a> Iterator for RasterChannelsMut<'a> {
    type Item = &'a mut u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next()
    }
}
