pub mod codec_options;
pub mod grid;
pub mod image;

use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use ::image::io::Reader as ImageReader;
use ::image::{ImageFormat, RgbImage};
use log::error;

pub use codec_options::{ByteCheck, CodecOptions, Framing};
pub use grid::{PixelGrid, RgbPixel};

use crate::{LsbError, Result};

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

/// Loads an image file as [`PixelGrid`], alpha and palettes are flattened to plain RGB.
///
/// The format is guessed from the file content, the extension is only a fallback.
pub fn load_grid(file: &Path) -> Result<PixelGrid> {
    let reader = ImageReader::open(file)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| {
            error!("Error opening image {file:?}: {e}");
            LsbError::InvalidImageMedia
        })?;
    if reader.format().is_none() {
        error!("Unsupported media {file:?}");
        return Err(LsbError::UnsupportedMedia);
    }

    let image = reader.decode().map_err(|e| {
        error!("Error decoding image {file:?}: {e}");
        LsbError::InvalidImageMedia
    })?;

    Ok(image.to_rgb8().into())
}

impl PixelGrid {
    /// Writes the grid as PNG, whatever format it was loaded from
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        RgbImage::from(self)
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                LsbError::ImageEncodingError
            })
    }
}

impl Persist for PixelGrid {
    /// The PNG is encoded in memory first, so a failed encoding leaves no file behind
    fn save_as(&self, file: &Path) -> Result<()> {
        let mut png = Cursor::new(Vec::new());
        self.save_to_writer(&mut png)?;

        fs::write(file, png.into_inner()).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            LsbError::WriteError { source: e }
        })
    }
}
