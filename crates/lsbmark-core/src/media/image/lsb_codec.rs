use super::{decoder, encoder};
use crate::media::codec_options::CodecOptions;
use crate::media::grid::PixelGrid;
use crate::{Message, Result};

/// Hides and unveils messages with one fixed set of [`CodecOptions`]
#[derive(Debug, Default)]
pub struct LsbCodec {
    options: CodecOptions,
}

impl LsbCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Frames the message and hides it in a copy of `grid`
    pub fn hide(&self, grid: &PixelGrid, message: &Message) -> Result<PixelGrid> {
        let framed = message.to_framed(&self.options.framing)?;

        encoder::encode(grid, &framed)
    }

    /// Unveils the message hidden in `grid`, without its framing
    pub fn unveil(&self, grid: &PixelGrid) -> Result<Message> {
        decoder::decode(grid, &self.options).map(Message::from)
    }

    /// Largest message in bytes that fits into `grid` with the configured framing
    pub fn capacity(&self, grid: &PixelGrid) -> usize {
        (grid.capacity() >> 3).saturating_sub(self.options.framing.overhead())
    }
}
