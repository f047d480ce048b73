use std::path::Path;

use log::info;

use crate::media::{load_grid, CodecOptions, Persist};
use crate::{LsbCodec, LsbError, Message, Result};

/// Hides a text message in `media` and stores the result as PNG in `write_to_file`.
///
/// Nothing is written when the message is missing or does not fit.
pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<&str>,
    options: CodecOptions,
) -> Result<()> {
    let message = match message {
        Some(text) if !text.is_empty() => Message::from_text(text)?,
        _ => return Err(LsbError::MissingMessage),
    };

    let carrier = load_grid(media)?;
    let codec = LsbCodec::new(options);
    info!(
        "hiding {} bytes in {media:?}, capacity is {} bytes",
        message.len(),
        codec.capacity(&carrier)
    );

    codec.hide(&carrier, &message)?.save_as(write_to_file)
}

/// Unveils the text message hidden in `secret_media`
pub fn unveil(secret_media: &Path, options: CodecOptions) -> Result<String> {
    let grid = load_grid(secret_media)?;
    let message = LsbCodec::new(options).unveil(&grid)?;

    Ok(message.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{Framing, PixelGrid};
    use tempfile::TempDir;

    fn carrier_file(dir: &TempDir, width: u32, height: u32) -> Result<std::path::PathBuf> {
        let file = dir.path().join("carrier.png");
        PixelGrid::from_fn(width, height, |x, y| [x as u8, y as u8, 0x80]).save_as(&file)?;

        Ok(file)
    }

    #[test]
    fn should_hide_and_unveil_a_message() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = carrier_file(&out_dir, 16, 16)?;
        let secret = out_dir.path().join("encoded_image.png");

        hide(&carrier, &secret, Some("Hello World!"), CodecOptions::default())?;

        assert_eq!(unveil(&secret, CodecOptions::default())?, "Hello World!");
        Ok(())
    }

    #[test]
    fn should_hide_and_unveil_length_prefixed() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = carrier_file(&out_dir, 16, 16)?;
        let secret = out_dir.path().join("encoded_image.png");
        let options = || CodecOptions::default().with_framing(Framing::LengthPrefixed);

        hide(&carrier, &secret, Some("#1 and #2"), options())?;

        assert_eq!(unveil(&secret, options())?, "#1 and #2");
        Ok(())
    }

    #[test]
    fn should_refuse_a_missing_or_empty_message() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = carrier_file(&out_dir, 4, 4)?;
        let secret = out_dir.path().join("encoded_image.png");

        for message in [None, Some("")] {
            let result = hide(&carrier, &secret, message, CodecOptions::default());
            assert!(matches!(result, Err(LsbError::MissingMessage)));
        }
        assert!(!secret.exists());
        Ok(())
    }

    #[test]
    fn should_not_write_anything_when_the_message_does_not_fit() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = carrier_file(&out_dir, 2, 2)?;
        let secret = out_dir.path().join("encoded_image.png");

        let result = hide(&carrier, &secret, Some("A"), CodecOptions::default());

        assert!(matches!(
            result,
            Err(LsbError::CapacityExceeded {
                required: 16,
                available: 12
            })
        ));
        assert!(!secret.exists(), "No output file should be written");
        Ok(())
    }
}
