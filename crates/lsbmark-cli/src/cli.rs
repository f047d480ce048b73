use std::path::PathBuf;

use clap::Parser;
use lsbmark_core::{ByteCheck, CodecOptions, Framing, LsbError};

use crate::CliResult;

pub const DEFAULT_OUTPUT: &str = "encoded_image.png";

/// Image steganography tool, hides a short text message in the least significant bits
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the image file
    #[arg(value_name = "image path")]
    pub image_path: PathBuf,

    /// Message to encode
    #[arg(value_name = "message", default_value = "")]
    pub message: String,

    /// Encode the message into the image
    #[arg(long)]
    pub encode: bool,

    /// Decode the message from the image
    #[arg(long)]
    pub decode: bool,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Character that marks the end of the message
    #[arg(long, value_name = "char", default_value_t = '#')]
    pub terminator: char,

    /// Store the message length up front instead of a terminator, allows any character in the message
    #[arg(long)]
    pub length_prefixed: bool,

    /// Decode like the first generation: drop the last character when no terminator was found
    #[arg(long)]
    pub legacy: bool,

    /// Fail on decoded characters outside of 7 bit ASCII
    #[arg(long)]
    pub strict_ascii: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Encode,
    Decode,
    Nothing,
}

impl CliArgs {
    /// `--encode` wins when both flags are given
    pub fn action(&self) -> Action {
        if self.encode {
            Action::Encode
        } else if self.decode {
            Action::Decode
        } else {
            Action::Nothing
        }
    }

    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let framing = if self.length_prefixed {
            Framing::LengthPrefixed
        } else {
            let terminator = u8::try_from(self.terminator)
                .map_err(|_| LsbError::UnencodableCharacter(self.terminator))?;
            Framing::Terminator(terminator)
        };
        let byte_check = if self.strict_ascii {
            ByteCheck::Ascii
        } else {
            ByteCheck::Permissive
        };

        Ok(CodecOptions::default()
            .with_framing(framing)
            .with_legacy_truncation(self.legacy)
            .with_byte_check(byte_check))
    }
}
