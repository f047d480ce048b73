use crate::{LsbError, Result};

/// The byte that marks the end of a message when nothing else is configured, `#`
pub const DEFAULT_TERMINATOR: u8 = b'#';

/// Size of the big endian length header used by [`Framing::LengthPrefixed`]
pub const LENGTH_HEADER_BYTES: usize = 4;

/// Decides how the end of a hidden message is found again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// The message is followed by this byte, which therefore must not occur inside the message.
    Terminator(u8),

    /// The message is preceded by its length as 32 bit big endian number, any byte is allowed.
    LengthPrefixed,
}

impl Default for Framing {
    fn default() -> Self {
        Self::Terminator(DEFAULT_TERMINATOR)
    }
}

impl Framing {
    /// Number of bytes the framing adds on top of the plaintext
    pub fn overhead(&self) -> usize {
        match self {
            Framing::Terminator(_) => 1,
            Framing::LengthPrefixed => LENGTH_HEADER_BYTES,
        }
    }
}

/// Validation applied to every unveiled byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteCheck {
    /// Every byte value 0..=255 is accepted and read as the character with the same code point.
    #[default]
    Permissive,

    /// Only 7 bit ASCII is accepted, anything else fails with [`LsbError::MalformedByte`].
    Ascii,
}

impl ByteCheck {
    pub fn verify(&self, bytes: &[u8]) -> Result<()> {
        match self {
            ByteCheck::Permissive => Ok(()),
            ByteCheck::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(LsbError::MalformedByte {
                    offset,
                    value: bytes[offset],
                }),
                None => Ok(()),
            },
        }
    }
}

/// Codec configuration for hiding and unveiling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// How the message boundary is encoded
    pub framing: Framing,

    /// Compatibility with the first generation of images:
    /// when no terminator is found the last unveiled byte is dropped,
    /// and trailing bits that do not fill a whole byte still count as one.
    pub legacy_truncation: bool,

    /// Validation of the unveiled bytes
    pub byte_check: ByteCheck,
}

impl CodecOptions {
    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_terminator(self, terminator: u8) -> Self {
        self.with_framing(Framing::Terminator(terminator))
    }

    pub fn with_legacy_truncation(mut self, legacy_truncation: bool) -> Self {
        self.legacy_truncation = legacy_truncation;
        self
    }

    pub fn with_byte_check(mut self, byte_check: ByteCheck) -> Self {
        self.byte_check = byte_check;
        self
    }
}
