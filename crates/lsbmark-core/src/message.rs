use byteorder::{BigEndian, WriteBytesExt};

use crate::media::codec_options::Framing;
use crate::{LsbError, Result};

/// The plaintext that gets hidden in, or was unveiled from, an image.
///
/// Text is mapped one character per byte, so only characters up to `U+00FF` can be hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    content: Vec<u8>,
}

impl Message {
    pub fn from_bytes<B: Into<Vec<u8>>>(content: B) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Creates a message from text, every character becomes exactly one byte.
    pub fn from_text(text: &str) -> Result<Self> {
        let content = text
            .chars()
            .map(|c| u8::try_from(c).map_err(|_| LsbError::UnencodableCharacter(c)))
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { content })
    }

    /// Reads every byte as the character with the same code point, this never fails.
    pub fn to_text(&self) -> String {
        self.content.iter().copied().map(char::from).collect()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Serializes the message together with its boundary, ready to be hidden.
    pub fn to_framed(&self, framing: &Framing) -> Result<Vec<u8>> {
        let mut framed = Vec::with_capacity(self.content.len() + framing.overhead());

        match *framing {
            Framing::Terminator(terminator) => {
                if let Some(offset) = self.content.iter().position(|b| *b == terminator) {
                    return Err(LsbError::TerminatorInMessage { terminator, offset });
                }
                framed.extend_from_slice(&self.content);
                framed.push(terminator);
            }
            Framing::LengthPrefixed => {
                let len = u32::try_from(self.content.len()).map_err(|_| {
                    LsbError::CapacityExceeded {
                        required: self.content.len() << 3,
                        available: (u32::MAX as usize).saturating_mul(8),
                    }
                })?;
                framed.write_u32::<BigEndian>(len)?;
                framed.extend_from_slice(&self.content);
            }
        }

        Ok(framed)
    }
}

impl From<Vec<u8>> for Message {
    fn from(content: Vec<u8>) -> Self {
        Self::from_bytes(content)
    }
}
