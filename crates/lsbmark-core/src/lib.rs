//! # lsbmark Core API
//!
//! Hides short text messages in the least significant bit of every red, green and blue
//! color channel of an image, and unveils them again.
//!
//! - [`encode`] hides raw bytes in a copy of a [`PixelGrid`]
//! - [`decode`] reads them back until the message boundary
//! - [`LsbCodec`] combines both with a [`Message`] and its framing
//! - [`commands`] work on image files, they are what the `lsbmark` binary calls
//!
//! # Usage Examples
//!
//! ## Hide a message inside a pixel grid
//!
//! ```rust
//! use lsbmark_core::{LsbCodec, Message, PixelGrid};
//!
//! let carrier = PixelGrid::filled(3, 3, [0, 0, 0]);
//! let codec = LsbCodec::default();
//!
//! let secret = codec.hide(&carrier, &Message::from_text("A")?)?;
//! assert_eq!(codec.unveil(&secret)?.to_text(), "A");
//! # Ok::<(), lsbmark_core::LsbError>(())
//! ```
//!
//! ## Too small carriers are refused
//!
//! ```rust
//! use lsbmark_core::{LsbCodec, LsbError, Message, PixelGrid};
//!
//! // 2x2 pixels offer 12 bits, "A#" needs 16
//! let carrier = PixelGrid::filled(2, 2, [0, 0, 0]);
//! let result = LsbCodec::default().hide(&carrier, &Message::from_text("A")?);
//!
//! assert!(matches!(
//!     result,
//!     Err(LsbError::CapacityExceeded { required: 16, available: 12 })
//! ));
//! # Ok::<(), LsbError>(())
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_stream;
pub mod commands;
pub mod error;
pub mod media;
pub mod message;
pub mod result;

pub use crate::bit_stream::BitStream;
pub use crate::error::LsbError;
pub use crate::media::codec_options::{ByteCheck, CodecOptions, Framing, DEFAULT_TERMINATOR};
pub use crate::media::grid::{PixelGrid, RgbPixel};
pub use crate::media::image::decoder::decode;
pub use crate::media::image::encoder::{encode, encode_bits};
pub use crate::media::image::LsbCodec;
pub use crate::message::Message;
pub use crate::result::Result;
