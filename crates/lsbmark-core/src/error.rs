use thiserror::Error;

#[derive(Error, Debug)]
pub enum LsbError {
    /// Represents a message that does not fit into the color channels of the carrier image
    #[error(
        "Capacity Error: the message needs {required} bits but the image only provides {available} bits"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an encode request without any message to hide
    #[error("API Error: Missing message")]
    MissingMessage,

    /// Represents a decoded byte outside of the accepted character range
    #[error("Malformed byte 0x{value:02x} at offset {offset} of the unveiled message")]
    MalformedByte { offset: usize, value: u8 },

    /// Represents a plaintext that carries the terminator, decoding would cut it short
    #[error("The message contains the terminator 0x{terminator:02x} at offset {offset}")]
    TerminatorInMessage { terminator: u8, offset: usize },

    /// Represents a text character that has no single byte representation
    #[error("Character {0:?} cannot be represented as a single byte")]
    UnencodableCharacter(char),

    /// Represents a length header that points beyond the end of the carrier
    #[error("Invalid length header: {declared} bytes declared but only {available} bytes available")]
    InvalidLengthHeader { declared: usize, available: usize },

    /// Represents an unveil of no secret data. For example when a media is too small to carry a header
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a pixel buffer that does not match the declared dimensions
    #[error("Pixel buffer of {pixels} pixels does not match dimensions {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        pixels: usize,
    },

    /// Represents an unsupported carrier media. For example, a text file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
