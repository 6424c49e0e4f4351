use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an input for the binary digit conversion that has no 8 bit representation.
    /// For example a character above U+00FF or an integer bigger than 255
    #[error("Input type not supported: {0}")]
    UnsupportedInputType(String),

    /// Represents a payload that does not fit into the carrier, only raised on request
    #[error(
        "Capacity Error: the message requires {required} bits but the carrier offers only {available} bits"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unveil of no secret data. For example when a media did not contain any terminated message
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when creating an audio file.
    #[error("Audio creation error")]
    AudioCreationError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
