use std::fmt;
use std::io;

use thiserror::Error;

use crate::schema::ElementType;

pub mod tool {
    use thiserror::Error;

    ///
    /// Errors raised by the vint and payload codecs in [`crate::tools`].
    ///
    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ToolError {
        #[error("vint starts with 0x00, which has no length marker")]
        InvalidVintMarker,

        #[error("vint starts with 0xFF, the reserved unknown-size marker")]
        UnknownSizeMarker,

        #[error("vint is {length} bytes long, which exceeds the allowed maximum of {max}")]
        VintTooLong { length: usize, max: usize },

        #[error("value too large to be written as a vint of {length} bytes: {value}")]
        WriteVintOverflow { value: u64, length: usize },

        #[error("payload of {available} bytes is shorter than the declared {expected} bytes")]
        Truncated { expected: u64, available: u64 },

        #[error("could not read unsigned int from array: {0:?}")]
        ReadU64Overflow(Vec<u8>),

        #[error("could not read int from array: {0:?}")]
        ReadI64Overflow(Vec<u8>),

        #[error("could not read float from array: {0:?}")]
        ReadF64Mismatch(Vec<u8>),

        #[error("date is outside of the representable range: {0}")]
        DateOutOfRange(i64),
    }
}

use tool::ToolError;

///
/// Key used when a catalog lookup fails.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKey {
    Id(u64),
    Name(String),
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::Id(id) => write!(f, "id 0x{:X}", id),
            ElementKey::Name(name) => write!(f, "name \"{}\"", name),
        }
    }
}

///
/// Errors returned by the reader, the write tree and the mutation engine.
///
/// Nothing is retried internally.  A failed mutation leaves the file in whatever state its last completed write produced.
///
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed vint or a payload that runs past the end of the source.
    #[error("malformed data at position {position}: {source}")]
    Parse {
        position: u64,
        #[source]
        source: ToolError,
    },

    #[error("no catalog entry with {0}")]
    SchemaNotFound(ElementKey),

    #[error("{name} is a {actual} element and cannot be accessed as {requested}")]
    TypeMismatch {
        name: &'static str,
        actual: ElementType,
        requested: &'static str,
    },

    /// The requested operation would break the document structure.
    #[error("structural violation: {0}")]
    Structural(String),

    #[error("CRC-32 mismatch in element at position {position}: stored {stored:#010X}, calculated {calculated:#010X}")]
    DataIntegrity {
        position: u64,
        stored: u32,
        calculated: u32,
    },

    #[error("attempted to read at position {position}, past the end of the stream")]
    EndOfStream { position: u64 },

    /// Growing the segment past the width of its size field is not implemented.
    #[error("segment size needs a {required} byte size field but only {available} bytes are allocated")]
    UnsupportedGrowth { required: u8, available: u8 },

    #[error("{name} was modified since the last call to validate()")]
    Unvalidated { name: &'static str },

    #[error("a Void element must be at least 2 bytes long, requested {0}")]
    InvalidVoidSize(u64),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn structural(msg: impl Into<String>) -> Self {
        Error::Structural(msg.into())
    }

    pub(crate) fn parse(position: u64, source: ToolError) -> Self {
        Error::Parse { position, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
