//! Error type shared by the encoders, the header reader and the benchmark driver.

/// Everything that can go wrong while building codes or encoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A tree was requested over zero leaves.
    #[error("cannot build a code table from an empty frequency table")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The two-queue builder was handed leaves that are not in non-decreasing order.
    #[error("precondition violated: {0}")]
    MalformedPrecondition(String),

    /// The header stores each count in four bytes.
    #[error("symbol {symbol:#04x} occurs {count} times, which does not fit the header")]
    FrequencyOverflow { symbol: u8, count: u64 },

    /// Codes are packed from a u64, so no code may be deeper than 64 bits.
    #[error("symbol {symbol:#04x} would need a {depth} bit code")]
    CodeTooLong { symbol: u8, depth: usize },

    #[error("header truncated: needed {needed} bytes, found {available}")]
    Truncated { needed: usize, available: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
