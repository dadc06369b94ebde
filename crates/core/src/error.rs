//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is local to a single encode/decode call: the codec holds no
//! mutable shared state, so callers can discard the result and retry with
//! corrected input. Nothing is retried internally and nothing is silently
//! corrected.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Alphabet: table construction or symbol lookup failures
/// - Codec: encode/decode failures (oversized payload, malformed input)
/// - Bit I/O: reading/writing bits from/to byte buffers
#[derive(Debug, Error)]
pub enum Error {
    /// Alphabet table error (e.g., construction failure, unknown glyph)
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Codec error (e.g., malformed header, truncated data)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),
}

/// Alphabet table errors.
///
/// Construction variants mean the built-in glyph constants are wrong and the
/// table cannot exist; lookup variants are per-call failures.
#[derive(Debug, Error)]
pub enum AlphabetError {
    /// A glyph set constant does not contain the expected number of glyphs
    #[error("glyph set {set} has {actual} glyphs, expected {expected}")]
    WrongGlyphCount {
        set: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The same glyph appears twice within one glyph set
    #[error("duplicate glyph {glyph:?} in set {set}")]
    DuplicateGlyph { set: &'static str, glyph: char },

    /// A glyph appears in both glyph sets (pairs would be ambiguous)
    #[error("glyph {glyph:?} appears in both glyph sets")]
    OverlappingGlyphSets { glyph: char },

    /// The glyph sets cannot produce enough unique pairs
    #[error("glyph sets yield {available} pairs, need {required}")]
    InsufficientPairs { available: usize, required: usize },

    /// Two indices were assigned the same glyph pair
    #[error("indices {first} and {second} map to the same symbol")]
    DuplicateSymbol { first: u16, second: u16 },

    /// Symbol index is outside the alphabet
    #[error("symbol index {index} out of range (max {max})")]
    IndexOutOfRange { index: u16, max: u16 },

    /// A glyph is not part of either glyph set
    #[error("glyph {glyph:?} is not in the alphabet")]
    UnknownSymbol { glyph: char },
}

/// Encode/decode errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload exceeds what the length header can represent
    #[error("payload of {len} bytes exceeds header capacity of {max} bytes")]
    PayloadTooLarge { len: usize, max: u64 },

    /// Input text contains a character outside the alphabet.
    ///
    /// `position` is the character (not byte) index into the input string.
    #[error("invalid character {glyph:?} at position {position}")]
    InvalidCharacter { position: usize, glyph: char },

    /// Input text ends with a lone glyph that cannot form a complete symbol
    #[error("trailing glyph {glyph:?} does not form a complete symbol")]
    TrailingGlyph { glyph: char },

    /// Input ended while the length header's continuation flag was still set
    #[error("length header truncated after {groups_read} group(s)")]
    HeaderTruncated { groups_read: usize },

    /// The length header did not terminate within the group limit
    #[error("length header exceeds {max_groups} groups")]
    HeaderTooLong { max_groups: usize },

    /// The length header declares a value beyond the representable range
    #[error("declared length {declared} exceeds maximum {max}")]
    LengthOverflow { declared: u64, max: u64 },

    /// The string holds fewer data symbols than its declared length implies
    #[error("truncated data: declared length needs {expected} data symbols, found {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// The string holds more data symbols than its declared length allows
    #[error("trailing data: declared length needs only {expected} data symbols")]
    TrailingData { expected: usize },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Invalid bit count (more than 32 bits per operation)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(u32),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
