//! Encoding and decoding between byte payloads and symbol strings.
//!
//! # Encoded String Layout
//!
//! ```text
//! +------------------+----------------------------+
//! | header symbols   | data symbols               |
//! | (1-4, see header)| ceil(8 * n / 11) symbols   |
//! +------------------+----------------------------+
//! ```
//!
//! The header declares the payload byte count `n`; the data symbols carry
//! the payload bits MSB-first in 11-bit groups, with the final group
//! zero-padded on the right (at most 10 pad bits). Both sides of the
//! transformation are pure: same input, same output, no shared mutable
//! state.

use crate::alphabet::{AlphabetTable, BITS_PER_SYMBOL};
use crate::bitio::{BitReader, BitWriter};
use crate::error::{AlphabetError, CodecError, Result};
use crate::header::{self, LengthParser, MAX_LENGTH};
use std::str::Chars;

/// Maximum payload bytes that fit one display page of the reference medium.
///
/// Derived from the reference page's renderable pixel budget and the
/// alphabet's per-symbol pixel cost. Informational for callers paginating
/// output; `encode` and `decode` never enforce it.
pub const MAX_BYTES_PER_PAGE: usize = 694;

/// Maximum payload byte count `encode` accepts (the length header bound).
pub const MAX_PAYLOAD_BYTES: u64 = MAX_LENGTH;

/// Encode a byte payload into a symbol string.
///
/// The output is the length header followed by the payload bits in 11-bit
/// groups, each group rendered as one two-glyph symbol.
///
/// # Errors
/// `CodecError::PayloadTooLarge` if the payload exceeds
/// [`MAX_PAYLOAD_BYTES`].
pub fn encode(payload: &[u8]) -> Result<String> {
    if payload.len() as u64 > MAX_PAYLOAD_BYTES {
        return Err(CodecError::PayloadTooLarge {
            len: payload.len(),
            max: MAX_PAYLOAD_BYTES,
        }
        .into());
    }

    let table = AlphabetTable::shared();
    let header_groups = header::length_groups(payload.len() as u32);
    let symbols = header_groups.len() + data_symbol_count(payload.len() as u32);

    // Glyphs are three UTF-8 bytes each in the version-1 sets
    let mut out = String::with_capacity(symbols * 6);

    for group in header_groups {
        table.symbol_for(group)?.push_to(&mut out);
    }

    let mut reader = BitReader::new(payload);
    while let Some(group) = reader.next_group_padded() {
        table.symbol_for(group)?.push_to(&mut out);
    }

    Ok(out)
}

/// Decode a symbol string back into its byte payload.
///
/// # Errors
/// - `CodecError::InvalidCharacter` / `CodecError::TrailingGlyph` if the
///   text contains glyphs outside the alphabet or an incomplete final pair
/// - `CodecError::HeaderTruncated` / `HeaderTooLong` / `LengthOverflow` if
///   the length header is malformed (an empty string is a truncated header)
/// - `CodecError::TruncatedData` if the declared length needs more data
///   symbols than the string holds
/// - `CodecError::TrailingData` if the string holds data symbols beyond the
///   declared length's pad window
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let table = AlphabetTable::shared();
    let mut symbols = SymbolStream::new(text);

    // Header: explicit state machine, one group at a time
    let mut parser = LengthParser::new();
    let payload_len = loop {
        match symbols.next_group(table)? {
            Some(group) => {
                if let Some((len, _groups)) = parser.push(group)? {
                    break len;
                }
            }
            None => return Err(parser.truncated().into()),
        }
    };

    let expected = data_symbol_count(payload_len);
    let mut writer = BitWriter::new();
    let mut actual = 0usize;

    while let Some(group) = symbols.next_group(table)? {
        actual += 1;
        if actual > expected {
            return Err(CodecError::TrailingData { expected }.into());
        }
        writer.write_bits(u32::from(group), BITS_PER_SYMBOL)?;
    }

    if actual < expected {
        return Err(CodecError::TruncatedData { expected, actual }.into());
    }

    // Drop the pad bits: keep exactly the declared byte count
    let mut payload = writer.finish();
    payload.truncate(payload_len as usize);
    Ok(payload)
}

/// Number of data symbols for a payload of `len` bytes.
fn data_symbol_count(len: u32) -> usize {
    let bits = u64::from(len) * 8;
    ((bits + u64::from(BITS_PER_SYMBOL) - 1) / u64::from(BITS_PER_SYMBOL)) as usize
}

/// Walks input text as glyph pairs, resolving each to its 11-bit value.
struct SymbolStream<'a> {
    chars: Chars<'a>,
    /// Character (not byte) index of the next glyph
    position: usize,
}

impl<'a> SymbolStream<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            position: 0,
        }
    }

    /// Resolve the next glyph pair, or `None` at end of input.
    ///
    /// # Errors
    /// - `CodecError::TrailingGlyph` on a lone final glyph
    /// - `CodecError::InvalidCharacter` if either glyph is outside its set,
    ///   reporting the offending glyph and its character position
    fn next_group(&mut self, table: &AlphabetTable) -> Result<Option<u16>> {
        let Some(narrow) = self.chars.next() else {
            return Ok(None);
        };
        let narrow_position = self.position;
        self.position += 1;

        let Some(wide) = self.chars.next() else {
            return Err(CodecError::TrailingGlyph { glyph: narrow }.into());
        };
        self.position += 1;

        match table.index_for(narrow, wide) {
            Ok(group) => Ok(Some(group)),
            Err(err) => {
                // Report the glyph the lookup rejected at its own position
                let glyph = match err {
                    AlphabetError::UnknownSymbol { glyph } => glyph,
                    other => return Err(other.into()),
                };
                let position = if glyph == narrow {
                    narrow_position
                } else {
                    narrow_position + 1
                };
                Err(CodecError::InvalidCharacter { position, glyph }.into())
            }
        }
    }
}
