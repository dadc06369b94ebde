//! The 2048-symbol alphabet: a bijection between 11-bit values and glyph
//! pairs.
//!
//! Every symbol is two glyphs: a *narrow* glyph (rendered one pixel wide in
//! the reference font) followed by a *wide* glyph (two pixels wide). With 64
//! narrow and 32 wide glyphs there are exactly 64 x 32 = 2048 ordered pairs,
//! one per 11-bit value.
//!
//! # Alphabet version 1
//!
//! The glyph sets and pairing order are a versioned constant: any change
//! breaks decode compatibility with previously produced strings.
//!
//! - Narrow set: the 64 consecutive codepoints U+2801..=U+2840 (Braille
//!   patterns), in codepoint order.
//! - Wide set: the 32 consecutive codepoints U+2580..=U+259F (Block
//!   Elements), in codepoint order.
//! - Pairing order: value `v` maps to `(narrow[v >> 5], wide[v & 31])`;
//!   the high six bits select the narrow glyph, the low five bits the wide
//!   glyph.
//!
//! The table is built once per process and shared read-only afterwards; all
//! lookups are pure, so concurrent encode/decode calls need no
//! synchronization.

use crate::error::AlphabetError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Number of symbols in the alphabet (one per 11-bit value).
pub const ALPHABET_SIZE: usize = 2048;

/// Number of payload bits each symbol carries.
pub const BITS_PER_SYMBOL: u32 = 11;

/// Number of glyphs (characters) per symbol.
pub const GLYPHS_PER_SYMBOL: usize = 2;

/// Narrow glyph set, version 1: U+2801..=U+2840 in codepoint order.
const NARROW_GLYPHS: &str = "\
⠁⠂⠃⠄⠅⠆⠇⠈⠉⠊⠋⠌⠍⠎⠏⠐⠑⠒⠓⠔⠕⠖⠗⠘⠙⠚⠛⠜⠝⠞⠟⠠\
⠡⠢⠣⠤⠥⠦⠧⠨⠩⠪⠫⠬⠭⠮⠯⠰⠱⠲⠳⠴⠵⠶⠷⠸⠹⠺⠻⠼⠽⠾⠿⡀";

/// Wide glyph set, version 1: U+2580..=U+259F in codepoint order.
const WIDE_GLYPHS: &str = "▀▁▂▃▄▅▆▇█▉▊▋▌▍▎▏▐░▒▓▔▕▖▗▘▙▚▛▜▝▞▟";

/// Expected size of the narrow glyph set.
const NARROW_COUNT: usize = 64;

/// Expected size of the wide glyph set.
const WIDE_COUNT: usize = 32;

/// One alphabet symbol: a narrow glyph followed by a wide glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// First glyph, from the narrow set
    pub narrow: char,
    /// Second glyph, from the wide set
    pub wide: char,
}

impl Symbol {
    /// Append this symbol's glyphs to an output string.
    pub fn push_to(&self, out: &mut String) {
        out.push(self.narrow);
        out.push(self.wide);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.narrow, self.wide)
    }
}

/// The complete forward and reverse mapping for all 2048 symbols.
///
/// Immutable once constructed. Use [`AlphabetTable::shared`] for the
/// process-wide instance; `build` exists for construction-time validation
/// and tests.
#[derive(Debug)]
pub struct AlphabetTable {
    /// index -> symbol, for all 2048 values
    forward: Vec<Symbol>,
    /// narrow glyph -> its index within the narrow set
    narrow_index: HashMap<char, u16>,
    /// wide glyph -> its index within the wide set
    wide_index: HashMap<char, u16>,
}

impl AlphabetTable {
    /// Build the table from the version-1 glyph constants.
    ///
    /// Verifies set sizes, glyph uniqueness within each set, disjointness
    /// across sets, and that all 2048 assigned pairs are distinct.
    ///
    /// # Errors
    /// Any violation of the above yields an [`AlphabetError`]; this means
    /// the built-in constants are wrong and no table can exist.
    pub fn build() -> Result<Self, AlphabetError> {
        let narrow: Vec<char> = NARROW_GLYPHS.chars().collect();
        let wide: Vec<char> = WIDE_GLYPHS.chars().collect();

        if narrow.len() != NARROW_COUNT {
            return Err(AlphabetError::WrongGlyphCount {
                set: "narrow",
                expected: NARROW_COUNT,
                actual: narrow.len(),
            });
        }
        if wide.len() != WIDE_COUNT {
            return Err(AlphabetError::WrongGlyphCount {
                set: "wide",
                expected: WIDE_COUNT,
                actual: wide.len(),
            });
        }
        if narrow.len() * wide.len() < ALPHABET_SIZE {
            return Err(AlphabetError::InsufficientPairs {
                available: narrow.len() * wide.len(),
                required: ALPHABET_SIZE,
            });
        }

        let mut narrow_index = HashMap::with_capacity(narrow.len());
        for (i, &glyph) in narrow.iter().enumerate() {
            if narrow_index.insert(glyph, i as u16).is_some() {
                return Err(AlphabetError::DuplicateGlyph {
                    set: "narrow",
                    glyph,
                });
            }
        }

        let mut wide_index = HashMap::with_capacity(wide.len());
        for (i, &glyph) in wide.iter().enumerate() {
            if narrow_index.contains_key(&glyph) {
                return Err(AlphabetError::OverlappingGlyphSets { glyph });
            }
            if wide_index.insert(glyph, i as u16).is_some() {
                return Err(AlphabetError::DuplicateGlyph { set: "wide", glyph });
            }
        }

        // Assign pairs in fixed order: narrow-major, wide-minor
        let mut forward = Vec::with_capacity(ALPHABET_SIZE);
        let mut seen: HashMap<Symbol, u16> = HashMap::with_capacity(ALPHABET_SIZE);
        for index in 0..ALPHABET_SIZE {
            let symbol = Symbol {
                narrow: narrow[index >> 5],
                wide: wide[index & 31],
            };
            if let Some(&first) = seen.get(&symbol) {
                return Err(AlphabetError::DuplicateSymbol {
                    first,
                    second: index as u16,
                });
            }
            seen.insert(symbol, index as u16);
            forward.push(symbol);
        }

        Ok(Self {
            forward,
            narrow_index,
            wide_index,
        })
    }

    /// The process-wide shared table.
    ///
    /// Built on first use from the version-1 constants and never mutated;
    /// safe to use from any number of threads.
    pub fn shared() -> &'static AlphabetTable {
        static TABLE: Lazy<AlphabetTable> = Lazy::new(|| {
            AlphabetTable::build().expect("built-in glyph sets must form a complete alphabet")
        });
        &TABLE
    }

    /// Look up the symbol for an 11-bit value.
    ///
    /// # Errors
    /// `AlphabetError::IndexOutOfRange` if `index` >= 2048.
    pub fn symbol_for(&self, index: u16) -> Result<Symbol, AlphabetError> {
        self.forward
            .get(index as usize)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                max: (ALPHABET_SIZE - 1) as u16,
            })
    }

    /// Look up the 11-bit value for a glyph pair.
    ///
    /// # Errors
    /// `AlphabetError::UnknownSymbol` carrying the first glyph that is not
    /// in its expected set.
    pub fn index_for(&self, narrow: char, wide: char) -> Result<u16, AlphabetError> {
        let hi = *self
            .narrow_index
            .get(&narrow)
            .ok_or(AlphabetError::UnknownSymbol { glyph: narrow })?;
        let lo = *self
            .wide_index
            .get(&wide)
            .ok_or(AlphabetError::UnknownSymbol { glyph: wide })?;
        Ok((hi << 5) | lo)
    }
}
