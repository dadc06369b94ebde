//! base64x32-core: Binary-to-text codec over a pixel-width-optimized
//! 2048-symbol alphabet
//!
//! This library packs arbitrary byte payloads into strings built from
//! two-glyph symbols, chosen so that each symbol carries 11 bits while
//! costing only three rendered pixels in the reference display medium.
//! A self-delimiting length header makes decoding unambiguous without an
//! external length channel.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: The 2048-entry bijection between 11-bit values and glyph
//!   pairs, plus its reverse index
//! - `bitio`: Low-level MSB-first bit reading/writing in 11-bit groups
//! - `header`: Dynamic length-header framing with continuation flags
//! - `codec`: The `encode`/`decode` entry points and capacity constants
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Pure transformations**: No shared mutable state; the alphabet table
//!   is built once and read-only afterwards, so concurrent calls need no
//!   synchronization
//! - **Versioned format**: The glyph sets, pairing order, and header scheme
//!   are fixed constants; changing any of them breaks decode compatibility
//!
//! # Example
//!
//! ```
//! use base64x32_core::{decode, encode};
//!
//! let encoded = encode(b"Hello, World!").unwrap();
//! assert_eq!(decode(&encoded).unwrap(), b"Hello, World!");
//! ```

pub mod alphabet;
pub mod bitio;
pub mod codec;
pub mod error;
pub mod header;

// Re-export commonly used items
pub use codec::{decode, encode, MAX_BYTES_PER_PAGE, MAX_PAYLOAD_BYTES};
pub use error::{Error, Result};
