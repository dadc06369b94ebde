//! Integration tests for the full codec: payload -> encode -> decode ->
//! payload, with verification that output matches input and that corrupted
//! strings are rejected rather than silently mis-decoded.

use base64x32_core::alphabet::{AlphabetTable, ALPHABET_SIZE, GLYPHS_PER_SYMBOL};
use base64x32_core::error::{CodecError, Error};
use base64x32_core::header::LengthParser;
use base64x32_core::{decode, encode, MAX_BYTES_PER_PAGE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a payload with mixed byte patterns.
///
/// Seeded so runs are reproducible: runs of a single byte, text-like bytes,
/// and fully random sections, mirroring realistic inputs.
fn generate_payload(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let chunk_size = (size_bytes - data.len()).min(512);
        match rng.gen_range(0..3u8) {
            0 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(chunk_size));
            }
            1 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..chunk_size {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

#[test]
fn test_round_trip_across_sizes() {
    for (seed, size) in [
        (1u64, 0usize),
        (2, 1),
        (3, 2),
        (4, 10),
        (5, 11),
        (6, 100),
        (7, 693),
        (8, 694),
        (9, 695),
        (10, 1023),
        (11, 1024),
        (12, 10_000),
    ] {
        let payload = generate_payload(seed, size);
        let encoded = encode(&payload).expect("encode failed");
        let decoded = decode(&encoded).expect("decode failed");
        assert_eq!(decoded, payload, "round trip failed for size {size}");
    }
}

#[test]
fn test_full_page_payload() {
    let payload = generate_payload(42, MAX_BYTES_PER_PAGE);
    let encoded = encode(&payload).unwrap();

    // A full page still costs one header symbol plus its data symbols
    let data_symbols = (MAX_BYTES_PER_PAGE * 8).div_ceil(11);
    assert_eq!(
        encoded.chars().count(),
        GLYPHS_PER_SYMBOL * (1 + data_symbols)
    );

    assert_eq!(decode(&encoded).unwrap(), payload);
}

#[test]
fn test_multi_page_scale_payload() {
    // 128 KiB, well past several pages worth of data
    let payload = generate_payload(999, 128 * 1024);
    let encoded = encode(&payload).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_output_uses_only_alphabet_glyphs() {
    let table = AlphabetTable::shared();
    let payload = generate_payload(7, 2048);
    let encoded = encode(&payload).unwrap();

    let glyphs: Vec<char> = encoded.chars().collect();
    assert_eq!(glyphs.len() % GLYPHS_PER_SYMBOL, 0);
    for pair in glyphs.chunks(GLYPHS_PER_SYMBOL) {
        let index = table
            .index_for(pair[0], pair[1])
            .expect("encoded output contains a non-alphabet pair");
        assert!((index as usize) < ALPHABET_SIZE);
    }
}

#[test]
fn test_header_parsed_alone_yields_length() {
    let table = AlphabetTable::shared();

    for size in [0usize, 1, 694, 1023, 1024, 70_000] {
        let payload = generate_payload(size as u64 + 100, size);
        let encoded = encode(&payload).unwrap();

        let mut glyphs = encoded.chars();
        let mut parser = LengthParser::new();
        let declared = loop {
            let narrow = glyphs.next().expect("header cut short");
            let wide = glyphs.next().expect("header cut short");
            let group = table.index_for(narrow, wide).unwrap();
            if let Some((n, _)) = parser.push(group).unwrap() {
                break n;
            }
        };
        assert_eq!(declared as usize, size);
    }
}

#[test]
fn test_corruption_rejected() {
    let payload = generate_payload(64, 256);
    let encoded = encode(&payload).unwrap();

    // Substitute a glyph outside both glyph sets
    let mut glyphs: Vec<char> = encoded.chars().collect();
    let mid = glyphs.len() / 2;
    glyphs[mid] = '#';
    let corrupted: String = glyphs.iter().collect();
    assert!(matches!(
        decode(&corrupted),
        Err(Error::Codec(CodecError::InvalidCharacter { .. }))
    ));
}

#[test]
fn test_truncation_rejected_not_shortened() {
    let payload = generate_payload(65, 256);
    let encoded = encode(&payload).unwrap();
    let total = encoded.chars().count();

    // Cut mid-data at several depths, always on a symbol boundary
    for keep_symbols in [total / 2 / 2, total / 2 - 10, total / 2 - 1] {
        let cut: String = encoded.chars().take(keep_symbols * 2).collect();
        assert!(
            matches!(
                decode(&cut),
                Err(Error::Codec(CodecError::TruncatedData { .. }))
            ),
            "prefix of {keep_symbols} symbols decoded instead of failing"
        );
    }
}

#[test]
fn test_determinism_across_calls() {
    let payload = generate_payload(66, 1000);
    let first = encode(&payload).unwrap();
    let second = encode(&payload).unwrap();
    assert_eq!(first, second);
    assert_eq!(decode(&first).unwrap(), decode(&second).unwrap());
}

#[test]
fn test_concurrent_round_trips() {
    // The shared table is read-only after construction; encode/decode from
    // many threads at once must agree with the single-threaded result.
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let payload = generate_payload(seed, 4096);
                let encoded = encode(&payload).unwrap();
                assert_eq!(decode(&encoded).unwrap(), payload);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
