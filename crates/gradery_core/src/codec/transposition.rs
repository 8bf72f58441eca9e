//! Columnar transposition cipher.
//!
//! # Responsibility
//! - Reversibly obscure one line of text using a grid transposition keyed by
//!   a positive integer row count.
//!
//! # Invariants
//! - `decode(encode(t, k), k) == t` for any `t` free of the padding symbol
//!   and any key `k >= 1`.
//! - Encode output length is always a multiple of the key.
//! - The padding symbol `$` is reserved: embedded `$` in legitimate input is
//!   indistinguishable from padding and gets dropped on decode. Known
//!   weakness of the format, kept as-is.

use super::{CodecError, CodecResult};

/// Reserved padding symbol. Must not appear in legitimate input.
pub const PADDING: char = '$';

/// Encodes `text` by writing it row-wise into a grid with `key` columns and
/// reading it back column-wise.
///
/// The text is right-padded with `$` until its length is a multiple of
/// `key`, so encoding always terminates with a full grid.
///
/// # Errors
/// - `InvalidKey` when `key <= 0`.
pub fn encode(text: &str, key: i32) -> CodecResult<String> {
    if key <= 0 {
        return Err(CodecError::InvalidKey { key });
    }
    let width = key as usize;

    let mut grid: Vec<char> = text.chars().collect();
    while grid.len() % width != 0 {
        grid.push(PADDING);
    }
    let rows = grid.len() / width;

    let mut encoded = String::with_capacity(grid.len());
    for column in 0..width {
        for row in 0..rows {
            encoded.push(grid[row * width + column]);
        }
    }
    Ok(encoded)
}

/// Decodes a ciphertext produced by [`encode`] with the same key.
///
/// Padding characters are dropped while reading the grid back row-wise.
///
/// # Errors
/// - `InvalidKey` when `key <= 0`.
/// - `InvalidLength` when the ciphertext length is not divisible by `key`;
///   no partial decode is produced.
pub fn decode(ciphertext: &str, key: i32) -> CodecResult<String> {
    if key <= 0 {
        return Err(CodecError::InvalidKey { key });
    }
    let width = key as usize;

    let grid: Vec<char> = ciphertext.chars().collect();
    if grid.len() % width != 0 {
        return Err(CodecError::InvalidLength {
            length: grid.len(),
            key,
        });
    }
    let rows = grid.len() / width;

    // The ciphertext is `width` column-chunks of `rows` characters each;
    // original row-major order is chunk[column][row] for each row, column.
    let mut decoded = String::with_capacity(grid.len());
    for row in 0..rows {
        for column in 0..width {
            let ch = grid[column * rows + row];
            if ch == PADDING {
                continue;
            }
            decoded.push(ch);
        }
    }
    Ok(decoded)
}
