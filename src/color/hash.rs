//! Deterministic string-to-color hashing

use super::{Color, lighten};

/// How far hash-derived colors are lifted toward white
pub const HASH_LIGHTEN: f64 = 0.4;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of a byte sequence
#[must_use]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Map a string to a stable background color
///
/// The same input yields the same color in every run and on every platform,
/// so identifiers like hostnames keep their color across renders. The raw
/// hash bytes are lightened by [`HASH_LIGHTEN`] to keep swatches readable.
#[must_use]
pub fn hash_to_color(input: &str) -> Color {
    let [_, r, g, b] = fnv1a_32(input.as_bytes()).to_be_bytes();
    lighten(Color::rgb(r, g, b), HASH_LIGHTEN)
}
