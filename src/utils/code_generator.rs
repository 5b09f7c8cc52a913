//! Short code generation.
//!
//! Codes are derived from OS randomness rather than a timestamp so that two
//! requests landing in the same clock tick cannot collide.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to exactly 8 URL-safe characters with no padding. At 48 bits
/// of entropy the birthday bound puts the collision probability across one
/// million stored codes around 2e-3; the dedup lookup at the store layer
/// absorbs the rest.
const CODE_LENGTH_BYTES: usize = 6;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 8;

/// Generates a random URL-safe short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
