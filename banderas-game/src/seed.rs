//! Session seeds: the string hash, the seeded unit RNG, and friendly seed
//! codes for sessions that arrive without one.
//!
//! The hash and RNG formulas define which countries a session sees; both are
//! pure functions of their seed and must stay bit-for-bit stable.

/// Digit dictionary for seed codes: digits, lowercase, then uppercase.
const SEED_DICT: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Rolling 31-hash over UTF-16 code units with 32-bit signed wrapping at
/// every step.
///
/// Turns an arbitrary session seed string into the numeric seed that drives
/// the pool shuffle. The wrap must happen per step, not once at the end.
#[must_use]
pub fn hash_code(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Deterministic sample in `[0, 1)` for a numeric seed.
///
/// `frac(sin(seed) * 10000)`; subtracting the floor normalizes negative
/// fractions back into the unit interval.
#[must_use]
pub fn next_unit(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Render entropy as a short base-62 seed code, least significant digit
/// first.
///
/// Used when a request arrives without a `seed`; the code then travels in
/// every redirect so the session pool stays stable.
#[must_use]
pub fn seed_code(entropy: u64) -> String {
    let base = SEED_DICT.len() as u64;
    if entropy == 0 {
        return (SEED_DICT[0] as char).to_string();
    }
    let mut code = String::new();
    let mut value = entropy;
    while value > 0 {
        code.push(SEED_DICT[(value % base) as usize] as char);
        value /= base;
    }
    code
}
