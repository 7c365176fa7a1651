use crate::error::{InvalidInput, Result};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes an unsigned integer in base 36 using `0-9` then `a-z`.
pub fn encode_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // u64::MAX takes 13 base-36 digits
    let mut digits = Vec::with_capacity(13);
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Encodes a signed integer in base 36. Negative values are rejected.
pub fn base36_encode(n: i64) -> Result<String> {
    let n = u64::try_from(n).map_err(|_| InvalidInput::NegativeNumber(n))?;
    Ok(encode_base36(n))
}
