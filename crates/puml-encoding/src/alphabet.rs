//! `PlantUML` 6-bit alphabet packing.
//!
//! Every 3 input bytes become 4 symbols, 6 bits each, drawn from [`ALPHABET`].
//! This is base64-shaped but not base64: the symbol order differs, there is
//! no `=` padding, and a partial final group still produces 4 symbols with
//! the missing bytes treated as zero.

use crate::DecodeError;

/// The 64 symbols, in value order: `0-9`, `A-Z`, `a-z`, `-`, `_`.
pub const ALPHABET: [u8; 64] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const INVALID: u8 = 0xFF;

/// Symbol to 6-bit value lookup, [`INVALID`] for bytes outside the alphabet.
const REVERSE: [u8; 256] = build_reverse();

#[allow(clippy::cast_possible_truncation)]
const fn build_reverse() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Map a character back to its 6-bit value.
fn sextet(character: char) -> Option<u8> {
    let byte = u8::try_from(character).ok()?;
    let value = REVERSE[usize::from(byte)];
    (value != INVALID).then_some(value)
}

/// Pack bytes into `PlantUML` alphabet symbols.
///
/// The output always has `4 * ceil(len / 3)` characters. Empty input yields
/// an empty string.
pub fn encode_bytes(data: &[u8]) -> String {
    let mut token = String::with_capacity(data.len().div_ceil(3) * 4);

    for group in data.chunks(3) {
        let b1 = group[0];
        let b2 = group.get(1).copied().unwrap_or(0);
        let b3 = group.get(2).copied().unwrap_or(0);

        let sextets = [
            b1 >> 2,
            ((b1 & 0x03) << 4) | (b2 >> 4),
            ((b2 & 0x0F) << 2) | (b3 >> 6),
            b3 & 0x3F,
        ];
        for value in sextets {
            token.push(char::from(ALPHABET[usize::from(value)]));
        }
    }

    token
}

/// Unpack `PlantUML` alphabet symbols into bytes.
///
/// A full group of 4 symbols yields 3 bytes, including any zero padding the
/// encoder added for a short final group. A trailing group of 2 or 3 symbols
/// yields 1 or 2 bytes; a single dangling symbol carries less than a byte and
/// yields nothing.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, DecodeError> {
    let sextets = token
        .chars()
        .enumerate()
        .map(|(position, character)| {
            sextet(character).ok_or(DecodeError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut data = Vec::with_capacity(sextets.len() / 4 * 3 + 2);

    for group in sextets.chunks(4) {
        let c1 = group[0];
        let c2 = group.get(1).copied().unwrap_or(0);
        let c3 = group.get(2).copied().unwrap_or(0);
        let c4 = group.get(3).copied().unwrap_or(0);

        let bytes = [
            (c1 << 2) | (c2 >> 4),
            ((c2 & 0x0F) << 4) | (c3 >> 2),
            ((c3 & 0x03) << 6) | c4,
        ];
        data.extend_from_slice(&bytes[..group.len() - 1]);
    }

    Ok(data)
}
