use std::io::Write;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::errors::GenerationError;

pub const INTEGER_RANGE: RangeInclusive<i64> = 1..=42;
pub const LETTER_COUNT: usize = 10;
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Ten lowercase ASCII letters followed by a single `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterString(String);

impl LetterString {
    /// Total length in bytes, newline included.
    pub const LEN: usize = LETTER_COUNT + 1;

    /// Validate `value` against the letter string shape.
    pub fn parse(value: &str) -> Result<Self, GenerationError> {
        let Some(letters) = value.strip_suffix('\n') else {
            return Err(GenerationError::InvalidLetterString(format!(
                "missing trailing newline in {value:?}"
            )));
        };
        if letters.len() != LETTER_COUNT {
            return Err(GenerationError::InvalidLetterString(format!(
                "expected {LETTER_COUNT} letters, found {} in {value:?}",
                letters.len()
            )));
        }
        if !letters.bytes().all(|byte| byte.is_ascii_lowercase()) {
            return Err(GenerationError::InvalidLetterString(format!(
                "non-lowercase character in {value:?}"
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// The letters without the trailing newline.
    pub fn letters(&self) -> &str {
        &self.0[..LETTER_COUNT]
    }

    /// The full string, trailing newline included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bytes written to a letter file.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for LetterString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Draw an integer uniformly from [`INTEGER_RANGE`] without echoing it.
pub fn sample_integer(rng: &mut impl Rng) -> i64 {
    rng.random_range(INTEGER_RANGE)
}

/// Draw a letter string without echoing it.
pub fn sample_letter_string(rng: &mut impl Rng) -> LetterString {
    let mut value = String::with_capacity(LetterString::LEN);
    for _ in 0..LETTER_COUNT {
        let index = rng.random_range(0..ALPHABET.len());
        value.push(char::from(ALPHABET[index]));
    }
    value.push('\n');
    LetterString(value)
}

/// Draw an integer and echo it on its own line to `out`.
pub fn random_integer(rng: &mut impl Rng, out: &mut impl Write) -> Result<i64, GenerationError> {
    let value = sample_integer(rng);
    writeln!(out, "{value}").map_err(GenerationError::Echo)?;
    Ok(value)
}

/// Draw a letter string and echo its letters on their own line to `out`.
pub fn random_letter_string(
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<LetterString, GenerationError> {
    let value = sample_letter_string(rng);
    writeln!(out, "{}", value.letters()).map_err(GenerationError::Echo)?;
    Ok(value)
}
