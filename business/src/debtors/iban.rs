//! IBAN normalization and display grouping.
//!
//! Used for display only. A value that fails to parse is still shown, just
//! not regrouped.

use std::fmt;

use thiserror::Error;

/// Shortest IBAN in use (Norway).
pub const IBAN_MIN_LENGTH: usize = 15;
pub const IBAN_MAX_LENGTH: usize = 34;

const GROUPING: usize = 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IbanError {
    #[error("IBAN is too short ({0} characters)")]
    TooShort(usize),
    #[error("IBAN is too long ({0} characters)")]
    TooLong(usize),
    #[error("IBAN contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("IBAN must start with a two-letter country code")]
    InvalidCountryCode,
    #[error("IBAN check digits must be numeric")]
    InvalidCheckDigits,
    #[error("IBAN checksum does not match")]
    ChecksumMismatch,
}

/// A normalized, checksum-valid IBAN (uppercase, no separators).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        let value = normalize(input);

        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(IbanError::InvalidCharacter(c));
        }
        if value.len() < IBAN_MIN_LENGTH {
            return Err(IbanError::TooShort(value.len()));
        }
        if value.len() > IBAN_MAX_LENGTH {
            return Err(IbanError::TooLong(value.len()));
        }

        let bytes = value.as_bytes();
        if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
            return Err(IbanError::InvalidCountryCode);
        }
        if !bytes[2..4].iter().all(u8::is_ascii_digit) {
            return Err(IbanError::InvalidCheckDigits);
        }
        if mod97(&value) != 1 {
            return Err(IbanError::ChecksumMismatch);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// Display form: groups of four separated by single spaces.
    pub fn grouped(&self) -> String {
        self.0
            .as_bytes()
            .chunks(GROUPING)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

/// Uppercases and strips spaces and dashes.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// ISO 13616 remainder: first four characters moved to the end, letters
/// expanded to two digits (A = 10 .. Z = 35). Input must be ASCII alphanumeric.
fn mod97(value: &str) -> u32 {
    let (head, tail) = value.split_at(4);
    tail.chars().chain(head.chars()).fold(0u32, |acc, c| {
        let digit = c.to_digit(36).unwrap_or(0);
        if digit >= 10 {
            (acc * 100 + digit) % 97
        } else {
            (acc * 10 + digit) % 97
        }
    })
}
