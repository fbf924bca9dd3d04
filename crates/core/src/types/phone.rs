//! Phone number type for messaging handoff links.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input contains no digits.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character that is neither a digit nor a separator.
    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),
    /// Fewer digits than any dialable international number.
    #[error("phone number must have at least {min} digits")]
    TooShort {
        /// Minimum digit count.
        min: usize,
    },
    /// More digits than E.164 allows.
    #[error("phone number must have at most {max} digits")]
    TooLong {
        /// Maximum digit count.
        max: usize,
    },
}

/// An international phone number, stored as digits only.
///
/// `wa.me` links take the full number in international format without `+`,
/// spaces, or punctuation. Parsing accepts the common human-written forms
/// and normalises them.
///
/// ## Constraints
///
/// - 7-15 digits (E.164 upper bound)
/// - Separators `+`, space, `-`, `.`, `(`, `)` are stripped
///
/// ## Examples
///
/// ```
/// use vitrine_core::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+234 816 401 5614").unwrap();
/// assert_eq!(phone.as_str(), "2348164015614");
///
/// assert!(PhoneNumber::parse("").is_err());
/// assert!(PhoneNumber::parse("call me").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 7;

    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Contains no digits
    /// - Contains letters or other non-separator characters
    /// - Has fewer than 7 or more than 15 digits
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let mut digits = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '+' | ' ' | '-' | '.' | '(' | ')' => {}
                other => return Err(PhoneNumberError::InvalidCharacter(other)),
            }
        }

        if digits.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if digits.len() < Self::MIN_DIGITS {
            return Err(PhoneNumberError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(digits))
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}
