//! Name input validation.
//!
//! Rules run in a fixed order and the first failing rule determines the
//! error: character class, then length, then emptiness. Accepted input is
//! kept exactly as entered; the store key is the validated string itself.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum accepted name length in bytes.
pub const MAX_NAME_LEN: usize = 255;

static NAME_CHARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]*$").unwrap());

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Contains a character outside letters and whitespace.
    #[error("Names may only contain letters and spaces.")]
    InvalidCharacters,
    /// Longer than [`MAX_NAME_LEN`] bytes.
    #[error("Names may not be longer than {MAX_NAME_LEN} characters.")]
    TooLong,
    /// Empty or all whitespace.
    #[error("Name may not be empty.")]
    Empty,
}

/// A name that passed [`validate`], stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName(String);

impl ValidName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ValidName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate raw user input.
pub fn validate(name: &str) -> Result<ValidName, ValidationError> {
    if !NAME_CHARS_RE.is_match(name) {
        return Err(ValidationError::InvalidCharacters);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong);
    }
    if name.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(ValidName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_name() {
        let name = validate("John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_accepts_name_with_spaces() {
        assert!(validate("Mary Jane").is_ok());
    }

    #[test]
    fn test_keeps_input_exactly_as_entered() {
        // No trimming or case folding; the key is the raw accepted string.
        let name = validate("  John  ").unwrap();
        assert_eq!(name.as_str(), "  John  ");
    }

    #[test]
    fn test_rejects_digits() {
        assert_eq!(
            validate("Xqzzy123"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_rejects_symbols() {
        for input in ["John!", "a@b", "O'Brien", "Anne-Marie"] {
            assert_eq!(
                validate(input),
                Err(ValidationError::InvalidCharacters),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert_eq!(validate("José"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate(&long), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_accepts_exactly_max_length() {
        let max = "a".repeat(MAX_NAME_LEN);
        assert!(validate(&max).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_rejects_all_whitespace() {
        assert_eq!(validate("   \t "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_character_rule_wins_over_length() {
        // A too-long string with a bad character reports the character error.
        let mut long = "a".repeat(MAX_NAME_LEN + 1);
        long.push('7');
        assert_eq!(validate(&long), Err(ValidationError::InvalidCharacters));
    }
}
