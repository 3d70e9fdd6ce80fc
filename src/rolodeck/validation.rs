//! # Input Validation
//!
//! Pure functions that turn raw operator input into canonical values or a
//! typed rejection reason. Nothing here touches the store or the terminal;
//! callers decide how a [`NameError`] or [`PhoneError`] is presented.
//!
//! ## Names
//!
//! A name is trimmed, must have at least two characters, and may contain only
//! letters, spaces, apostrophes and hyphens. Runs of spaces collapse to one:
//! `"  Mary   Jane "` becomes `"Mary Jane"`.
//!
//! ## Phones
//!
//! A phone is any input carrying exactly ten digits and no letters. Spaces,
//! dashes, dots and parentheses are tolerated and dropped. The canonical form
//! is `DDD-DDD-DDDD`, and validating a canonical phone returns it unchanged.
//!
//! Phones are compared by digits only (see [`digits`] and [`same_digits`]), so
//! `(123) 456-7890` and `123.456.7890` are the same number.

use thiserror::Error;

/// Number of digits a phone must carry.
pub const PHONE_DIGITS: usize = 10;

const MIN_NAME_CHARS: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Please enter at least 2 characters for the name.")]
    TooShort,

    #[error("Use letters, spaces, apostrophes, or hyphens only (found '{0}').")]
    InvalidCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Please enter a phone number.")]
    Empty,

    #[error("Please enter digits only (you can include spaces, dashes, or parentheses).")]
    ContainsLetters,

    #[error("Please enter exactly 10 digits (found {0}).")]
    WrongDigitCount(usize),
}

/// Validate a contact name, returning it trimmed with whitespace collapsed.
pub fn validate_name(input: &str) -> Result<String, NameError> {
    let raw = input.trim();
    if raw.chars().count() < MIN_NAME_CHARS {
        return Err(NameError::TooShort);
    }

    if let Some(bad) = raw.chars().find(|c| !is_name_char(*c)) {
        return Err(NameError::InvalidCharacter(bad));
    }

    Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || c == '\'' || c == '-'
}

/// Validate a phone number, returning its canonical `DDD-DDD-DDDD` form.
pub fn validate_phone(input: &str) -> Result<String, PhoneError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(PhoneError::Empty);
    }

    if raw.chars().any(char::is_alphabetic) {
        return Err(PhoneError::ContainsLetters);
    }

    let digits = digits(raw);
    if digits.len() != PHONE_DIGITS {
        return Err(PhoneError::WrongDigitCount(digits.len()));
    }

    Ok(format!(
        "{}-{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}

/// Keep only the ASCII digits of `input`.
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Digits-only equality of two phone-like strings.
pub fn same_digits(a: &str, b: &str) -> bool {
    digits(a) == digits(b)
}

/// Reduce a lookup key to its digits, accepting it only when it carries
/// exactly ten of them. Unlike [`validate_phone`], letters are simply ignored.
pub fn phone_key(input: &str) -> Option<String> {
    let key = digits(input);
    (key.len() == PHONE_DIGITS).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_collapsed() {
        assert_eq!(validate_name("  Mary   Jane ").unwrap(), "Mary Jane");
    }

    #[test]
    fn name_accepts_apostrophes_hyphens_and_unicode_letters() {
        assert_eq!(validate_name("O'Neil-Smith").unwrap(), "O'Neil-Smith");
        assert_eq!(validate_name("Zoë").unwrap(), "Zoë");
    }

    #[test]
    fn name_too_short_after_trim() {
        assert_eq!(validate_name("   a  "), Err(NameError::TooShort));
        assert_eq!(validate_name(""), Err(NameError::TooShort));
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert_eq!(validate_name("R2D2"), Err(NameError::InvalidCharacter('2')));
        assert_eq!(validate_name("Bob!"), Err(NameError::InvalidCharacter('!')));
    }

    #[test]
    fn phone_punctuation_is_normalized() {
        for input in [
            "1234567890",
            "123-456-7890",
            "123.456.7890",
            "(123) 456-7890",
            " 123 456 7890 ",
        ] {
            assert_eq!(validate_phone(input).unwrap(), "123-456-7890", "{input}");
        }
    }

    #[test]
    fn canonical_phone_validates_to_itself() {
        let canonical = validate_phone("(555) 010.9999").unwrap();
        assert_eq!(validate_phone(&canonical).unwrap(), canonical);
    }

    #[test]
    fn phone_rejections() {
        assert_eq!(validate_phone("   "), Err(PhoneError::Empty));
        assert_eq!(
            validate_phone("123-456-789O"),
            Err(PhoneError::ContainsLetters)
        );
        assert_eq!(validate_phone("12345"), Err(PhoneError::WrongDigitCount(5)));
        assert_eq!(
            validate_phone("+1 123 456 7890"),
            Err(PhoneError::WrongDigitCount(11))
        );
    }

    #[test]
    fn digits_only_comparison() {
        assert!(same_digits("123-456-7890", "(123) 456 7890"));
        assert!(!same_digits("123-456-7890", "123-456-7891"));
    }

    #[test]
    fn phone_key_requires_ten_digits() {
        assert_eq!(phone_key("123-456-7890").as_deref(), Some("1234567890"));
        assert_eq!(phone_key("123"), None);
    }
}
