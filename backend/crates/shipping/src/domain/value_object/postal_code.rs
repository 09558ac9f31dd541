//! PostalCode Value Object
//!
//! Wraps a CEP-style postal code in canonical `#####-###` form.
//! Only the shape is checked here; whether the code designates a real
//! delivery area is the address service's verdict.
//!
//! ## Usage
//! ```rust
//! use shipping::domain::value_object::postal_code::PostalCode;
//!
//! let code = PostalCode::parse("01310100").unwrap();
//! assert_eq!(code.as_str(), "01310-100");
//! ```
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a postal code, accepting `#####-###` or the bare 8 digits
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();

        let shape_ok = match trimmed.len() {
            8 => trimmed.bytes().all(|b| b.is_ascii_digit()),
            9 => {
                trimmed.as_bytes()[5] == b'-'
                    && trimmed
                        .bytes()
                        .enumerate()
                        .all(|(i, b)| i == 5 || b.is_ascii_digit())
            }
            _ => false,
        };

        if !shape_ok {
            return Err(AppError::bad_request(format!(
                "Malformed postal code: {trimmed}"
            )));
        }

        let digits: String = trimmed.bytes().filter(u8::is_ascii_digit).map(char::from).collect();
        Ok(Self(format!("{}-{}", &digits[..5], &digits[5..])))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PostalCode {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PostalCode::parse(s)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyphenated() {
        let code = PostalCode::parse("01310-100").unwrap();
        assert_eq!(code.as_str(), "01310-100");
    }

    #[test]
    fn test_parse_bare_digits_canonicalized() {
        let code = PostalCode::parse("20040020").unwrap();
        assert_eq!(code.as_str(), "20040-020");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let code = PostalCode::parse("  01310-100 ").unwrap();
        assert_eq!(code.as_str(), "01310-100");
    }

    #[test]
    fn test_parse_rejects_short() {
        assert!(PostalCode::parse("1310-100").is_err());
    }

    #[test]
    fn test_parse_rejects_misplaced_hyphen() {
        assert!(PostalCode::parse("013-10100").is_err());
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert!(PostalCode::parse("abcde-fgh").is_err());
        assert!(PostalCode::parse("").is_err());
    }

    #[test]
    fn test_from_str_trait() {
        let code: PostalCode = "01310-100".parse().unwrap();
        assert_eq!(code.as_str(), "01310-100");
    }
}
