use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Opaque wallet identity in its base58 display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(String);

impl PublicKey {
    /// # Errors
    ///
    /// Fails on an empty string or on characters outside the base58 alphabet.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty("public_key".into()));
        }
        if let Some(bad) = s.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(ValidationError::InvalidValue {
                field: "public_key".into(),
                message: format!("'{bad}' is not a base58 character"),
            });
        }
        Ok(Self(s.to_string()))
    }

    pub fn to_base58(&self) -> &str {
        &self.0
    }

    /// First four characters followed by an ellipsis, as shown in headers.
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(4).collect();
        format!("{head}...")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_keeps_four_characters() {
        let key = PublicKey::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
        assert_eq!(key.short(), "7xKX...");
    }

    #[test]
    fn rejects_non_base58() {
        assert!(matches!(
            PublicKey::parse("0OIl"),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(PublicKey::parse(""), Err(ValidationError::Empty(_))));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<PublicKey, _> = serde_json::from_str("\"abc\"");
        assert!(ok.is_ok());
        let bad: Result<PublicKey, _> = serde_json::from_str("\"a-b\"");
        assert!(bad.is_err());
    }
}
