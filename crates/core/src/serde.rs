//! Serde helper functions for request deserialization.
//!
//! JSON clients frequently send padded strings (`" Tatooine "`). Required
//! text fields are trimmed on the way in so uniqueness checks compare the
//! values a user actually meant.

use serde::{Deserialize, Deserializer};

/// Deserialize a required string, trimming surrounding whitespace.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(deserialize_with = "deserialize_trimmed_string")]
        name: String,
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let named: Named = serde_json::from_str(r#"{"name": "  Hoth \n"}"#).unwrap();
        assert_eq!(named.name, "Hoth");
    }

    #[test]
    fn test_blank_string_becomes_empty() {
        let named: Named = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(named.name, "");
    }

    #[test]
    fn test_non_string_is_rejected() {
        let result = serde_json::from_str::<Named>(r#"{"name": 42}"#);
        assert!(result.is_err());
    }
}
