//! Ownership key codec
//!
//! Monitoring objects name their originating resource as a compound
//! `namespace/name` string in the `owner` var. Decoding that string is the
//! only parsing in the subsystem and lives here so the sweeps stay free of
//! it and it can be tested without any backend.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A decoded `namespace/name` owner reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerKey {
    namespace: String,
    name: String,
}

impl OwnerKey {
    /// Decode the raw `owner` var into a namespace/name pair.
    ///
    /// Accepts exactly one `/` separator with non-empty parts on either
    /// side. Matching is case-sensitive and nothing is trimmed; a malformed
    /// key fails rather than truncating.
    pub fn decode(raw: Option<&Value>) -> Result<Self, OwnerKeyError> {
        let value = match raw {
            None => return Err(OwnerKeyError::Missing),
            Some(value) if value.is_null() => return Err(OwnerKeyError::Missing),
            Some(value) => value,
        };
        let key = value.as_str().ok_or(OwnerKeyError::NotAString)?;
        if key.is_empty() {
            return Err(OwnerKeyError::Empty);
        }

        let mut parts = key.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(name), None) if !namespace.is_empty() && !name.is_empty() => {
                Ok(Self {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(OwnerKeyError::Malformed(key.to_string())),
        }
    }

    /// Namespace half of the key.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name half of the key.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Why an `owner` var failed to decode.
///
/// The absent/empty cases mean the object is merely unowned; the rest mean
/// it carries a key this controller cannot interpret. Neither is ever a
/// deletion trigger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnerKeyError {
    /// No `owner` var on the object (or a JSON null).
    #[error("owner var is absent")]
    Missing,

    /// The var is present but empty.
    #[error("owner var is empty")]
    Empty,

    /// The var holds a non-string value.
    #[error("owner var is not a string")]
    NotAString,

    /// The string is not a `namespace/name` key.
    #[error("malformed owner key '{0}'")]
    Malformed(String),
}

impl OwnerKeyError {
    /// True for the absent/empty cases, where the object is unowned rather
    /// than carrying a bad key.
    pub fn is_unowned(&self) -> bool {
        matches!(self, Self::Missing | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode_str(raw: &str) -> Result<OwnerKey, OwnerKeyError> {
        OwnerKey::decode(Some(&Value::from(raw)))
    }

    #[test]
    fn test_decode_valid_key() {
        let key = decode_str("ns1/cr1").unwrap();
        assert_eq!(key.namespace(), "ns1");
        assert_eq!(key.name(), "cr1");
        assert_eq!(key.to_string(), "ns1/cr1");
    }

    #[test]
    fn test_decode_absent() {
        assert_eq!(OwnerKey::decode(None), Err(OwnerKeyError::Missing));
        assert_eq!(
            OwnerKey::decode(Some(&Value::Null)),
            Err(OwnerKeyError::Missing)
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_str(""), Err(OwnerKeyError::Empty));
    }

    #[test]
    fn test_decode_non_string() {
        assert_eq!(
            OwnerKey::decode(Some(&Value::from(42))),
            Err(OwnerKeyError::NotAString)
        );
    }

    #[test]
    fn test_decode_missing_separator() {
        assert_eq!(
            decode_str("cr1"),
            Err(OwnerKeyError::Malformed("cr1".to_string()))
        );
    }

    #[test]
    fn test_decode_extra_separator() {
        assert_eq!(
            decode_str("ns1/cr1/extra"),
            Err(OwnerKeyError::Malformed("ns1/cr1/extra".to_string()))
        );
    }

    #[test]
    fn test_decode_empty_halves() {
        assert!(matches!(decode_str("/cr1"), Err(OwnerKeyError::Malformed(_))));
        assert!(matches!(decode_str("ns1/"), Err(OwnerKeyError::Malformed(_))));
        assert!(matches!(decode_str("/"), Err(OwnerKeyError::Malformed(_))));
    }

    #[test]
    fn test_decode_does_not_trim() {
        let key = decode_str(" ns1 /cr1").unwrap();
        assert_eq!(key.namespace(), " ns1 ");
    }

    #[test]
    fn test_unowned_classification() {
        assert!(OwnerKeyError::Missing.is_unowned());
        assert!(OwnerKeyError::Empty.is_unowned());
        assert!(!OwnerKeyError::NotAString.is_unowned());
        assert!(!OwnerKeyError::Malformed("x".to_string()).is_unowned());
    }

    proptest! {
        #[test]
        fn decode_never_panics(raw in ".*") {
            let _ = OwnerKey::decode(Some(&Value::from(raw)));
        }

        #[test]
        fn valid_keys_round_trip(
            namespace in "[a-z0-9-]{1,20}",
            name in "[a-z0-9.-]{1,30}",
        ) {
            let raw = Value::from(format!("{}/{}", namespace, name));
            let key = OwnerKey::decode(Some(&raw)).unwrap();
            prop_assert_eq!(key.namespace(), namespace.as_str());
            prop_assert_eq!(key.name(), name.as_str());
        }
    }
}
