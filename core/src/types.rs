//! Wire DTOs for the booleans.io API.
//!
//! # Design
//! The service represents boolean values as the literal lowercase tokens
//! `"true"` and `"false"` everywhere they cross the wire: in urlencoded
//! request bodies and in the `val` field of JSON resource documents. The
//! `bool_token` codec keeps that detail out of the rest of the crate, which
//! only ever sees native `bool`s.

use serde::{Deserialize, Serialize};

/// One boolean resource as returned by create/read/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolResource {
    /// Opaque identifier assigned by the service at creation time.
    pub id: String,
    /// Current stored value, a `"true"`/`"false"` token on the wire.
    #[serde(with = "bool_token")]
    pub val: bool,
}

/// Encode a boolean as its wire token.
pub fn to_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Decode a wire token. Only the exact lowercase tokens are recognized.
pub fn from_token(token: &str) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Serde codec mapping the wire's token strings to native `bool`.
pub mod bool_token {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::to_token(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let token = String::deserialize(deserializer)?;
        super::from_token(&token)
            .ok_or_else(|| D::Error::custom(format!("expected \"true\" or \"false\", got {token:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_deserializes_token_val() {
        let resource: BoolResource =
            serde_json::from_str(r#"{"id":"abc","val":"true"}"#).unwrap();
        assert_eq!(resource.id, "abc");
        assert!(resource.val);
    }

    #[test]
    fn resource_serializes_val_as_token() {
        let resource = BoolResource {
            id: "abc".to_string(),
            val: false,
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["val"], "false");
    }

    #[test]
    fn resource_rejects_unknown_token() {
        let result: Result<BoolResource, _> = serde_json::from_str(r#"{"id":"abc","val":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn resource_rejects_json_bool() {
        // The wire format is a token string; a bare JSON bool is schema drift.
        let result: Result<BoolResource, _> = serde_json::from_str(r#"{"id":"abc","val":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn tokens_round_trip() {
        assert_eq!(from_token(to_token(true)), Some(true));
        assert_eq!(from_token(to_token(false)), Some(false));
        assert_eq!(from_token("True"), None);
    }
}
