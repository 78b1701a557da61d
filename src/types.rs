use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record returned by the Xano backend.
///
/// Opaque beyond `id` and `email`: any extra fields the backend attaches
/// land in `extra` and round-trip through serialization unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Arbitrary additional backend fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful authentication response from the backend.
///
/// Fields are not validated beyond presence: the client stores `auth_token`
/// and `user` independently, each only when the backend supplied it, and
/// hands the whole payload back to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AuthResult {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    /// Arbitrary additional backend fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_extra_fields_roundtrip() {
        let json = r#"{"id":1,"email":"a@b.com","role":"admin","scores":[1,2,3]}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.extra["role"], "admin");

        let reserialized = serde_json::to_string(&user).unwrap();
        let reparsed: UserRecord = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(reparsed, user);
    }

    #[test]
    fn user_record_absent_name_stays_absent() {
        let user: UserRecord = serde_json::from_str(r#"{"id":1,"email":"a@b.com"}"#).unwrap();
        assert_eq!(user.name, None);
        let json: Value = serde_json::to_value(&user).unwrap();
        assert!(json.get("name").is_none());
    }

    #[test]
    fn auth_result_fields_are_independently_optional() {
        let result: AuthResult = serde_json::from_str(r#"{"authToken":"T"}"#).unwrap();
        assert_eq!(result.auth_token.as_deref(), Some("T"));
        assert!(result.user.is_none());

        let result: AuthResult =
            serde_json::from_str(r#"{"user":{"id":2,"email":"b@c.com"}}"#).unwrap();
        assert!(result.auth_token.is_none());
        assert_eq!(result.user.unwrap().id, 2);
    }

    #[test]
    fn auth_result_preserves_extra_fields() {
        let json = r#"{"authToken":"T","user":{"id":1,"email":"a@b.com"},"refreshHint":42}"#;
        let result: AuthResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.extra["refreshHint"], 42);
    }
}
