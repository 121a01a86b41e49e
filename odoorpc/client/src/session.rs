use serde_json::Value;

/// Server-issued session state captured by a successful
/// [`Client::connect`](crate::Client::connect).
///
/// Overwritten wholesale each time `connect` succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Numeric user id the server resolved the login to.
    pub uid: i64,
    /// Server-side session identifier, when the body exposes one.
    pub session_id: Option<String>,
    /// Login as the server reports it back; may differ from the one sent.
    pub username: Option<String>,
    /// Opaque context (locale, timezone, company scoping) for later calls.
    pub user_context: Option<Value>,
    /// Database the session is bound to.
    pub database: Option<String>,
}

impl Session {
    /// Extract session fields from an authenticate result body.
    ///
    /// Returns `None` when the body carries no integer `uid`; the server
    /// answers `uid: false` for rejected credentials.
    pub(crate) fn from_result(result: &Value) -> Option<Self> {
        let uid = result.get("uid")?.as_i64()?;
        Some(Self {
            uid,
            session_id: string_field(result, "session_id"),
            username: string_field(result, "username"),
            user_context: result
                .get("user_context")
                .filter(|context| !context.is_null())
                .cloned(),
            database: string_field(result, "db"),
        })
    }
}

fn string_field(result: &Value, key: &str) -> Option<String> {
    result.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn captures_all_session_fields() {
        let result = json!({
            "uid": 7,
            "session_id": "abc123",
            "username": "admin@example.com",
            "user_context": {"lang": "en_US", "tz": "UTC", "uid": 7},
            "db": "crm",
        });

        let session = Session::from_result(&result).unwrap();
        assert_eq!(session.uid, 7);
        assert_eq!(session.session_id.as_deref(), Some("abc123"));
        assert_eq!(session.username.as_deref(), Some("admin@example.com"));
        assert_eq!(
            session.user_context,
            Some(json!({"lang": "en_US", "tz": "UTC", "uid": 7}))
        );
        assert_eq!(session.database.as_deref(), Some("crm"));
    }

    #[test]
    fn rejected_logins_have_no_session() {
        assert!(Session::from_result(&json!({"uid": false})).is_none());
        assert!(Session::from_result(&json!({})).is_none());
        assert!(Session::from_result(&Value::Null).is_none());
    }

    #[test]
    fn null_context_is_treated_as_absent() {
        let session = Session::from_result(&json!({"uid": 1, "user_context": null})).unwrap();
        assert!(session.user_context.is_none());
    }
}
