use serde::{Deserialize, Serialize};

/// Connection target and credentials for a [`Client`](crate::Client).
///
/// Construct with [`Config::new`] or [`Config::from_parts`] and chain the
/// `with_*` methods. A static token selects token auth from the first
/// request; database/login/password feed
/// [`Client::connect`](crate::Client::connect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base endpoint, e.g. `https://erp.example.com:8069`.
    pub endpoint: String,

    /// Database name for session authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Login for session authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Password for session authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Static auth token attached as `X-Auth-Token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            database: None,
            login: None,
            password: None,
            token: None,
        }
    }

    /// Assemble the endpoint from a protocol/host/port triple.
    pub fn from_parts(protocol: &str, host: &str, port: u16) -> Self {
        Self::new(format!("{protocol}://{host}:{port}"))
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_builds_the_endpoint() {
        let config = Config::from_parts("https", "erp.example.com", 8069);
        assert_eq!(config.endpoint, "https://erp.example.com:8069");
    }

    #[test]
    fn builders_keep_unset_fields_absent() {
        let config = Config::new("http://localhost:8069")
            .with_database("crm")
            .with_login("admin");

        assert_eq!(config.database.as_deref(), Some("crm"));
        assert_eq!(config.login.as_deref(), Some("admin"));
        assert!(config.password.is_none());
        assert!(config.token.is_none());
    }
}
