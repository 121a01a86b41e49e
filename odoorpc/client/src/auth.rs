//! Authentication modes and session cookie extraction.

use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::RequestBuilder;

/// Header carrying the static auth token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Cookie name the server uses for its session identifier.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// How the client identifies itself on each request.
///
/// A captured session cookie and a static token are mutually exclusive:
/// setting a token drops the cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// No auth header attached.
    Anonymous,
    /// `X-Auth-Token: <token>` on every request.
    Token(String),
    /// `Cookie: <pair>` captured from a successful authenticate call.
    SessionCookie(String),
}

impl AuthMode {
    /// Attach this mode's header to an outgoing request.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            AuthMode::Anonymous => request,
            AuthMode::Token(token) => request.header(AUTH_TOKEN_HEADER, token),
            AuthMode::SessionCookie(cookie) => request.header(COOKIE, cookie),
        }
    }
}

/// Pull the session cookie pair out of a response's `Set-Cookie` headers.
///
/// Prefers the pair named [`SESSION_COOKIE_NAME`]; otherwise the first
/// `name=value` pair offered is taken.
pub(crate) fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let mut first = None;
    for value in headers.get_all(SET_COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        let pair = raw.split(';').next().unwrap_or(raw).trim();
        if pair.strip_prefix(SESSION_COOKIE_NAME).is_some_and(|rest| rest.starts_with('=')) {
            return Some(pair.to_string());
        }
        if first.is_none() && pair.contains('=') {
            first = Some(pair.to_string());
        }
    }
    first
}
