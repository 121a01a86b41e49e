//! The client proper: one private transport call and the thin public
//! operations mapped onto it.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use odoorpc_proto::prelude::*;

use crate::auth::{self, AuthMode};
use crate::config::Config;
use crate::error::{ClientError, RpcResult};
use crate::session::Session;

/// Async JSON-RPC client for an Odoo-style server.
///
/// Every public operation issues at most one POST and resolves to a
/// [`RpcResult`]; remote RPC errors and transport failures both surface as
/// `Err`, never as a panic. Data calls take `&self`;
/// [`connect`](Self::connect) and [`set_token`](Self::set_token) take
/// `&mut self`, so authentication is serialized before data calls by
/// construction.
#[derive(Debug)]
pub struct Client {
    config: Config,
    base: String,
    http: reqwest::Client,
    auth: AuthMode,
    session: Option<Session>,
    next_id: AtomicU64,
}

impl Client {
    /// Build a client from a configuration.
    ///
    /// A static token in the configuration selects token auth from the
    /// start; otherwise the client stays anonymous until
    /// [`connect`](Self::connect) or [`set_token`](Self::set_token).
    pub fn new(config: Config) -> RpcResult<Self> {
        Url::parse(&config.endpoint)?;
        let base = config.endpoint.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().build()?;
        let auth = match &config.token {
            Some(token) => AuthMode::Token(token.clone()),
            None => AuthMode::Anonymous,
        };

        Ok(Self {
            config,
            base,
            http,
            auth,
            session: None,
            next_id: AtomicU64::new(1),
        })
    }

    /// Current authentication mode.
    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }

    /// Session captured by the last successful [`connect`](Self::connect).
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Switch to static-token auth, dropping any captured session cookie.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.auth = AuthMode::Token(token.into());
    }

    /// Authenticate with the configured database/login/password and switch
    /// to session-cookie auth for subsequent calls.
    ///
    /// Session fields are overwritten from the server's reply on every
    /// successful call; there is no explicit disconnect.
    pub async fn connect(&mut self) -> RpcResult<Session> {
        let params = AuthParams {
            db: credential(self.config.database.as_ref(), "database")?,
            login: credential(self.config.login.as_ref(), "login")?,
            password: credential(self.config.password.as_ref(), "password")?,
        };

        let url = format!("{}{}", self.base, SESSION_AUTHENTICATE);
        debug!("authenticating against {url}");
        let request = RpcRequest::call(self.next_id(), params);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let header_cookie = auth::session_cookie(response.headers());
        let body: RpcResponse = response.json().await?;
        if let Some(error) = body.error {
            warn!("authentication rejected by {url}");
            return Err(ClientError::Rpc(error));
        }

        let result = body.result.unwrap_or(Value::Null);
        let mut session = Session::from_result(&result)
            .ok_or_else(|| ClientError::Auth("server returned no usable uid".to_string()))?;
        if session.username.is_none() {
            session.username = self.config.login.clone();
        }

        // Prefer the Set-Cookie pair; fall back to the sid in the body.
        let cookie = header_cookie.or_else(|| {
            session
                .session_id
                .as_ref()
                .map(|sid| format!("{}={sid}", auth::SESSION_COOKIE_NAME))
        });
        if let Some(cookie) = cookie {
            self.auth = AuthMode::SessionCookie(cookie);
        }

        self.session = Some(session.clone());
        Ok(session)
    }

    /// `search`: ids of the records matching the domain.
    ///
    /// The domain travels as the single positional argument; a missing
    /// domain is sent as JSON `null`.
    pub async fn search(
        &self,
        model: &str,
        params: &QueryParams,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        let domain = serde_json::to_value(&params.domain)?;
        self.call_kw(model, "search", vec![domain], Kwargs::context_only(context))
            .await
    }

    /// `search_read`: records matching the domain, projected and paged.
    pub async fn search_read(
        &self,
        model: &str,
        params: &QueryParams,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        let kwargs = Kwargs {
            context,
            domain: params.domain.clone(),
            offset: params.offset,
            limit: params.limit,
            order: params.order.clone(),
            fields: params.fields.clone(),
            ..Default::default()
        };
        self.call_kw(model, "search_read", Vec::new(), kwargs).await
    }

    /// `read`: records by id, projected onto `fields`.
    ///
    /// The id set travels as the single positional argument; missing ids
    /// are sent as JSON `null`.
    pub async fn get(
        &self,
        model: &str,
        params: &QueryParams,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        let ids = serde_json::to_value(&params.ids)?;
        let kwargs = Kwargs {
            context,
            fields: params.fields.clone(),
            ..Default::default()
        };
        self.call_kw(model, "read", vec![ids], kwargs).await
    }

    /// `read_group`: grouped aggregation over the domain.
    pub async fn read_group(
        &self,
        model: &str,
        params: &QueryParams,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        let kwargs = Kwargs {
            context,
            domain: params.domain.clone(),
            fields: params.fields.clone(),
            groupby: params.groupby.clone(),
            lazy: params.lazy,
            order: params.order.clone(),
            ..Default::default()
        };
        self.call_kw(model, "read_group", Vec::new(), kwargs).await
    }

    /// `search_read` with the domain forced to all positive ids.
    ///
    /// Whatever domain the caller put in `params` is overridden; the other
    /// options pass through.
    pub async fn browse_by_id(&self, model: &str, params: &QueryParams) -> RpcResult<Value> {
        let mut params = params.clone();
        params.domain = Some(Domain::new().filter("id", ">", 0));
        self.search_read(model, &params, None).await
    }

    /// `create`: insert one record from a values map.
    pub async fn create(
        &self,
        model: &str,
        values: Value,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        self.call_kw(model, "create", vec![values], Kwargs::context_only(context))
            .await
    }

    /// `write`: update the given records from a values map.
    ///
    /// An empty id slice issues no request at all and resolves to `Null`.
    pub async fn update(
        &self,
        model: &str,
        ids: &[i64],
        values: Value,
        context: Option<Value>,
    ) -> RpcResult<Value> {
        if ids.is_empty() {
            return Ok(Value::Null);
        }
        let args = vec![serde_json::to_value(ids)?, values];
        self.call_kw(model, "write", args, Kwargs::context_only(context))
            .await
    }

    /// `unlink`: delete the given records.
    ///
    /// An empty id slice issues no request at all and resolves to `Null`.
    pub async fn delete(&self, model: &str, ids: &[i64], context: Option<Value>) -> RpcResult<Value> {
        if ids.is_empty() {
            return Ok(Value::Null);
        }
        let args = vec![serde_json::to_value(ids)?];
        self.call_kw(model, "unlink", args, Kwargs::context_only(context))
            .await
    }

    /// Escape hatch: an arbitrary model method against an arbitrary
    /// sub-path, with caller-supplied args and kwargs.
    pub async fn rpc_call(
        &self,
        path: &str,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Kwargs,
    ) -> RpcResult<Value> {
        self.call(
            path,
            CallKw {
                model: model.to_string(),
                method: method.to_string(),
                args,
                kwargs,
            },
        )
        .await
    }

    async fn call_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Kwargs,
    ) -> RpcResult<Value> {
        debug!("call_kw {model}.{method}");
        self.call(
            DATASET_CALL_KW,
            CallKw {
                model: model.to_string(),
                method: method.to_string(),
                args,
                kwargs,
            },
        )
        .await
    }

    /// Wrap a params payload in the JSON-RPC envelope, POST it, and
    /// normalize the reply into a [`RpcResult`].
    async fn call<P: Serialize>(&self, path: &str, params: P) -> RpcResult<Value> {
        let url = format!("{}{}", self.base, path);
        let request = RpcRequest::call(self.next_id(), params);
        let response = self
            .auth
            .apply(
                self.http
                    .post(&url)
                    .header(CONTENT_TYPE, "application/json")
                    .header(ACCEPT, "application/json"),
            )
            .json(&request)
            .send()
            .await?;

        let body: RpcResponse = response.json().await?;
        match body.error {
            Some(error) => {
                warn!("rpc error from {url}: {error}");
                Err(ClientError::Rpc(error))
            }
            None => Ok(body.result.unwrap_or(Value::Null)),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

fn credential(field: Option<&String>, name: &str) -> RpcResult<String> {
    field
        .cloned()
        .ok_or_else(|| ClientError::Config(format!("{name} is required for session authentication")))
}
