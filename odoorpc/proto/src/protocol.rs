//! Wire envelope definitions for the JSON-RPC `call_kw` protocol.
//!
//! These structures provide a stable wire interface for client crates
//! while allowing the transport implementation to evolve independently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::Domain;

/// JSON-RPC revision stamped on every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Envelope-level method name; the model method travels in the params.
pub const RPC_METHOD: &str = "call";

/// Sub-path for model method dispatch.
pub const DATASET_CALL_KW: &str = "/web/dataset/call_kw";

/// Sub-path for credential authentication.
pub const SESSION_AUTHENTICATE: &str = "/web/session/authenticate";

/// JSON-RPC 2.0 request envelope, generic over the params payload.
#[derive(Debug, Serialize)]
pub struct RpcRequest<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P> RpcRequest<P> {
    /// Wrap a params payload in a `method: "call"` envelope.
    pub fn call(id: u64, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method: RPC_METHOD,
            params,
        }
    }
}

/// Params payload for [`DATASET_CALL_KW`]: one model method invocation.
#[derive(Debug, Serialize)]
pub struct CallKw {
    pub model: String,
    pub method: String,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

/// Keyword arguments forwarded with a `call_kw` invocation.
///
/// Every field is optional; absent fields are left off the wire entirely
/// rather than sent as `null` or defaulted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Kwargs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
}

impl Kwargs {
    /// Kwargs carrying nothing but the forwarded context.
    pub fn context_only(context: Option<Value>) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }
}

/// Params payload for [`SESSION_AUTHENTICATE`].
#[derive(Debug, Serialize)]
pub struct AuthParams {
    pub db: String,
    pub login: String,
    pub password: String,
}

/// Server reply; exactly one of `result`/`error` is expected.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}
