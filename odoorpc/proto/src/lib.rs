pub mod protocol;
pub mod query;

pub mod prelude {
    // --- Wire Envelope ---
    pub use crate::protocol::{AuthParams, CallKw, Kwargs, RpcRequest, RpcResponse};
    pub use crate::protocol::{
        DATASET_CALL_KW, JSONRPC_VERSION, RPC_METHOD, SESSION_AUTHENTICATE,
    };

    // --- Query Building ---
    pub use crate::query::{Clause, Domain, QueryParams};
}
