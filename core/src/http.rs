use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is the transport that carries a signed request to its destination.
///
/// Implementations own everything about the network call: connection
/// handling, TLS, timeouts and cancellation. Errors they return are passed
/// back to the caller unchanged, and responses are never inspected.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}
