use sigv4_fetch_core::{Context, OsEnv};
use sigv4_fetch_http_send_reqwest::ReqwestHttpSend;

/// Create a context that sends with a default `reqwest::Client` and reads
/// credentials from the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
