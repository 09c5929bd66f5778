use crate::Response;
use bytes::Bytes;
use log::debug;
use sigv4_fetch_aws_v4::{normalize, RequestOptions};
use sigv4_fetch_core::time::DateTime;
use sigv4_fetch_core::{Context, Result, SignRequest};

/// Fetcher signs requests with AWS SigV4 and sends them through the
/// [`Context`]'s transport.
///
/// Every call resolves credentials and computes a fresh signature, nothing
/// is cached between calls. A `Fetcher` is cheap to clone and can be shared
/// by concurrent tasks.
///
/// ## Example
///
/// ```no_run
/// use sigv4_fetch::{Context, Fetcher, OsEnv, RequestOptions};
/// use sigv4_fetch_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> sigv4_fetch::Result<()> {
/// let ctx = Context::new()
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let fetcher = Fetcher::new(ctx);
///
/// let resp = fetcher
///     .fetch(
///         "https://abc123.execute-api.eu-central-1.amazonaws.com/prod/items",
///         RequestOptions::new().with_region("eu-central-1"),
///     )
///     .await?;
/// println!("status: {}", resp.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    ctx: Context,
    time: Option<DateTime>,
}

impl Fetcher {
    /// Create a new fetcher on top of given context.
    pub fn new(ctx: Context) -> Self {
        Self { ctx, time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the signed request without sending it.
    pub async fn sign(&self, url: &str, options: RequestOptions) -> Result<http::Request<Bytes>> {
        let (descriptor, credential) = normalize(&self.ctx, url, &options).await?;

        let mut signer = descriptor.signer();
        if let Some(time) = self.time {
            signer = signer.with_time(time);
        }

        let (mut parts, body) = descriptor.into_request()?.into_parts();
        signer.sign_request(&mut parts, Some(&body), &credential)?;
        debug!("signed request: {} {}", parts.method, parts.uri);

        Ok(http::Request::from_parts(parts, body))
    }

    /// Sign the request and send it.
    ///
    /// The transport's response, or its error, is returned unchanged: non-2xx
    /// statuses are not errors.
    pub async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Response> {
        let req = self.sign(url, options).await?;
        let resp = self.ctx.http_send(req).await?;
        debug!("received response: {}", resp.status());

        Ok(Response::from(resp))
    }
}

/// Sign and send a request with the [default context](crate::default_context).
///
/// ```no_run
/// use sigv4_fetch::RequestOptions;
///
/// # async fn example() -> sigv4_fetch::Result<()> {
/// let resp = sigv4_fetch::fetch(
///     "https://s3.us-west-2.amazonaws.com/mybucket/puppy.jpg",
///     RequestOptions::new(),
/// )
/// .await?;
/// let bytes = resp.bytes();
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub async fn fetch(url: &str, options: RequestOptions) -> Result<Response> {
    Fetcher::new(crate::default_context())
        .fetch(url, options)
        .await
}
