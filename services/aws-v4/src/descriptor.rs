//! Normalize caller input into a request ready for signing.

use crate::constants::DEFAULT_SERVICE;
use crate::endpoint::AwsHost;
use crate::provide_credential::DefaultCredentialProvider;
use crate::{Credential, RequestSigner};
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, Uri};
use log::debug;
use sigv4_fetch_core::{Context, Error, ProvideCredential, Result};

/// Options of a single signed request.
///
/// Everything is optional: without any option the request is a `GET`
/// without body, signed for the service and region derived from the url.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Option<String>,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    region: Option<String>,
    service: Option<String>,
    credentials: Option<Credential>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the http method, `GET` if not set.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Append a header.
    ///
    /// Names are case-insensitive, repeating a name adds another value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the region to sign for.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the service to sign for.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set explicit credentials, they take precedence over the environment.
    pub fn with_credentials(mut self, credentials: Credential) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Explicit credentials, if any.
    pub fn credentials(&self) -> Option<&Credential> {
        self.credentials.as_ref()
    }
}

/// RequestDescriptor is the normalized form of a url plus [`RequestOptions`].
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Parsed absolute url.
    pub uri: Uri,
    /// HTTP method.
    pub method: Method,
    /// Url authority as given, port included.
    pub host: String,
    /// Url path followed by `?query` if the url has one.
    pub path: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Option<Bytes>,
    /// Region to sign for, inferred later if unset.
    pub region: Option<String>,
    /// Service to sign for, only unset for AWS hosts.
    pub service: Option<String>,
}

impl RequestDescriptor {
    /// Normalize the url and options.
    pub fn new(url: &str, options: &RequestOptions) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::request_invalid(format!("url {url} is invalid")).with_source(e))?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            Some(scheme) => {
                return Err(Error::request_invalid(format!(
                    "url {url} has unsupported scheme {scheme}"
                )))
            }
            None => return Err(Error::request_invalid(format!("url {url} is not absolute"))),
        }
        let host = match uri.authority() {
            Some(authority) if authority.as_str().contains('@') => {
                return Err(Error::request_invalid(format!(
                    "url {url} must not carry user info"
                )))
            }
            Some(authority) if !authority.host().is_empty() => authority.as_str().to_string(),
            _ => return Err(Error::request_invalid(format!("url {url} has no host"))),
        };

        let path = match uri.query() {
            Some(query) => format!("{}?{}", uri.path(), query),
            None => uri.path().to_string(),
        };

        let method = match &options.method {
            Some(m) => Method::from_bytes(m.to_ascii_uppercase().as_bytes()).map_err(|e| {
                Error::request_invalid(format!("method {m} is invalid")).with_source(e)
            })?,
            None => Method::GET,
        };

        let mut headers = HeaderMap::with_capacity(options.headers.len());
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::request_invalid(format!("header name {name} is invalid")).with_source(e)
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                Error::request_invalid(format!("value of header {name} is invalid"))
                    .with_source(e)
            })?;
            // Signing reads every value as visible ASCII.
            value.to_str().map_err(|e| {
                Error::request_invalid(format!("value of header {name} is not visible ascii"))
                    .with_source(e)
            })?;
            headers.append(name, value);
        }

        let service = match &options.service {
            Some(service) => Some(service.clone()),
            None if AwsHost::parse(&host).is_aws_host => None,
            None => Some(DEFAULT_SERVICE.to_string()),
        };

        Ok(Self {
            uri,
            method,
            host,
            path,
            headers,
            body: options.body.clone(),
            region: options.region.clone(),
            service,
        })
    }

    /// Build the signer for this request.
    pub fn signer(&self) -> RequestSigner {
        let mut signer = RequestSigner::new();
        if let Some(service) = &self.service {
            signer = signer.with_service(service);
        }
        if let Some(region) = &self.region {
            signer = signer.with_region(region);
        }
        signer
    }

    /// Convert into an unsigned http request.
    pub fn into_request(self) -> Result<http::Request<Bytes>> {
        let mut req = http::Request::builder()
            .method(self.method)
            .uri(self.uri)
            .body(self.body.unwrap_or_default())?;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}

/// Resolve credentials, then normalize the request.
///
/// Credentials come from `options` first and the environment second. Failing
/// to find either is reported before the url is looked at.
pub async fn normalize(
    ctx: &Context,
    url: &str,
    options: &RequestOptions,
) -> Result<(RequestDescriptor, Credential)> {
    let provider = DefaultCredentialProvider::with_credential(options.credentials().cloned());
    let Some(credential) = provider.provide_credential(ctx).await? else {
        return Err(Error::credential_missing(
            "no credentials given and AWS_ACCESS_KEY_ID or AWS_SECRET_ACCESS_KEY is not set",
        ));
    };

    let descriptor = RequestDescriptor::new(url, options)?;
    debug!(
        "normalized request: {} {}{} service={:?} region={:?}",
        descriptor.method, descriptor.host, descriptor.path, descriptor.service, descriptor.region
    );
    Ok((descriptor, credential))
}
