use crate::constants::{
    AWS_QUERY_ENCODE_SET, DEFAULT_CONTENT_TYPE, DEFAULT_REGION, DEFAULT_SERVICE, UNSIGNED_HEADERS,
    X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::endpoint::AwsHost;
use crate::Credential;
use http::request::Parts;
use http::uri::Authority;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use sigv4_fetch_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use sigv4_fetch_core::time::{format_date, format_iso8601, now, DateTime};
use sigv4_fetch_core::{Error, Result, SignRequest, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Service and region are optional: whatever is not set explicitly is
/// inferred from the request host (see [`AwsHost`]), falling back to
/// `execute-api` and `us-east-1`.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    service: Option<String>,
    region: Option<String>,
    content_sha256: bool,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new AWS V4 signer that infers service and region from host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service to sign for.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the region to sign for.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Always send `x-amz-content-sha256`, not only for S3.
    pub fn with_content_sha256(mut self, enabled: bool) -> Self {
        self.content_sha256 = enabled;
        self
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

    /// Resolve the `(service, region)` pair this request will be signed for.
    pub fn scope_for(&self, authority: &Authority) -> (String, String) {
        let inferred = if self.service.is_none() || self.region.is_none() {
            AwsHost::parse(authority.as_str())
        } else {
            AwsHost::default()
        };

        let service = self
            .service
            .clone()
            .or(inferred.service)
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let region = self
            .region
            .clone()
            .or(inferred.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        (service, region)
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<&[u8]>,
        cred: &Self::Credential,
    ) -> Result<()> {
        // Take the time once, it must not change between canonicalization and key derivation.
        let now = self.time.unwrap_or_else(now);
        let body = body.unwrap_or_default();
        let mut signed_req = SigningRequest::build(req)?;

        let (service, region) = self.scope_for(&signed_req.authority);
        let content_sha256 = self.content_sha256 || service == "s3";

        // canonicalize context
        canonicalize_header(&mut signed_req, cred, body, content_sha256, now)?;

        // build canonical request and string to sign.
        let creq = canonical_request_string(&signed_req, body, service == "s3")?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!("{}/{}/{}/aws4_request", format_date(now), region, service);
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "AWS4-HMAC-SHA256")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{}", &scope)?;
            write!(f, "{}", &encoded_req)?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(&cred.secret_access_key, now, &region, &service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            cred.access_key_id,
            scope,
            signed_header_names(&signed_req).join(";"),
            signature
        ))
        .map_err(|e| {
            Error::request_invalid("failed to create authorization header").with_source(e)
        })?;
        authorization.set_sensitive(true);

        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req)
    }
}

/// Header names that take part in the signature, sorted.
fn signed_header_names(ctx: &SigningRequest) -> Vec<&str> {
    ctx.header_name_to_vec_sorted()
        .into_iter()
        .filter(|name| !UNSIGNED_HEADERS.contains(name))
        .collect()
}

fn canonical_request_string(
    ctx: &SigningRequest,
    body: &[u8],
    single_encode_path: bool,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert encoded path
    writeln!(f, "{}", canonical_uri(&ctx.path, single_encode_path))?;
    // Insert query
    writeln!(f, "{}", canonical_query(&ctx.query))?;
    // Insert signed headers
    let signed_headers = signed_header_names(ctx);
    for header in signed_headers.iter() {
        let value = ctx.header_value_joined(header)?.unwrap_or_default();
        writeln!(f, "{header}:{value}")?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;

    match ctx.headers.get(X_AMZ_CONTENT_SHA_256) {
        Some(v) => write!(f, "{}", v.to_str()?)?,
        None => write!(f, "{}", hex_sha256(body))?,
    }

    Ok(f)
}

/// Build the canonical uri.
///
/// S3 expects every segment encoded exactly once, other services expect the
/// normalized path to be encoded again.
fn canonical_uri(path: &str, single_encode: bool) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let mut segments: Vec<String> = Vec::new();
    if single_encode {
        for piece in path.split('/') {
            let decoded = percent_decode_str(piece).decode_utf8_lossy();
            segments.push(utf8_percent_encode(&decoded, &AWS_QUERY_ENCODE_SET).to_string());
        }
    } else {
        let mut collapsed = String::with_capacity(path.len());
        for c in path.chars() {
            if c == '/' && collapsed.ends_with('/') {
                continue;
            }
            collapsed.push(c);
        }

        for piece in collapsed.split('/') {
            match piece {
                ".." => {
                    segments.pop();
                }
                "." => {}
                _ => segments.push(utf8_percent_encode(piece, &AWS_QUERY_ENCODE_SET).to_string()),
            }
        }
    }

    let mut uri = segments.join("/");
    if !uri.starts_with('/') {
        uri.insert(0, '/');
    }
    if single_encode {
        uri = uri.replace("%2F", "/");
    }
    uri
}

/// Build the canonical query string: encoded pairs sorted by key then value.
fn canonical_query(query: &[(String, String)]) -> String {
    let mut pairs = query
        .iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn canonicalize_header(
    ctx: &mut SigningRequest,
    cred: &Credential,
    body: &[u8],
    content_sha256: bool,
    now: DateTime,
) -> Result<()> {
    // Header names and values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if ctx.headers.get(header::HOST).is_none() {
        ctx.headers
            .insert(header::HOST, HeaderValue::from_str(ctx.authority.as_str())?);
    }

    if !body.is_empty() {
        if ctx.headers.get(header::CONTENT_TYPE).is_none() {
            ctx.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
            );
        }
        if ctx.headers.get(header::CONTENT_LENGTH).is_none() {
            ctx.headers
                .insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
        }
    }

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
    if let Some(token) = &cred.session_token {
        if ctx.headers.get(X_AMZ_SECURITY_TOKEN).is_none() {
            let mut value = HeaderValue::from_str(token).map_err(|e| {
                Error::credential_invalid("session token is not a valid header value")
                    .with_source(e)
            })?;
            // Set token value sensitive to valid leaking.
            value.set_sensitive(true);

            ctx.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }
    }

    // Insert X_AMZ_CONTENT_SHA_256 header if required and not present.
    if content_sha256 && ctx.headers.get(X_AMZ_CONTENT_SHA_256).is_none() {
        ctx.headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_str(&hex_sha256(body))?,
        );
    }

    // The signing time always wins over a caller provided date.
    ctx.headers
        .insert(X_AMZ_DATE, HeaderValue::from_str(&format_iso8601(now))?);

    Ok(())
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
