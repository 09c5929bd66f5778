use std::mem;

use crate::{Error, Result};
use http::uri::Authority;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

/// Signing context for request.
///
/// Built from `http::request::Parts` and applied back after signing. The
/// request uri is only read: signing adds headers and never rewrites the
/// target url.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority, user info stripped.
    pub authority: Authority,
    /// HTTP path, percent-encoding preserved.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority: match uri.authority() {
                Some(authority) => match authority.as_str().rsplit_once('@') {
                    Some((_, host)) => host.parse::<Authority>()?,
                    None => authority.clone(),
                },
                None => {
                    return Err(Error::request_invalid(
                        "request without authority is invalid for signing",
                    ))
                }
            },
            path: uri.path().to_string(),
            query: uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;

        Ok(())
    }

    /// Get all values of a header joined by `,`.
    ///
    /// Returns `None` if header not found.
    pub fn header_value_joined(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.headers.get_all(key).iter().peekable();
        if values.peek().is_none() {
            return Ok(None);
        }

        let values = values
            .map(|v| v.to_str())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Some(values.join(",")))
    }

    /// Normalize header value.
    ///
    /// Leading and trailing whitespace is removed and every inner run of
    /// whitespace is collapsed into a single space.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let mut normalized = Vec::with_capacity(bs.len());
        for part in bs
            .split(|b| b.is_ascii_whitespace())
            .filter(|p| !p.is_empty())
        {
            if !normalized.is_empty() {
                normalized.push(b' ');
            }
            normalized.extend_from_slice(part);
        }
        if normalized == bs {
            return;
        }

        let sensitive = v.is_sensitive();
        // This can't fail because we started with a valid HeaderValue and then only removed whitespace
        *v = HeaderValue::from_bytes(&normalized).expect("invalid header value");
        v.set_sensitive(sensitive);
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }
}
