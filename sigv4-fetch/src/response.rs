use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use sigv4_fetch_core::{Error, Result};

/// Response returned by the transport, untouched.
#[derive(Debug)]
pub struct Response {
    inner: http::Response<Bytes>,
}

impl Response {
    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Raw response body.
    pub fn bytes(&self) -> &Bytes {
        self.inner.body()
    }

    /// Response body as utf-8 text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.inner.body().to_vec())
            .map_err(|e| Error::unexpected("response body is not valid utf-8").with_source(e))
    }

    /// Deserialize the response body as json.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(self.inner.body())
            .map_err(|e| Error::unexpected("failed to parse response body as json").with_source(e))
    }

    /// Consume and return the underlying `http::Response`.
    pub fn into_inner(self) -> http::Response<Bytes> {
        self.inner
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(inner: http::Response<Bytes>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sigv4_fetch_core::ErrorKind;

    fn response(body: &'static [u8]) -> Response {
        http::Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("content-type", "application/json")
            .body(Bytes::from_static(body))
            .expect("response must be valid")
            .into()
    }

    #[test]
    fn test_response_accessors() {
        let resp = response(br#"{"message":"not found"}"#);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.bytes().as_ref(), br#"{"message":"not found"}"#);
        assert_eq!(resp.text().expect("must be text"), r#"{"message":"not found"}"#);

        let value: serde_json::Value = resp.json().expect("must be json");
        assert_eq!(value["message"], "not found");

        let inner = resp.into_inner();
        assert_eq!(inner.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_decode_errors() {
        let resp = response(&[0xff, 0xfe]);

        assert_eq!(resp.text().expect_err("must fail").kind(), ErrorKind::Unexpected);
        assert_eq!(
            resp.json::<serde_json::Value>()
                .expect_err("must fail")
                .kind(),
            ErrorKind::Unexpected
        );
    }
}
