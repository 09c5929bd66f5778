//! AWS SigV4 signing for sigv4-fetch.
//!
//! This crate turns a url plus [`RequestOptions`] into a signed
//! `http::Request` following the
//! [AWS Signature Version 4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
//! header based scheme.
//!
//! ## Overview
//!
//! - [`normalize`] resolves credentials and produces a [`RequestDescriptor`]
//! - [`RequestSigner`] computes the signature and adds the auth headers
//! - [`AwsHost`] infers service and region from AWS endpoint hosts
//!
//! ## Example
//!
//! ```no_run
//! use sigv4_fetch_aws_v4::{normalize, RequestOptions};
//! use sigv4_fetch_core::{Context, OsEnv, Result, SignRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let options = RequestOptions::new()
//!         .with_method("POST")
//!         .with_header("Content-Type", "application/json")
//!         .with_body(r#"{"key":"value"}"#);
//!
//!     let (descriptor, credential) =
//!         normalize(&ctx, "https://abc123.execute-api.eu-central-1.amazonaws.com/prod", &options)
//!             .await?;
//!     let signer = descriptor.signer();
//!     let (mut parts, body) = descriptor.into_request()?.into_parts();
//!     signer.sign_request(&mut parts, Some(&body), &credential)?;
//!
//!     println!("authorization: {:?}", parts.headers.get("authorization"));
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::AwsHost;

mod descriptor;
pub use descriptor::{normalize, RequestDescriptor, RequestOptions};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
