//! Send AWS SigV4 signed HTTP requests without effort.
//!
//! `sigv4-fetch` resolves credentials, signs a request with
//! [AWS Signature Version 4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
//! and hands it to an HTTP transport, returning the response unchanged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sigv4_fetch::RequestOptions;
//!
//! #[tokio::main]
//! async fn main() -> sigv4_fetch::Result<()> {
//!     // Credentials come from AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY,
//!     // service and region from the host.
//!     let resp = sigv4_fetch::fetch(
//!         "https://abc123.execute-api.eu-central-1.amazonaws.com/prod/items",
//!         RequestOptions::new()
//!             .with_method("POST")
//!             .with_header("Content-Type", "application/json")
//!             .with_body(r#"{"key":"value"}"#),
//!     )
//!     .await?;
//!
//!     println!("{}: {}", resp.status(), resp.text()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transport
//!
//! [`Fetcher`] works on any [`Context`]: plug in another [`HttpSend`] or
//! [`Env`] to change how requests are sent or where credentials come from.
//!
//! ## Features
//!
//! - `default-context` (enabled by default): [`default_context`] and [`fetch`]
//!   using `reqwest` and the OS environment.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use sigv4_fetch_core::*;

/// AWS SigV4 signing building blocks.
pub mod aws {
    pub use sigv4_fetch_aws_v4::*;
}
pub use sigv4_fetch_aws_v4::{Credential, RequestOptions};

mod fetch;
#[cfg(feature = "default-context")]
pub use fetch::fetch;
pub use fetch::Fetcher;

mod response;
pub use response::Response;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
