//! Core components for sending SigV4 signed requests.
//!
//! This crate provides the foundational types and traits shared by the
//! sigv4-fetch crates. It does not know about any service: the AWS specific
//! logic lives in `sigv4-fetch-aws-v4`, the transport in
//! `sigv4-fetch-http-send-reqwest`.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Error**: A single error type with an [`ErrorKind`] that callers can match on
//!
//! ## Example
//!
//! ```no_run
//! use sigv4_fetch_core::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx.env_var("MY_KEY").map(|key| MyCredential { key }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         req: &mut Parts,
//!         _body: Option<&[u8]>,
//!         cred: &Self::Credential,
//!     ) -> Result<()> {
//!         req.headers.insert("x-api-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
mod http;
pub use http::HttpSend;
mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::SigningRequest;
