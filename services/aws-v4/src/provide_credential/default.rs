use crate::provide_credential::{
    EnvCredentialProvider, ProvideCredentialChain, StaticCredentialProvider,
};
use crate::Credential;
use async_trait::async_trait;
use sigv4_fetch_core::{Context, ProvideCredential, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Explicit credential given by the caller (see [`DefaultCredentialProvider::with_credential`])
/// 2. Environment variables `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
///
/// An explicit credential that misses either key falls through to the
/// environment.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance reading the environment only.
    pub fn new() -> Self {
        Self::with_credential(None)
    }

    /// Create a provider that prefers the given explicit credential over the environment.
    pub fn with_credential(credential: Option<Credential>) -> Self {
        let mut chain = ProvideCredentialChain::new();
        if let Some(credential) = credential {
            chain = chain.push(StaticCredentialProvider::from(credential));
        }

        Self {
            chain: chain.push(EnvCredentialProvider::new()),
        }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
