use crate::Credential;
use async_trait::async_trait;
use sigv4_fetch_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider always hands out the credential it was built with.
///
/// It backs the explicit `credentials` option of a request, the environment
/// is never consulted.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider from an access key id and secret access key.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Credential::new(access_key_id, secret_access_key).into()
    }

    /// Attach a session token to the provided credential.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.credential = self.credential.with_session_token(token);
        self
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
