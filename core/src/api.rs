use crate::{Context, Result};
use http::request::Parts;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used to load the credential from explicit
/// input or the environment.
///
/// Returning `Ok(None)` means this provider has nothing to offer and the
/// next provider (if any) should be tried.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used to sign a request.
///
/// Signing is a pure computation over the request, its body and the
/// credential: implementations perform no I/O and keep no state between
/// calls.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place by adding the authentication headers.
    ///
    /// ## Body
    ///
    /// The `body` is the payload that will be sent along with `req`, it is
    /// not modified but may be hashed into the signature.
    fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: &Self::Credential,
    ) -> Result<()>;
}
