mod chain;
pub use chain::ProvideCredentialChain;

mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

#[path = "static.rs"]
mod static_;
pub use static_::StaticCredentialProvider;
