use sigv4_fetch_aws_v4::{DefaultCredentialProvider, EnvCredentialProvider};
use sigv4_fetch_core::{Context, OsEnv, ProvideCredential};

fn load<P: ProvideCredential>(provider: P) -> Option<P::Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime must build");
    let ctx = Context::new().with_env(OsEnv);
    rt.block_on(provider.provide_credential(&ctx))
        .expect("provider must not fail")
}

#[test]
fn test_env_credential_provider_reads_os_env() {
    temp_env::with_vars(
        [
            ("AWS_ACCESS_KEY_ID", Some("os_access_key")),
            ("AWS_SECRET_ACCESS_KEY", Some("os_secret_key")),
            ("AWS_SESSION_TOKEN", Some("ignored")),
        ],
        || {
            let cred = load(EnvCredentialProvider::new()).expect("credential must be loaded");
            assert_eq!(cred.access_key_id, "os_access_key");
            assert_eq!(cred.secret_access_key, "os_secret_key");
            assert!(cred.session_token.is_none());
        },
    );
}

#[test]
fn test_env_credential_provider_with_empty_values() {
    temp_env::with_vars(
        [
            ("AWS_ACCESS_KEY_ID", Some("")),
            ("AWS_SECRET_ACCESS_KEY", Some("os_secret_key")),
        ],
        || {
            assert!(load(EnvCredentialProvider::new()).is_none());
        },
    );
}

#[test]
fn test_default_provider_reads_env_per_call() {
    let provider = DefaultCredentialProvider::new();
    let ctx = Context::new().with_env(OsEnv);
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime must build");

    temp_env::with_vars_unset(["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"], || {
        let cred = rt
            .block_on(provider.provide_credential(&ctx))
            .expect("provider must not fail");
        assert!(cred.is_none());
    });

    temp_env::with_vars(
        [
            ("AWS_ACCESS_KEY_ID", Some("later_access_key")),
            ("AWS_SECRET_ACCESS_KEY", Some("later_secret_key")),
        ],
        || {
            let cred = rt
                .block_on(provider.provide_credential(&ctx))
                .expect("provider must not fail")
                .expect("credential must be loaded");
            assert_eq!(cred.access_key_id, "later_access_key");
        },
    );
}
