mod special_chars;
mod standard;

use anyhow::Result;
use http::request::Parts;
use sigv4_fetch_aws_v4::{normalize, RequestOptions};
use sigv4_fetch_core::time::{parse_rfc3339, DateTime};
use sigv4_fetch_core::{Context, SignRequest, StaticEnv};
use std::collections::HashMap;

/// The clock every signing test runs at.
pub fn fixed_time() -> DateTime {
    parse_rfc3339("2019-12-31T23:00:00Z").expect("time must be valid")
}

/// Context whose environment carries the well known test credentials.
pub fn test_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            (
                "AWS_ACCESS_KEY_ID".to_string(),
                "AWS_ACCESS_KEY_ID".to_string(),
            ),
            (
                "AWS_SECRET_ACCESS_KEY".to_string(),
                "AWS_SECRET_ACCESS_KEY".to_string(),
            ),
        ]),
    })
}

/// Normalize and sign the request at [`fixed_time`], returning the signed parts.
pub async fn sign(url: &str, options: RequestOptions) -> Result<Parts> {
    let (descriptor, credential) = normalize(&test_context(), url, &options).await?;
    let signer = descriptor.signer().with_time(fixed_time());

    let (mut parts, body) = descriptor.into_request()?.into_parts();
    signer.sign_request(&mut parts, Some(&body), &credential)?;
    Ok(parts)
}

/// Authorization header of a signed request.
pub fn authorization(parts: &Parts) -> String {
    parts.headers[http::header::AUTHORIZATION]
        .to_str()
        .expect("authorization must be valid")
        .to_string()
}
