use anyhow::Result;
use sigv4_fetch_aws_v4::{normalize, RequestOptions};
use sigv4_fetch_core::{Context, OsEnv, SignRequest};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Credentials are read from AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY.
    let ctx = Context::new().with_env(OsEnv);

    // Service and region are inferred from the host.
    let options = RequestOptions::new()
        .with_method("POST")
        .with_header("Content-Type", "application/x-amz-json-1.0")
        .with_header("X-Amz-Target", "DynamoDB_20120810.ListTables")
        .with_body("{}");

    let (descriptor, credential) =
        normalize(&ctx, "https://dynamodb.us-east-1.amazonaws.com/", &options).await?;
    let signer = descriptor.signer();
    let (mut parts, body) = descriptor.into_request()?.into_parts();
    signer.sign_request(&mut parts, Some(&body), &credential)?;

    println!("{} {}", parts.method, parts.uri);
    for (name, value) in parts.headers.iter() {
        if value.is_sensitive() {
            println!("{name}: <redacted>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }
    Ok(())
}
