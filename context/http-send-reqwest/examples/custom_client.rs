use anyhow::Result;
use reqwest::Client;
use sigv4_fetch_aws_v4::{normalize, RequestOptions};
use sigv4_fetch_core::{Context, OsEnv, SignRequest};
use sigv4_fetch_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Timeouts and pooling belong to the client, signing never retries.
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .user_agent("sigv4-fetch-example/1.0")
        .build()?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv);

    let url = "https://sts.amazonaws.com/?Action=GetCallerIdentity&Version=2011-06-15";
    let (descriptor, credential) = normalize(&ctx, url, &RequestOptions::new()).await?;
    let signer = descriptor.signer();
    let (mut parts, body) = descriptor.into_request()?.into_parts();
    signer.sign_request(&mut parts, Some(&body), &credential)?;

    // The user agent is added by the client and stays out of the signature.
    let resp = ctx
        .http_send(http::Request::from_parts(parts, body))
        .await?;

    println!("Response status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
