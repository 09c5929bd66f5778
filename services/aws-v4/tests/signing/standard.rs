use super::{authorization, sign};
use anyhow::Result;
use pretty_assertions::assert_eq;
use sigv4_fetch_aws_v4::{Credential, RequestOptions};

#[tokio::test]
async fn test_get_with_env_credentials() -> Result<()> {
    let parts = sign("http://example.site", RequestOptions::new()).await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=ea8453bbe7f5f52a5e3d01c7acf5d6bda833ec4584ad6250f351f1ddc1f7d9c7"
    );
    assert_eq!(parts.headers["x-amz-date"], "20191231T230000Z");
    assert_eq!(parts.headers["host"], "example.site");
    Ok(())
}

#[tokio::test]
async fn test_get_with_explicit_credentials() -> Result<()> {
    let parts = sign(
        "http://example.site",
        RequestOptions::new().with_credentials(Credential::new("accessKeyId", "secretAccessKey")),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=accessKeyId/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=41e3d830e4192ae88ae70218cd8d45daa0e1ec79cb0fa10554753aaf12b485ad"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_with_query() -> Result<()> {
    let parts = sign("http://example.site?key=value", RequestOptions::new()).await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=2c9708ea532b175f52636fa513065219565610adb8595d6df762d63bcbddc651"
    );
    assert_eq!(parts.uri.to_string(), "http://example.site/?key=value");
    Ok(())
}

#[tokio::test]
async fn test_get_with_region() -> Result<()> {
    let parts = sign(
        "http://example.site",
        RequestOptions::new().with_region("eu-central-1"),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/eu-central-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=72463c524687e00a6c610012ee867220a8a57e656df5e8c7c2e68deb6a28567c"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_with_path_and_region() -> Result<()> {
    let parts = sign(
        "http://example.site/path",
        RequestOptions::new().with_region("eu-central-1"),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/eu-central-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=43a7c24059f2ed5fd75c2f828a2390a9e36dbce4ee749ac57debdf2e8674d7e5"
    );
    Ok(())
}

#[tokio::test]
async fn test_post_with_body() -> Result<()> {
    let parts = sign(
        "http://example.site",
        RequestOptions::new()
            .with_method("POST")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"key":"value"}"#)
            .with_region("eu-central-1"),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/eu-central-1/execute-api/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date, Signature=a9c694eb4f9e0e6f6dbf96998193f4d064c33c5692a180cc8d56a3f1e716bff8"
    );
    assert_eq!(parts.headers["content-length"], "15");
    assert_eq!(parts.headers["content-type"], "application/json");
    assert!(parts.headers.get("x-amz-content-sha256").is_none());
    Ok(())
}

#[tokio::test]
async fn test_post_to_s3() -> Result<()> {
    let parts = sign(
        "https://s3.us-west-2.amazonaws.com/mybucket/puppy.jpg",
        RequestOptions::new()
            .with_method("POST")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"key":"value"}"#),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-west-2/s3/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-content-sha256;x-amz-date, Signature=dbaf5c99c703c4f57f6d504a33fefa4acf50e7cf42b2d688f3ed7bb174d662c8"
    );
    assert_eq!(
        parts.headers["x-amz-content-sha256"],
        "e43abcf3375244839c012f9633f95862d232a95b00d5bc7348b3098b9fed7f32"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_with_session_token() -> Result<()> {
    let parts = sign(
        "http://example.site",
        RequestOptions::new().with_credentials(
            Credential::new("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY")
                .with_session_token("session-token"),
        ),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date;x-amz-security-token, Signature=1fb4cf9641b61ff0ee3a40df5aff0fe727f139fa1bcf5647399b45518c7b6c01"
    );
    assert_eq!(parts.headers["x-amz-security-token"], "session-token");
    Ok(())
}

#[tokio::test]
async fn test_host_keeps_port() -> Result<()> {
    let parts = sign("http://example.site:8080", RequestOptions::new()).await?;

    assert_eq!(parts.headers["host"], "example.site:8080");
    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=7ddcac60b1a49e3941c29f907eb3585490aa6491ca884e0bddee9c4226e4b6c1"
    );
    Ok(())
}

#[tokio::test]
async fn test_caller_headers_do_not_change_existing_signature() -> Result<()> {
    // Unsigned headers are sent as is and leave the signature untouched.
    let parts = sign(
        "http://example.site",
        RequestOptions::new()
            .with_header("User-Agent", "sigv4-fetch-test")
            .with_header("X-Amzn-Trace-Id", "Root=1-5e0bd2a0-abc"),
    )
    .await?;

    assert!(authorization(&parts)
        .ends_with("Signature=ea8453bbe7f5f52a5e3d01c7acf5d6bda833ec4584ad6250f351f1ddc1f7d9c7"));
    assert_eq!(parts.headers["user-agent"], "sigv4-fetch-test");
    Ok(())
}
