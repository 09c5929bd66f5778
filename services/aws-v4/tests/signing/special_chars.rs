use super::{authorization, sign};
use anyhow::Result;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use sigv4_fetch_aws_v4::RequestOptions;

#[tokio::test]
async fn test_s3_object_with_encoded_characters() -> Result<()> {
    let parts = sign(
        "https://mybucket.s3.amazonaws.com/test%20file.txt",
        RequestOptions::new(),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/s3/aws4_request, SignedHeaders=host;x-amz-content-sha256;x-amz-date, Signature=445d9935d5c5de681e5cba82e0e7871fb9b9cc49da72a63b56eef7c0abd611ce"
    );
    Ok(())
}

#[tokio::test]
async fn test_path_normalized_and_query_sorted() -> Result<()> {
    let parts = sign(
        "http://example.site/a%20b/./c//d?b=2&a=1&a=0",
        RequestOptions::new(),
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=b8dfa31c3c0720979f54edf356be11952f8f7c388401df5fb6afdf73b191d4a8"
    );
    // The target url is sent exactly as given.
    assert_eq!(
        parts.uri.to_string(),
        "http://example.site/a%20b/./c//d?b=2&a=1&a=0"
    );
    Ok(())
}

#[tokio::test]
async fn test_object_with_special_and_unicode_characters() -> Result<()> {
    let cases = [
        (
            "!@#$%^&*()_+-=;:'><,/?.txt",
            "40ad5c282cf8f5c917374bbab817284c5197e9ef61647decee55d9088b937702",
        ),
        (
            "文件名.txt",
            "85d7582fc47ea74252da6acdb744e7e3293df07faed8cb4d0b82a5478e3c064f",
        ),
    ];

    for (name, signature) in cases {
        let url = format!(
            "https://mybucket.s3.us-west-2.amazonaws.com/{}",
            utf8_percent_encode(name, NON_ALPHANUMERIC)
        );

        let parts = sign(&url, RequestOptions::new().with_method("HEAD")).await?;
        assert_eq!(
            authorization(&parts),
            format!("AWS4-HMAC-SHA256 Credential=AWS_ACCESS_KEY_ID/20191231/us-west-2/s3/aws4_request, SignedHeaders=host;x-amz-content-sha256;x-amz-date, Signature={signature}"),
            "object: {name}"
        );
    }
    Ok(())
}
