use anyhow::Result;
use sigv4_fetch::{Credential, Fetcher, RequestOptions};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://sts.amazonaws.com/?Action=GetCallerIdentity&Version=2011-06-15".to_string());

    // Without explicit credentials AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY are used.
    let mut options = RequestOptions::new().with_header("Accept", "application/json");
    if let (Ok(ak), Ok(sk)) = (
        std::env::var("EXAMPLE_ACCESS_KEY_ID"),
        std::env::var("EXAMPLE_SECRET_ACCESS_KEY"),
    ) {
        options = options.with_credentials(Credential::new(ak, sk));
    }

    let fetcher = Fetcher::new(sigv4_fetch::default_context());
    let resp = fetcher.fetch(&url, options).await?;

    println!("Response status: {}", resp.status());
    println!("{}", resp.text()?);
    Ok(())
}
