//! Parse AWS endpoint hosts into service and region.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<service>.(<region>.)?amazonaws.com(.cn)?`, anchored at the end of host.
static AWS_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^.]{1,63})\.(?:([^.]{0,63})\.)?amazonaws\.com(\.cn)?$")
        .expect("aws host pattern must be valid")
});

/// AwsHost is the structured result of matching a host against the AWS
/// endpoint naming convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsHost {
    /// Whether the host looks like an AWS endpoint.
    pub is_aws_host: bool,
    /// Service inferred from the host, if any.
    pub service: Option<String>,
    /// Region inferred from the host, if any.
    pub region: Option<String>,
}

impl AwsHost {
    /// Parse given host (with or without port).
    ///
    /// The first label before `amazonaws.com` is the service and the optional
    /// middle label is the region, with the following AWS quirks applied:
    ///
    /// - `<domain>.<region>.es.amazonaws.com` (and `aoss`) lists the region first.
    /// - `<bucket>.s3.amazonaws.com` is the global S3 endpoint in `us-east-1`.
    /// - `s3-<region>.amazonaws.com` is the legacy dash style S3 endpoint.
    /// - `email` endpoints sign for the `ses` service.
    pub fn parse(host: &str) -> Self {
        let Some(caps) = AWS_HOST.captures(strip_port(host)) else {
            return Self::default();
        };

        let mut service = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let mut region = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        if region == "es" || region == "aoss" {
            (service, region) = (region, service);
        }

        if region == "s3" {
            service = "s3";
            region = "us-east-1";
        } else if let Some(legacy) = [service, region]
            .into_iter()
            .find_map(|label| label.strip_prefix("s3-"))
        {
            service = "s3";
            region = legacy;
        }

        if service == "email" {
            service = "ses";
        }

        Self {
            is_aws_host: true,
            service: Some(service.to_string()).filter(|v| !v.is_empty()),
            region: Some(region.to_string()).filter(|v| !v.is_empty()),
        }
    }
}

/// Remove the `:port` suffix from an authority, keeping IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((h, port)) if !h.is_empty() && !port.contains(']') => h,
        _ => host,
    }
}
