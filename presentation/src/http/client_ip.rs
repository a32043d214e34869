use axum::extract::{ConnectInfo, Request};
use std::net::SocketAddr;

/// Caller address recorded with the audit row.
///
/// First `X-Forwarded-For` entry when present, else the peer socket IP.
pub(crate) fn extract_client_ip(request: &Request) -> Option<String> {
    forwarded_for(request).or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip().to_string())
    })
}

fn forwarded_for(request: &Request) -> Option<String> {
    request
        .headers()
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}
