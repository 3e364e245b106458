//! Per-request context
//!
//! A value object built once from the request head and the socket peer
//! address, then carried on the [`Request`](super::Request) wrapper. Nothing
//! here is read from ambient process state: handlers that need the base URL
//! or client IP take it from the context they were handed.

use std::net::{IpAddr, SocketAddr};

use http::header::HOST;
use http::{HeaderMap, Uri};

/// Request-scoped environment derived from headers and the peer address
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Scheme plus host, e.g. `https://api.example.com`
    pub base_url: String,
    /// Base URL plus the original request target (path and query)
    pub current_url: String,
    /// Best-effort client address, honoring proxy headers
    pub client_ip: IpAddr,
}

impl RequestContext {
    /// Build the context from the request head
    ///
    /// The scheme is `https` only when a proxy says so via
    /// `X-Forwarded-Proto`; the server itself terminates plain HTTP.
    pub fn from_parts(headers: &HeaderMap, uri: &Uri, remote_addr: SocketAddr) -> Self {
        let scheme = match header_str(headers, "x-forwarded-proto") {
            Some("https") => "https",
            _ => "http",
        };

        let host = headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| uri.authority().map(|a| a.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| remote_addr.to_string());

        let base_url = format!("{}://{}", scheme, host);

        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or(uri.path());
        let current_url = format!("{}{}", base_url, target);

        let client_ip = resolve_client_ip(headers, remote_addr);

        Self {
            base_url,
            current_url,
            client_ip,
        }
    }
}

/// Client-IP/X-Forwarded-For/peer-address cascade
///
/// Each candidate must parse as a real IP before it wins; a forward header
/// carrying garbage falls through to the next source.
fn resolve_client_ip(headers: &HeaderMap, remote_addr: SocketAddr) -> IpAddr {
    let client = header_str(headers, "client-ip").and_then(parse_ip);
    let forward = header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').find_map(|part| parse_ip(part)));

    client.or(forward).unwrap_or_else(|| remote_addr.ip())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn remote() -> SocketAddr {
        "203.0.113.9:51724".parse().unwrap()
    }

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                http::header::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_base_url_defaults_to_http() {
        let ctx = RequestContext::from_parts(
            &headers(&[("host", "example.com")]),
            &"/users?page=2".parse().unwrap(),
            remote(),
        );
        assert_eq!(ctx.base_url, "http://example.com");
        assert_eq!(ctx.current_url, "http://example.com/users?page=2");
    }

    #[test]
    fn test_forwarded_proto_switches_to_https() {
        let ctx = RequestContext::from_parts(
            &headers(&[("host", "example.com"), ("x-forwarded-proto", "https")]),
            &"/".parse().unwrap(),
            remote(),
        );
        assert_eq!(ctx.base_url, "https://example.com");
    }

    #[test]
    fn test_client_ip_header_wins() {
        let ctx = RequestContext::from_parts(
            &headers(&[
                ("host", "example.com"),
                ("client-ip", "198.51.100.4"),
                ("x-forwarded-for", "192.0.2.1"),
            ]),
            &"/".parse().unwrap(),
            remote(),
        );
        assert_eq!(ctx.client_ip, "198.51.100.4".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_for_takes_first_valid_entry() {
        let ctx = RequestContext::from_parts(
            &headers(&[
                ("host", "example.com"),
                ("x-forwarded-for", "unknown, 192.0.2.1, 10.0.0.1"),
            ]),
            &"/".parse().unwrap(),
            remote(),
        );
        assert_eq!(ctx.client_ip, "192.0.2.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_invalid_proxy_headers_fall_back_to_peer() {
        let ctx = RequestContext::from_parts(
            &headers(&[
                ("host", "example.com"),
                ("client-ip", "not-an-ip"),
                ("x-forwarded-for", "also-not-an-ip"),
            ]),
            &"/".parse().unwrap(),
            remote(),
        );
        assert_eq!(ctx.client_ip, remote().ip());
    }
}
