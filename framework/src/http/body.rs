//! Body parsing utilities for HTTP requests

use crate::error::FrameworkError;
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde::de::DeserializeOwned;

/// Collect the full body from an Incoming stream
pub async fn collect_body(body: Incoming) -> Result<Bytes, FrameworkError> {
    body.collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| FrameworkError::internal(format!("Failed to read request body: {}", e)))
}

/// Parse bytes as JSON into the target type
pub fn parse_json<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, FrameworkError> {
    serde_json::from_slice(bytes)
        .map_err(|e| FrameworkError::bad_body(format!("failed to parse JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_parse_json() {
        let bytes = Bytes::from_static(br#"{"name":"ada"}"#);
        let payload: Payload = parse_json(&bytes).unwrap();
        assert_eq!(
            payload,
            Payload {
                name: "ada".to_string()
            }
        );
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        let bytes = Bytes::from_static(b"not json");
        let err = parse_json::<Payload>(&bytes).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
