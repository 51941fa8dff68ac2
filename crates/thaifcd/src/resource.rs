// ABOUTME: HTTP fetch layer for relay requests with content-length limits and charset decoding.
// ABOUTME: Upstream pages can arrive as windows-874 rather than UTF-8, so decoding sniffs charsets.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::ClientError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body to text using the response charset, detecting one
    /// when the header does not name it.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using the content-type charset or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a resource from the given URL.
///
/// Any non-2xx status is an error; the relay is expected to answer with the
/// upstream markup or fail outright, and there is no fallback content worth
/// reading out of an error page.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<FetchResult, ClientError> {
    let mut request = client.get(url);
    for (key, value) in headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::timeout(url, "Fetch", Some(anyhow::anyhow!("request timed out: {}", e)))
        } else {
            ClientError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        }
    })?;

    let content_length = response.content_length().or_else(|| {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
    });
    if let Some(len) = content_length {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ClientError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::timeout(
                url,
                "Fetch",
                Some(anyhow::anyhow!("timed out reading body: {}", e)),
            )
        } else {
            ClientError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            )
        }
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ClientError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    if !(200..300).contains(&status) {
        return Err(ClientError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status)),
        ));
    }

    Ok(FetchResult {
        status,
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
