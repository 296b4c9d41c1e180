use crate::errors::ProxyError;
use crate::models::GeminiPayload;
use serde_json::Value;
use std::time::Duration;

// Outbound side of the proxy - one timed POST per inbound request, no retries
pub struct Gateway {
    client: reqwest::Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl Gateway {
    pub fn new(url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
            timeout,
        }
    }

    // Success returns the upstream JSON body verbatim. Failures are normalized
    // into the error taxonomy; transport errors are stripped of the request URL
    // so the key query parameter never leaks into a message or log line.
    pub async fn call(&self, payload: &GeminiPayload) -> Result<Value, ProxyError> {
        let result = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(ProxyError::Timeout(self.timeout)),
            Err(e) => return Err(ProxyError::Transport(e.without_url().to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            let details = response.json::<Value>().await.ok();
            let message = details
                .as_ref()
                .and_then(|body| body.pointer("/error/message"))
                .and_then(Value::as_str)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("upstream error"))
                .to_string();
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                message,
                details,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProxyError::Transport(e.without_url().to_string()))
    }
}
