//! Client for the `/api/ask` endpoint

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::types::{AskError, AskRequest, AskResponse};

/// Something that can answer a query.
///
/// The browser build uses [`HttpBackend`]; tests plug in stubs.
#[async_trait(?Send)]
pub trait AskBackend {
    async fn ask(&self, query: &str) -> Result<String, AskError>;
}

/// POSTs queries as JSON to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl AskBackend for HttpBackend {
    async fn ask(&self, query: &str) -> Result<String, AskError> {
        let body = AskRequest {
            query: query.to_string(),
        };

        let req = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| AskError::Transport(format!("Failed to serialize request: {}", e)))?;

        let resp = req
            .send()
            .await
            .map_err(|e| AskError::Transport(format!("Network error: {}", e)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| AskError::Transport(format!("Failed to read response: {}", e)))?;

        tracing::debug!("POST {} -> {} ({} bytes)", self.endpoint, status, text.len());
        interpret_response(status, &text)
    }
}

/// Classify a raw `/api/ask` reply.
///
/// The body is parsed regardless of status, so `400 {"error": ...}` from the
/// backend's validation is an application error rather than a transport one.
pub fn interpret_response(status: u16, body: &str) -> Result<String, AskError> {
    let parsed: AskResponse = serde_json::from_str(body).map_err(|e| {
        AskError::Transport(format!("Failed to parse response (status {}): {}", status, e))
    })?;

    if parsed.is_error() {
        let detail = parsed
            .error
            .map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_default();
        return Err(AskError::Application(detail));
    }

    if !(200..300).contains(&status) {
        return Err(AskError::Transport(format!(
            "Request failed with status {}",
            status
        )));
    }

    match parsed.answer {
        Some(serde_json::Value::String(answer)) => Ok(answer),
        Some(other) => Err(AskError::Transport(format!(
            "Expected a string answer, got {}",
            other
        ))),
        None => Err(AskError::Transport(
            "Response carried neither answer nor error".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer() {
        assert_eq!(interpret_response(200, r#"{"answer":"hi"}"#), Ok("hi".to_string()));
    }

    #[test]
    fn test_error_flag_wins_over_answer() {
        let result = interpret_response(200, r#"{"answer":"hi","error":true}"#);
        assert_eq!(result, Err(AskError::Application("true".to_string())));
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        assert_eq!(
            interpret_response(200, r#"{"answer":"hi","error":null}"#),
            Ok("hi".to_string())
        );
        assert_eq!(
            interpret_response(200, r#"{"answer":"hi","error":""}"#),
            Ok("hi".to_string())
        );
    }

    #[test]
    fn test_error_body_on_client_error_status() {
        let result = interpret_response(429, r#"{"error":"Too many requests"}"#);
        assert_eq!(result, Err(AskError::Application("Too many requests".to_string())));
    }

    #[test]
    fn test_non_json_is_transport_error() {
        let result = interpret_response(502, "<html>Bad Gateway</html>");
        assert!(matches!(result, Err(AskError::Transport(_))));

        let result = interpret_response(200, "");
        assert!(matches!(result, Err(AskError::Transport(_))));
    }

    #[test]
    fn test_server_error_without_error_field() {
        let result = interpret_response(500, r#"{"answer":"stale"}"#);
        assert_eq!(
            result,
            Err(AskError::Transport("Request failed with status 500".to_string()))
        );
    }

    #[test]
    fn test_missing_answer_is_transport_error() {
        assert!(matches!(
            interpret_response(200, "{}"),
            Err(AskError::Transport(_))
        ));
        assert!(matches!(
            interpret_response(200, r#"{"answer":42}"#),
            Err(AskError::Transport(_))
        ));
    }

    #[test]
    fn test_error_flag_wins_over_malformed_answer() {
        assert_eq!(
            interpret_response(200, r#"{"error":true,"answer":42}"#),
            Err(AskError::Application("true".to_string()))
        );
        assert_eq!(
            interpret_response(500, r#"{"error":"boom","answer":null}"#),
            Err(AskError::Application("boom".to_string()))
        );
    }

    #[test]
    fn test_null_answer_is_transport_error() {
        assert!(matches!(
            interpret_response(200, r#"{"answer":null}"#),
            Err(AskError::Transport(_))
        ));
    }
}
