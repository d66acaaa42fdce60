use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server utilities for testing the Groq completion client
pub struct GroqMockServer {
    server: MockServer,
}

impl GroqMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Completion endpoint URL on the mock server
    pub fn completions_url(&self) -> String {
        format!("{}/openai/v1/chat/completions", self.server.uri())
    }

    /// Mock a successful completion for requests matching the given fragment
    pub async fn mock_completion_success(
        &self,
        request_fragment: serde_json::Value,
        response_content: &str,
    ) {
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(request_fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "llama-3.3-70b-versatile",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream failure with the given status and body text
    pub async fn mock_completion_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a well-formed response carrying no choices
    pub async fn mock_empty_choices(&self) {
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test456",
                "object": "chat.completion",
                "choices": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not valid JSON
    pub async fn mock_malformed_body(&self) {
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&self.server)
            .await;
    }
}
