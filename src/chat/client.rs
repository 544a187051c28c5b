use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::future::Future;

use super::error::ChatError;
use crate::transcript::Speaker;

/// One prior or new turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Speaker,
    pub text: String,
}

/// Everything the text-generation service needs for one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system_instruction: String,
    /// Prior turns followed by the new user message.
    pub turns: Vec<ChatTurn>,
}

/// A text-generation backend.
///
/// `Ok(None)` means the service answered without any text.
pub trait ChatTransport: Send + Sync {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<Option<String>, ChatError>> + Send;
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl OpenAiClient {
    /// Creates a client for `endpoint` using `model`.
    ///
    /// `api_key_env` names the variable the key should have come from; it only
    /// appears in the missing-key error.
    pub fn new(
        endpoint: String,
        model: String,
        api_key: Option<String>,
        api_key_env: String,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
            api_key_env,
        }
    }

    /// Full URL of the chat completions route.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl ChatTransport for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ChatError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })?;

        let url = self.completions_url();

        let mut messages = Vec::with_capacity(request.turns.len() + 1);
        messages.push(Message {
            role: "system",
            content: Cow::Borrowed(&request.system_instruction),
        });
        messages.extend(request.turns.iter().map(|turn| Message {
            role: turn.role.as_role(),
            content: Cow::Borrowed(&turn.text),
        }));

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        tracing::debug!(
            %url,
            model = %self.model,
            turns = request.turns.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ChatError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status { status, body });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(ChatError::Decode)?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ChatRequest {
        ChatRequest {
            system_instruction: "be brutal".to_string(),
            turns: vec![
                ChatTurn {
                    role: Speaker::Assistant,
                    text: "Hey!".to_string(),
                },
                ChatTurn {
                    role: Speaker::User,
                    text: "Who are you?".to_string(),
                },
            ],
        }
    }

    fn client(endpoint: String, api_key: Option<&str>) -> OpenAiClient {
        OpenAiClient::new(
            endpoint,
            "test-model".to_string(),
            api_key.map(ToString::to_string),
            "API_KEY".to_string(),
        )
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let client = client("http://localhost:8080/".to_string(), None);
        assert_eq!(
            client.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete_sends_history_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(serde_json::json!({
                "model": "test-model",
                "stream": false,
                "messages": [
                    {"role": "system", "content": "be brutal"},
                    {"role": "assistant", "content": "Hey!"},
                    {"role": "user", "content": "Who are you?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "A portfolio."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(server.uri(), Some("secret"))
            .complete(&request())
            .await
            .unwrap();

        assert_eq!(reply, Some("A portfolio.".to_string()));
    }

    #[tokio::test]
    async fn test_complete_without_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let reply = client(server.uri(), Some("secret"))
            .complete(&request())
            .await
            .unwrap();

        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_complete_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let err = client(server.uri(), Some("secret"))
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Status { .. }));
        assert!(err.to_string().contains("invalid key"));
    }

    #[tokio::test]
    async fn test_complete_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(server.uri(), Some("secret"))
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Decode(_)));
    }

    #[tokio::test]
    async fn test_complete_missing_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(server.uri(), None)
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::MissingApiKey { .. }));
    }

    #[tokio::test]
    async fn test_complete_connection_refused() {
        // Reserve a free port, then release it so nothing is listening there
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = client(format!("http://127.0.0.1:{port}"), Some("secret"))
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Connect { .. }));
    }
}
