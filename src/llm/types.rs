use serde::Deserialize;

/// One role-tagged message in a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Text of the first candidate, if the endpoint returned any.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessageContent,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageContent {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<ImageResult>,
}

impl ImageGenerationResponse {
    /// Remote reference of the first result, if the endpoint returned any.
    pub fn first_url(self) -> Option<String> {
        self.data.into_iter().next().map(|result| result.url)
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageResult {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_takes_the_first_choice() {
        let raw = r#"{
            "choices": [
                {"message": {"content": "alpha"}},
                {"message": {"content": "beta"}}
            ]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("alpha"));
    }

    #[test]
    fn first_text_is_none_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn first_text_is_none_when_content_missing() {
        let raw = r#"{"choices": [{"message": {}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn image_response_takes_the_first_result() {
        let raw = r#"{"data": [{"url": "https://img.example/one.png"}]}"#;
        let response: ImageGenerationResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.first_url().as_deref(),
            Some("https://img.example/one.png")
        );
    }
}
