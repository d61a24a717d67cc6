use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::common::LlmConfig;
use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::label_analysis::ports::LlmClient;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini text-generation adapter. Every call carries the full prompt; no
/// chat history is kept, so concurrent requests cannot bleed into each other.
#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiLlmClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

impl LlmClient for GeminiLlmClient {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("gemini request failed: {}", e);
                CoreError::ExternalService("language model request failed".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "gemini returned an error: {}", body);
            return Err(CoreError::ExternalService(format!(
                "language model returned status {status}"
            )));
        }

        let reply: GeminiResponse = response.json().await.map_err(|e| {
            error!("gemini response could not be decoded: {}", e);
            CoreError::ExternalService("language model response could not be decoded".to_string())
        })?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                CoreError::ExternalService("language model returned no candidates".to_string())
            })?;

        Ok(text)
    }
}
