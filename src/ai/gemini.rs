//! Gemini `generateContent` 客户端

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextGenerator;
use crate::config::AiConfig;
use crate::errors::{LmsError, Result};

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiGenerator {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
        })
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.7,
            },
        }
    }

    /// 取出第一个候选的全部文本片段
    fn extract_text(body: &str) -> Result<String> {
        let response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
            LmsError::ai_generation(format!("error decoding Gemini response: {e}"))
        })?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LmsError::ai_generation("Gemini returned no content"));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let started = Instant::now();
        debug!("Sending prompt to Gemini ({} chars)", prompt.chars().count());

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LmsError::ai_generation(format!(
                "Gemini request failed with status {status}"
            )));
        }

        let text = Self::extract_text(&body)?;
        debug!(
            "Gemini responded in {} ms ({} chars)",
            started.elapsed().as_millis(),
            text.chars().count()
        );
        Ok(text)
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#;
        assert_eq!(GeminiGenerator::extract_text(body).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let err = GeminiGenerator::extract_text(r#"{"candidates":[]}"#).unwrap_err();
        assert!(err.message().contains("no content"));
    }

    #[test]
    fn test_extract_text_invalid_json() {
        assert!(GeminiGenerator::extract_text("<html>").is_err());
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        let generator = GeminiGenerator::new(&AiConfig {
            provider: "gemini".to_string(),
            api_key: "SECRET-GEMINI-KEY".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "http://127.0.0.1:1/v1beta".to_string(),
            timeout_secs: 2,
            default_language: "Arabic".to_string(),
        })
        .unwrap();

        let err = generator.generate("hi").await.unwrap_err();
        assert_eq!(err.code(), "E008");
        assert!(!err.message().contains("SECRET-GEMINI-KEY"));

        let resp = crate::services::error_response(&err);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("4000"));
        assert!(!body.contains("SECRET-GEMINI-KEY"));
    }

    #[test]
    fn test_request_serialization() {
        let json = serde_json::to_value(GeminiGenerator::build_request("hi")).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }
}
