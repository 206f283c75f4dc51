//! HTTP client for the Gemini generateContent endpoint

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::clients::traits::SentimentAnalyzer;
use crate::config::GeminiConfig;
use crate::error::{EmofindError, Result};
use crate::prompts;
use crate::schemas::SentimentAnalysis;

const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Gemini-backed implementation of [`SentimentAnalyzer`].
///
/// One outbound request per `analyze` call; no retries, no streaming.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(EmofindError::Config {
                message: "Gemini API key is empty".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EmofindError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SentimentAnalyzer for GeminiClient {
    async fn analyze(&self, input_text: &str) -> Result<SentimentAnalysis> {
        let input = input_text.trim();
        if input.is_empty() {
            return Err(EmofindError::Validation {
                message: "input text is empty".to_string(),
            });
        }

        let prompt = prompts::sentiment_prompt(input);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        tracing::debug!(
            "Requesting sentiment analysis (model={}, chars={})",
            self.config.model,
            input.len()
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(EmofindError::Transport {
                message: format!(
                    "Gemini returned {}: {}",
                    status,
                    truncate_chars(body_text.trim(), BODY_SNIPPET_CHARS)
                ),
            });
        }

        let envelope = resp.text().await?;
        let v: Value = serde_json::from_str(&envelope).map_err(|e| {
            tracing::debug!("Unparseable Gemini envelope: {}", e);
            EmofindError::ResponseFormat {
                message: format!("unparseable API response: {}", e),
            }
        })?;

        let reply = v["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("");
        if reply.trim().is_empty() {
            return Err(EmofindError::ResponseFormat {
                message: "empty model response".to_string(),
            });
        }

        parse_sentiment(reply)
    }
}

/// Strip a leading/trailing markdown code fence from a model reply.
///
/// Gemini sometimes wraps the JSON in ```json fences despite the prompt;
/// a bare ``` fence is accepted too. Stripping is idempotent.
pub fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse a model reply into a validated [`SentimentAnalysis`].
///
/// Never returns a partial result: a reply that parses but is missing any
/// of the three keys (or carries an empty value) is a `ResponseFormat`
/// failure.
pub fn parse_sentiment(reply: &str) -> Result<SentimentAnalysis> {
    let cleaned = strip_code_fences(reply);
    let v: Value = serde_json::from_str(cleaned).map_err(|e| {
        tracing::debug!("Unparseable model reply: {}", truncate_chars(cleaned, 200));
        EmofindError::ResponseFormat {
            message: format!("unparseable model reply: {}", e),
        }
    })?;

    let field = |key: &str| -> Result<String> {
        match v.get(key).and_then(|x| x.as_str()) {
            Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
            _ => Err(EmofindError::ResponseFormat {
                message: format!("model reply missing '{}'", key),
            }),
        }
    };

    Ok(SentimentAnalysis {
        emotion: field("emotion")?,
        diagnosis: field("diagnosis")?,
        recommendation: field("recommendation")?,
    })
}

fn truncate_chars(input: &str, max: usize) -> String {
    let mut out = String::new();
    for (idx, ch) in input.chars().enumerate() {
        if idx >= max {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    out
}
