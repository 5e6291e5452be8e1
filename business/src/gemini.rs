//! [`Analyzer`] backed by the Gemini `generateContent` REST API.
//!
//! One request per call, no retry. Anything short of a well-formed, valid
//! reply is logged and replaced by [`AnalysisResult::fallback`], so this
//! analyzer never reports an [`AnalysisFailure`].

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::http::{HttpClient, HttpError};
use crate::{AnalysisFailure, AnalysisResult, Analyzer, BusinessConfig, prompt};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response envelope: {0}")]
    Envelope(serde_json::Error),
    #[error("Empty response from AI")]
    EmptyText,
    #[error("No JSON object in model output")]
    NoJson,
    #[error("Model output does not match the expected shape: {0}")]
    Shape(String),
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct GeminiAnalyzer {
    config: BusinessConfig,
    client: HttpClient,
}

impl GeminiAnalyzer {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            client: HttpClient::new(),
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    async fn request(&self, text: &str) -> Result<AnalysisResult, GeminiError> {
        let api_key = self.config.api_key().ok_or(GeminiError::MissingApiKey)?;
        let url = self.config.generate_content_url();

        debug!("Requesting analysis from {url}");
        let reply = self
            .client
            .post_json(
                &url,
                &[("x-goog-api-key", api_key)],
                &prompt::request_body(text),
            )
            .await?;

        if !reply.is_success() {
            return Err(GeminiError::Status {
                status: reply.status,
                body: reply.body_text(),
            });
        }

        let envelope: GenerateContentResponse = reply.decode().map_err(GeminiError::Envelope)?;
        parse_model_output(&envelope.text())
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisFailure> {
        match self.request(text).await {
            Ok(result) => {
                info!("Analysis succeeded with label {:?}", result.label);
                Ok(result)
            }
            Err(e) => {
                warn!("Could not interpret AI response, using fallback: {e}");
                Ok(AnalysisResult::fallback())
            }
        }
    }
}

/// Parses the model's text into a validated [`AnalysisResult`].
///
/// Accepts bare JSON as well as JSON wrapped in a code fence or prose.
pub fn parse_model_output(raw: &str) -> Result<AnalysisResult, GeminiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GeminiError::EmptyText);
    }

    let json = extract_json_object(trimmed).ok_or(GeminiError::NoJson)?;
    let result: AnalysisResult =
        serde_json::from_str(json).map_err(|e| GeminiError::Shape(e.to_string()))?;
    result.validate().map_err(GeminiError::Shape)?;
    Ok(result)
}

/// The outermost `{ ... }` span of `raw`.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}
