//! Content analysis contract shared by the real and the mock analyzers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::settings::is_hex_color;

/// Branding suggested for a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub label: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub description: String,
}

impl AnalysisResult {
    pub const FALLBACK_LABEL: &'static str = "Custom link";
    pub const FALLBACK_PRIMARY_COLOR: &'static str = "#1C2C5B";
    pub const FALLBACK_SECONDARY_COLOR: &'static str = "#FFFFFF";
    pub const FALLBACK_DESCRIPTION: &'static str = "Quick access to the provided information.";

    /// Fixed result used whenever the service gives nothing usable.
    pub fn fallback() -> Self {
        Self {
            label: Self::FALLBACK_LABEL.to_owned(),
            primary_color: Self::FALLBACK_PRIMARY_COLOR.to_owned(),
            secondary_color: Self::FALLBACK_SECONDARY_COLOR.to_owned(),
            description: Self::FALLBACK_DESCRIPTION.to_owned(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Checks the shape beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("label is empty".to_owned());
        }
        if !is_hex_color(&self.primary_color) {
            return Err(format!(
                "primaryColor {:?} is not a hex color",
                self.primary_color
            ));
        }
        if !is_hex_color(&self.secondary_color) {
            return Err(format!(
                "secondaryColor {:?} is not a hex color",
                self.secondary_color
            ));
        }
        Ok(())
    }
}

/// The analysis call itself did not complete.
///
/// Unusable service output is not a failure: analyzers substitute
/// [`AnalysisResult::fallback`] for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisFailure {
    #[error("Analysis was aborted before it produced a result")]
    Aborted,
    #[error("Analysis service failed: {0}")]
    Service(String),
}

/// Suggests branding for the text or URL a user wants to encode.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisFailure>;
}

/// Answers every request with [`AnalysisResult::fallback`] without going online.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAnalyzer;

#[async_trait]
impl Analyzer for FallbackAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<AnalysisResult, AnalysisFailure> {
        Ok(AnalysisResult::fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_the_fixed_constant() {
        let fallback = AnalysisResult::fallback();

        assert_eq!(fallback.label, "Custom link");
        assert_eq!(fallback.primary_color, "#1C2C5B");
        assert_eq!(fallback.secondary_color, "#FFFFFF");
        assert_eq!(
            fallback.description,
            "Quick access to the provided information."
        );
        assert!(fallback.is_fallback());
        assert!(fallback.validate().is_ok());
    }

    #[tokio::test]
    async fn fallback_analyzer_ignores_its_input() {
        for text in ["https://example.com", "anything at all"] {
            assert_eq!(
                FallbackAnalyzer.analyze(text).await,
                Ok(AnalysisResult::fallback())
            );
        }
    }

    #[test]
    fn deserializes_camel_case_and_rejects_missing_fields() {
        let parsed: AnalysisResult = serde_json::from_str(
            r##"{"label":"Official Site","primaryColor":"#112233","secondaryColor":"#FFFFFF","description":"x"}"##,
        )
        .expect("well-formed result should parse");
        assert_eq!(parsed.primary_color, "#112233");

        let missing = serde_json::from_str::<AnalysisResult>(r#"{"label":"Only label"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn validate_rejects_bad_colors_and_blank_labels() {
        let good = AnalysisResult {
            label: "Menu".to_owned(),
            primary_color: "#aa0000".to_owned(),
            secondary_color: "#fff".to_owned(),
            description: String::new(),
        };
        assert!(good.validate().is_ok());

        let blank = AnalysisResult {
            label: "  ".to_owned(),
            ..good.clone()
        };
        assert!(blank.validate().is_err());

        let named_color = AnalysisResult {
            primary_color: "navy".to_owned(),
            ..good.clone()
        };
        assert!(
            named_color
                .validate()
                .is_err_and(|e| e.contains("primaryColor"))
        );

        let bad_background = AnalysisResult {
            secondary_color: "#12".to_owned(),
            ..good
        };
        assert!(bad_background.validate().is_err());
    }
}
