use anyhow::Result;
use qrstudio_business::{AnalysisResult, Analyzer};
use tracing::instrument;

use crate::output::Output;

#[instrument(skip_all, name = "analyze")]
pub async fn run_analyze(
    text: &str,
    analyzer: &dyn Analyzer,
    json: bool,
    out: &Output,
) -> Result<AnalysisResult> {
    let result = analyzer.analyze(text).await?;

    if json {
        out.print(serde_json::to_string_pretty(&result)?);
    } else {
        out.analysis(&result);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use qrstudio_business::{BusinessConfig, GeminiAnalyzer};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_analyze_returns_service_suggestion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{
                    "text": r##"{"label":"Contact Info","primaryColor":"#0A66C2","secondaryColor":"#FFFFFF","description":"Save the contact."}"##
                }]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let analyzer = GeminiAnalyzer::new(BusinessConfig::new(server.uri()));

        let result = run_analyze("BEGIN:VCARD", &analyzer, true, &Output::new())
            .await
            .expect("analysis succeeds");

        assert_eq!(result.label, "Contact Info");
        assert_eq!(result.primary_color, "#0A66C2");
    }
}
