//! Subcommand implementations.

mod analyze;
mod completions;
mod generate;

use std::io::Read as _;
use std::sync::Arc;

use anyhow::{Context as _, Result, ensure};
use qrstudio_business::{Analyzer, BusinessConfig, FallbackAnalyzer, GeminiAnalyzer};
use tracing::debug;

pub use analyze::run_analyze;
pub use completions::generate_completions;
pub use generate::run_generate;

/// Returns `arg`, or stdin when `arg` is `-`.
pub fn read_text(arg: &str) -> Result<String> {
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf.trim_end_matches(['\r', '\n']).to_owned()
    } else {
        arg.to_owned()
    };
    ensure!(!text.trim().is_empty(), "Please enter some text or a URL.");
    Ok(text)
}

/// The Gemini analyzer, or the offline one when `no_ai` is set.
pub fn analyzer(no_ai: bool, model: Option<&str>) -> Result<Arc<dyn Analyzer>> {
    if no_ai {
        debug!("Analysis disabled, using default styling");
        return Ok(Arc::new(FallbackAnalyzer));
    }

    let mut config = BusinessConfig::from_env().context("Failed to load configuration")?;
    if let Some(model) = model {
        config = config.with_model(model);
    }
    Ok(Arc::new(GeminiAnalyzer::new(config)))
}
