use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result, bail, ensure};
use qrstudio_business::{
    AnalysisRunner, Analyzer, QrSettings, Session, SessionStatus, download_file_name, encode_png,
    is_hex_color, render_qr, write_png,
};
use qrstudio_clipboard::ClipboardProvider;
use tokio::runtime::Handle;
use tracing::{info, instrument};

use crate::cli::GenerateArgs;
use crate::output::Output;

/// What `generate` produced.
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub settings: QrSettings,
}

/// Runs one analysis for `text` and returns the session in `Ready`.
#[instrument(skip_all, name = "analysis")]
async fn analyze(
    analyzer: Arc<dyn Analyzer>,
    text: String,
    settings: QrSettings,
) -> Result<Session> {
    let mut session = Session::new(settings);
    session.set_input(text);

    let mut runner = AnalysisRunner::new(analyzer, Handle::current());
    runner.submit(&mut session)?;
    runner.settle(&mut session).await;

    if let SessionStatus::Error { message } = session.session_status() {
        bail!("Analysis failed: {message}");
    }
    Ok(session)
}

#[instrument(skip_all, name = "generate")]
pub async fn run_generate(
    args: GenerateArgs,
    text: String,
    analyzer: Arc<dyn Analyzer>,
    clipboard: &dyn ClipboardProvider,
    out: &Output,
) -> Result<Generated> {
    for (flag, color) in [("--primary", &args.primary), ("--secondary", &args.secondary)] {
        if let Some(color) = color {
            ensure!(is_hex_color(color), "{flag} {color:?} is not a hex color");
        }
    }

    let initial = QrSettings {
        error_correction_level: args.level,
        margin: args.margin,
        ..QrSettings::default()
    };
    let mut session = analyze(analyzer, text, initial).await?;

    if let Some(label) = args.label {
        session.edit_label(label);
    }
    if let Some(color) = args.primary {
        session.edit_primary_color(color);
    }
    if let Some(color) = args.secondary {
        session.edit_secondary_color(color);
    }
    let settings = session.settings().clone();

    let img = render_qr(&settings, args.size).context("Failed to render QR code")?;
    let png = encode_png(&img)?;
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(download_file_name(&settings.label)));
    write_png(&path, &png)?;
    info!(path = %path.display(), bytes = png.len(), "wrote QR code");

    if args.json {
        out.print(serde_json::to_string_pretty(&settings)?);
    } else {
        out.settings(&settings);
    }
    out.success(format!(
        "Saved {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    ));

    if args.copy {
        clipboard.set_png(&png).context("Failed to copy to clipboard")?;
        out.success("Copied to clipboard");
    }

    Ok(Generated { path, settings })
}
