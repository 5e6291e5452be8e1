use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};
use qrstudio_business::{
    AnalysisRunner, Analyzer, BusinessConfig, EXPORT_SIZE_PX, ExportError, GeminiAnalyzer,
    RenderError, Session, SubmitError, download_file_name, render_png, render_qr, write_png,
};
use qrstudio_clipboard::{ClipboardError, ClipboardImage, ClipboardProvider, MemoryClipboard};
use tokio::runtime::Handle;

use crate::utils::qr_texture::QrTexture;
use crate::utils::save_target::{DirectorySaveTarget, SaveTarget};

#[derive(Debug, thiserror::Error)]
enum OutputError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback for download and copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The main application state.
pub struct State {
    pub session: Session,
    pub runner: AnalysisRunner,
    pub clipboard: Arc<dyn ClipboardProvider>,
    pub save_target: Box<dyn SaveTarget>,
    /// Modal message, e.g. for empty input.
    pub notice: Option<String>,
    pub status_line: Option<StatusLine>,
    pub preview: QrTexture,
}

impl State {
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        runtime: Handle,
        clipboard: Arc<dyn ClipboardProvider>,
        save_target: Box<dyn SaveTarget>,
    ) -> Self {
        Self {
            session: Session::default(),
            runner: AnalysisRunner::new(analyzer, runtime),
            clipboard,
            save_target,
            notice: None,
            status_line: None,
            preview: QrTexture::default(),
        }
    }

    /// Gemini analyzer pointed at `base_url`, downloads written to `save_dir`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn test(base_url: String, save_dir: PathBuf, clipboard: Arc<MemoryClipboard>) -> Self {
        Self::new(
            Arc::new(GeminiAnalyzer::new(BusinessConfig::new(base_url))),
            Handle::current(),
            clipboard,
            Box::new(DirectorySaveTarget::new(save_dir)),
        )
    }

    /// Applies finished analyses. Call once per frame.
    pub fn poll(&mut self) -> bool {
        self.runner.poll(&mut self.session)
    }

    pub fn submit(&mut self) {
        self.status_line = None;
        match self.runner.submit(&mut self.session) {
            Ok(task) => debug!("Submitted {task}"),
            Err(SubmitError::EmptyInput) => {
                self.notice = Some(SubmitError::EmptyInput.to_string());
            }
            Err(SubmitError::Busy) => debug!("Submit ignored while analyzing"),
        }
    }

    pub fn reset(&mut self) {
        self.runner.reset(&mut self.session);
        self.notice = None;
        self.status_line = None;
    }

    pub fn continue_anyway(&mut self) {
        self.session.continue_anyway();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Renders the current code and writes it where the save target says.
    pub fn download(&mut self) {
        let settings = self.session.settings();
        let file_name = download_file_name(&settings.label);

        let png = match render_png(settings, EXPORT_SIZE_PX) {
            Ok(png) => png,
            Err(e) => {
                self.report(Err(e.into()), "");
                return;
            }
        };
        let Some(path) = self.save_target.choose(&file_name) else {
            debug!("Download of {file_name} cancelled");
            return;
        };

        let result = write_png(&path, &png).map_err(OutputError::from);
        self.report(result, &format!("Saved {}", path.display()));
    }

    /// Renders the current code and puts the pixels on the clipboard.
    pub fn copy_image(&mut self) {
        let result = self.copy_to_clipboard();
        self.report(result, "Copied QR code to clipboard");
    }

    fn copy_to_clipboard(&self) -> Result<(), OutputError> {
        let img = render_qr(self.session.settings(), EXPORT_SIZE_PX)?;
        let (width, height) = img.dimensions();
        let image = ClipboardImage::from_rgba(width as usize, height as usize, img.into_raw())?;
        self.clipboard.set_image(&image)?;
        Ok(())
    }

    fn report(&mut self, result: Result<(), OutputError>, success: &str) {
        self.status_line = Some(match result {
            Ok(()) => {
                info!("{success}");
                StatusLine::info(success)
            }
            Err(e) => {
                warn!("Output failed: {e}");
                StatusLine::error(e.to_string())
            }
        });
    }
}
