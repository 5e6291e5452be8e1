//! Business logic for QR Studio: content analysis, the session state
//! machine, and turning settings into QR images.

mod analysis;
mod config;
mod export;
mod gemini;
pub mod http;
mod prompt;
mod render;
mod runner;
mod session;
mod settings;

pub use analysis::{AnalysisFailure, AnalysisResult, Analyzer, FallbackAnalyzer};
pub use config::{BusinessConfig, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_MODEL};
pub use export::{ExportError, download_file_name, slugify, write_png};
pub use gemini::{GeminiAnalyzer, GeminiError, parse_model_output};
pub use render::{
    EXPORT_SIZE_PX, PREVIEW_SIZE_PX, RenderError, encode_png, render_png, render_qr,
};
pub use runner::{AnalysisRunner, Outcome};
pub use session::{Session, SessionStatus, Status, SubmitError};
pub use settings::{
    ErrorCorrectionLevel, MAX_MARGIN, ParseLevelError, QrSettings, format_hex_color, is_hex_color,
    parse_hex_color,
};
