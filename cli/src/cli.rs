use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use qrstudio_business::{ErrorCorrectionLevel, MAX_MARGIN};

#[derive(Parser)]
#[command(name = "qrstudio-cli")]
#[command(about = "Generate styled QR codes from text or links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the input and write a styled QR code PNG
    Generate(GenerateArgs),
    /// Only ask for styling suggestions and print them
    Analyze {
        /// Text or URL to analyze, `-` to read stdin
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Gemini model to use
        #[arg(long, env = "GEMINI_MODEL")]
        model: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text or URL to encode, `-` to read stdin
    pub text: String,

    /// Output file, defaults to a name derived from the label
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Skip analysis and use the default styling
    #[arg(long)]
    pub no_ai: bool,

    /// Gemini model to use
    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,

    /// Override the label
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Override the foreground color (#RRGGBB)
    #[arg(long)]
    pub primary: Option<String>,

    /// Override the background color (#RRGGBB)
    #[arg(long)]
    pub secondary: Option<String>,

    /// Error-correction level: L, M, Q or H
    #[arg(long, default_value_t = ErrorCorrectionLevel::M)]
    pub level: ErrorCorrectionLevel,

    /// Quiet zone width in modules
    #[arg(
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_MARGIN))
    )]
    pub margin: u32,

    /// Target image size in pixels
    #[arg(long, default_value_t = qrstudio_business::EXPORT_SIZE_PX)]
    pub size: u32,

    /// Also copy the image to the clipboard
    #[arg(long, short = 'c')]
    pub copy: bool,

    /// Print the final settings as JSON
    #[arg(long)]
    pub json: bool,
}
