mod cli;
mod commands;
mod output;
mod timing;

use anyhow::Result;
use clap::Parser as _;
use qrstudio_clipboard::SystemClipboard;

use crate::cli::{Cli, Commands};
use crate::output::Output;
use crate::timing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.timing);

    let out = Output::new();
    match cli.command {
        Commands::Generate(args) => {
            let text = commands::read_text(&args.text)?;
            let analyzer = commands::analyzer(args.no_ai, args.model.as_deref())?;
            commands::run_generate(args, text, analyzer, &SystemClipboard::new(), &out).await?;
        }
        Commands::Analyze { text, json, model } => {
            let text = commands::read_text(&text)?;
            let analyzer = commands::analyzer(false, model.as_deref())?;
            commands::run_analyze(&text, analyzer.as_ref(), json, &out).await?;
        }
        Commands::Completions { shell } => commands::generate_completions(shell),
    }

    Ok(())
}
