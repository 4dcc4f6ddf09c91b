//! Daihon CLI binary.
//!
//! This binary provides command-line access to daihon:
//! - One-shot generation for each feature (plot, script, proofread, ...)
//! - An interactive studio with history, regeneration and export

use clap::Parser;
use daihon::{DaihonConfig, DaihonError, GeminiFactory, LoggingConfig, Notice, Studio, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the key can come from the environment or --api-key
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(e) = init_logging(&LoggingConfig::new(cli.verbose, cli.json_logs)) {
        eprintln!("{}", Notice::from(&e));
        return ExitCode::FAILURE;
    }

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<DaihonError>() {
                Some(error) => eprintln!("{}", Notice::from(error)),
                None => eprintln!("{}", Notice::Error(e.to_string())),
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Commands, Console, list_templates, run_once, run_studio};

    let config = DaihonConfig::load(cli.config.as_deref())?;
    tracing::debug!(model = %config.gemini().model(), "Configuration loaded");

    if let Some(args) = cli.command.feature_args() {
        return run_once(cli, &config, args).await;
    }

    match cli.command {
        Commands::Templates => list_templates(&mut std::io::stdout().lock())?,
        Commands::Studio => {
            let mut studio =
                Studio::new(GeminiFactory::new(config.gemini().clone()), cli.settings());
            if let Some(key) = cli.api_key.as_deref() {
                eprintln!("{}", studio.connect(key).await);
            }
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut console = Console::new(input, std::io::stdout());
            run_studio(&mut studio, config.session(), &mut console).await?;
        }
        _ => {}
    }
    Ok(())
}
