//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use daihon::{Feature, GenerationSettings, ParameterRecord};
use std::io::Read;
use std::path::PathBuf;

/// Daihon - Japanese story, script and storyboard drafting with Gemini
#[derive(Parser, Debug)]
#[command(name = "daihon")]
#[command(about = "Japanese story, script and storyboard drafting with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Extra configuration file, applied over daihon.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model override for every request
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Sampling temperature for every request
    #[arg(long, global = true)]
    pub temperature: Option<f32>,

    /// Output token limit for every request
    #[arg(long, global = true)]
    pub max_output_tokens: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    /// Per-request overrides taken from the global flags.
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a plot outline
    Plot(PlotArgs),
    /// Turn a plot into a script
    Script(ScriptArgs),
    /// Check a text for typos and wording problems
    Proofread(ProofreadArgs),
    /// Create a 2ch-thread style video plot
    Video(VideoArgs),
    /// Lay out a manga/anime storyboard
    Storyboard(StoryboardArgs),
    /// Critique a manuscript
    Critique(CritiqueArgs),
    /// List templates and their option values
    Templates,
    /// Interactive session with history, regeneration and export
    Studio,
}

impl Commands {
    /// The one-shot generation arguments, if this is a feature command.
    pub fn feature_args(&self) -> Option<&dyn FeatureArgs> {
        match self {
            Commands::Plot(args) => Some(args),
            Commands::Script(args) => Some(args),
            Commands::Proofread(args) => Some(args),
            Commands::Video(args) => Some(args),
            Commands::Storyboard(args) => Some(args),
            Commands::Critique(args) => Some(args),
            Commands::Templates | Commands::Studio => None,
        }
    }
}

/// Arguments of a one-shot generation command.
pub trait FeatureArgs: std::fmt::Debug {
    /// Feature the command runs.
    fn feature(&self) -> Feature;

    /// Parameter record built from the flags.
    ///
    /// Text values of `-` are read from stdin and `@PATH` from a file.
    fn record(&self) -> std::io::Result<ParameterRecord>;

    /// Output handling flags.
    fn output(&self) -> &OutputArgs;
}

/// Output handling shared by every feature command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Also write the result to DIR as generated_content_<timestamp>.txt
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Print the assembled prompt instead of calling the API
    #[arg(long)]
    pub dry_run: bool,
}

/// Plot creation flags.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Genre id or label (see `daihon templates`)
    #[arg(long)]
    pub genre: Option<String>,
    /// Working title
    #[arg(long)]
    pub title: Option<String>,
    /// Length class id or label
    #[arg(long)]
    pub format: Option<String>,
    /// Protagonist: age, personality, job, background
    #[arg(long)]
    pub protagonist: Option<String>,
    /// Era, place, society, special rules
    #[arg(long)]
    pub worldview: Option<String>,
    /// Theme or message of the work
    #[arg(long)]
    pub theme: Option<String>,
    /// Existing plot to refine
    #[arg(long)]
    pub existing_plot: Option<String>,
    /// Generation mode id or label
    #[arg(long)]
    pub mode: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for PlotArgs {
    fn feature(&self) -> Feature {
        Feature::Plot
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new();
        put(&mut record, "genre", &self.genre);
        put(&mut record, "title", &self.title);
        put(&mut record, "format", &self.format);
        put(&mut record, "protagonist", &self.protagonist);
        put(&mut record, "worldview", &self.worldview);
        put(&mut record, "theme", &self.theme);
        put_body(&mut record, "existing_plot", &self.existing_plot)?;
        put(&mut record, "mode", &self.mode);
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// Script creation flags.
#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Plot text, `-` for stdin or `@PATH`
    pub plot: String,
    /// Script format id or label
    #[arg(long)]
    pub format: Option<String>,
    /// Generation mode id or label
    #[arg(long)]
    pub mode: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for ScriptArgs {
    fn feature(&self) -> Feature {
        Feature::Script
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new().with("plot", read_body(&self.plot)?);
        put(&mut record, "format", &self.format);
        put(&mut record, "mode", &self.mode);
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// Proofreading flags.
#[derive(Args, Debug, Clone)]
pub struct ProofreadArgs {
    /// Text to check, `-` for stdin or `@PATH`
    pub text: String,
    /// Check level id or label
    #[arg(long)]
    pub level: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for ProofreadArgs {
    fn feature(&self) -> Feature {
        Feature::Proofread
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new().with("text", read_body(&self.text)?);
        put(&mut record, "level", &self.level);
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// 2ch-style video flags.
#[derive(Args, Debug, Clone)]
pub struct VideoArgs {
    /// Video theme
    pub theme: String,
    /// Thread style id or label
    #[arg(long)]
    pub style: Option<String>,
    /// Video length id or label
    #[arg(long)]
    pub length: Option<String>,
    /// Generation mode id or label
    #[arg(long)]
    pub mode: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for VideoArgs {
    fn feature(&self) -> Feature {
        Feature::ThemedVideo
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new().with("theme", self.theme.as_str());
        put(&mut record, "style", &self.style);
        put(&mut record, "length", &self.length);
        put(&mut record, "mode", &self.mode);
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// Storyboard flags.
#[derive(Args, Debug, Clone)]
pub struct StoryboardArgs {
    /// Story summary, `-` for stdin or `@PATH`
    pub story: String,
    /// Page count, 1 to 200
    #[arg(long, allow_negative_numbers = true)]
    pub pages: Option<i64>,
    /// Storyboard format id or label
    #[arg(long)]
    pub format: Option<String>,
    /// Generation mode id or label
    #[arg(long)]
    pub mode: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for StoryboardArgs {
    fn feature(&self) -> Feature {
        Feature::Storyboard
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new().with("story", read_body(&self.story)?);
        if let Some(pages) = self.pages {
            record.insert("pages", pages);
        }
        put(&mut record, "format", &self.format);
        put(&mut record, "mode", &self.mode);
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// Critique flags.
#[derive(Args, Debug, Clone)]
pub struct CritiqueArgs {
    /// Manuscript, `-` for stdin or `@PATH`
    pub text: String,
    /// Focus id or label
    #[arg(long)]
    pub focus: Option<String>,
    /// Viewpoint id or label
    #[arg(long)]
    pub viewpoint: Option<String>,
    /// Also ask for a rewritten sample passage
    #[arg(long)]
    pub rewrite: bool,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl FeatureArgs for CritiqueArgs {
    fn feature(&self) -> Feature {
        Feature::Critique
    }

    fn record(&self) -> std::io::Result<ParameterRecord> {
        let mut record = ParameterRecord::new().with("text", read_body(&self.text)?);
        put(&mut record, "focus", &self.focus);
        put(&mut record, "viewpoint", &self.viewpoint);
        if self.rewrite {
            record.insert("with_rewrite", true);
        }
        Ok(record)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

fn put(record: &mut ParameterRecord, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        record.insert(key, value.as_str());
    }
}

fn put_body(record: &mut ParameterRecord, key: &str, value: &Option<String>) -> std::io::Result<()> {
    if let Some(value) = value {
        record.insert(key, read_body(value)?);
    }
    Ok(())
}

/// Resolve `-` (stdin) and `@PATH` (file); anything else is taken verbatim.
fn read_body(value: &str) -> std::io::Result<String> {
    if value == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else if let Some(path) = value.strip_prefix('@') {
        std::fs::read_to_string(path)
    } else {
        Ok(value.to_string())
    }
}
