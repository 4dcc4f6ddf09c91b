//! One-shot generation and template listing.

use super::commands::{Cli, FeatureArgs};
use super::forms::{FieldKind, form};
use daihon::{
    DaihonConfig, FeatureParams, GeminiFactory, GenerationRecord, Studio, TemplateRegistry,
    UsageCounters, input_hint, render, validate,
};
use std::io::Write;
use tracing::{debug, instrument};

/// Run one feature command: validate, generate, print, optionally export.
///
/// The generated text goes to stdout; notices and statistics go to stderr.
#[instrument(skip_all, fields(feature = %args.feature()))]
pub async fn run_once(
    cli: &Cli,
    config: &DaihonConfig,
    args: &dyn FeatureArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = args.record()?;
    let params = FeatureParams::from_record(args.feature(), &record);

    if let Some(hint) = input_hint(&params) {
        eprintln!("{}", hint);
    }

    if args.output().dry_run {
        validate(&params)?;
        println!("{}", render(&params));
        return Ok(());
    }

    let mut studio = Studio::new(GeminiFactory::new(config.gemini().clone()), cli.settings());
    studio
        .set_credential(cli.api_key.as_deref().unwrap_or_default())
        .await?;

    let result = studio.generate(params, None).await?;
    debug!(sequence = result.sequence(), "Generation finished");
    println!("{}", result.text());
    eprintln!("{}", summary(&result, studio.state().usage()));

    if let Some(dir) = &args.output().export {
        let notice = studio.save(dir);
        eprintln!("{}", notice);
        if !notice.is_success() {
            return Err(notice.message().into());
        }
    }
    Ok(())
}

/// One-line statistics and token counters of a result.
pub fn summary(record: &GenerationRecord, usage: &UsageCounters) -> String {
    let stats = daihon::TextStats::of(record.text());
    let tokens = match record.tokens() {
        Some(tokens) => tokens.to_string(),
        None => "不明".to_string(),
    };
    format!(
        "📊 文字数: {} / 行数: {} / 段落数: {} | トークン: {} (セッション累計: {})",
        stats.characters(),
        stats.lines(),
        stats.paragraphs(),
        tokens,
        usage.cumulative_session_tokens()
    )
}

/// Print every template with the accepted option values.
pub fn list_templates(out: &mut impl Write) -> std::io::Result<()> {
    for info in TemplateRegistry::entries() {
        writeln!(out, "{} ({})", info.name(), info.feature().id())?;
        writeln!(out, "  {}", info.description())?;
        for field in form(*info.feature()) {
            if let FieldKind::Choice(options) = &field.kind {
                let values = options
                    .iter()
                    .map(|(id, label)| format!("{}={}", id, label))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "  --{}: {}", field.key.replace('_', "-"), values)?;
            }
        }
    }
    Ok(())
}
