//! One generation call and its bookkeeping.

use crate::{GenerationSettings, SessionState};
use chrono::Local;
use daihon_core::{FeatureParams, GenerationRecord, ReplayState};
use daihon_error::{DaihonResult, InvocationError, InvocationErrorKind};
use daihon_interface::TextGenerator;
use tracing::{debug, info, instrument, warn};

/// Render, call the generator once, and record the outcome in `state`.
///
/// The replay state is stored before the call so a failed attempt can be
/// retried with the same parameters. On failure nothing else changes:
/// history, current result and counters keep their previous values.
///
/// A response without usage counts as zero tokens; its history record keeps
/// `tokens: None`.
///
/// # Errors
///
/// Whatever the generator reports, plus `InvocationError::EmptyResponse` when
/// the returned text is blank.
#[instrument(
    skip(generator, state, settings, params, label),
    fields(feature = %params.feature().id(), provider = generator.provider_name())
)]
pub async fn invoke<G>(
    generator: &G,
    state: &mut SessionState,
    settings: &GenerationSettings,
    params: FeatureParams,
    label: impl Into<String>,
) -> DaihonResult<GenerationRecord>
where
    G: TextGenerator + ?Sized,
{
    let label = label.into();
    let feature = params.feature();
    let prompt = daihon_prompts::render(&params);
    state.set_replay(ReplayState::new(params, label.clone()));

    debug!(prompt_chars = prompt.chars().count(), "Invoking generator");
    let response = match generator.generate(&settings.request_for(prompt)).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Generation failed; state left unchanged");
            return Err(e);
        }
    };

    if response.text.trim().is_empty() {
        warn!("Generator returned blank text");
        return Err(InvocationError::new(InvocationErrorKind::EmptyResponse).into());
    }

    let tokens = response.reported_tokens();
    if tokens.is_none() {
        debug!("No usage reported; counting zero tokens");
    }

    let record = GenerationRecord::new(
        state.next_sequence(),
        Local::now(),
        feature,
        label,
        response.text,
        tokens,
    );
    state.append_history(record.clone());
    state.add_usage(tokens.unwrap_or(0));
    state.select_latest();

    info!(
        sequence = record.sequence(),
        tokens = tokens.unwrap_or(0),
        cumulative = state.usage().cumulative_session_tokens(),
        "Generation recorded"
    );
    Ok(record)
}
