//! Required-field checks run before any generation call.

use crate::storyboard::PAGE_RANGE;
use daihon_core::FeatureParams;
use daihon_error::{DaihonResult, MissingInputError, MissingInputErrorKind};

/// Reject parameters a template cannot sensibly render.
///
/// Plot has no required field. Every other feature needs its main text, and
/// storyboard page counts must fall within 1 to 200.
///
/// # Examples
///
/// ```
/// use daihon_core::{FeatureParams, ThemedVideoParams};
/// use daihon_prompts::validate;
///
/// let empty = FeatureParams::ThemedVideo(ThemedVideoParams::default());
/// assert!(validate(&empty).unwrap_err().is_missing_input());
///
/// let ok = FeatureParams::ThemedVideo(ThemedVideoParams::default().theme("社内恋愛"));
/// assert!(validate(&ok).is_ok());
/// ```
pub fn validate(params: &FeatureParams) -> DaihonResult<()> {
    match params {
        FeatureParams::Plot(_) => Ok(()),
        FeatureParams::Script(p) => require(&p.plot, "plot"),
        FeatureParams::Proofread(p) => require(&p.text, "text"),
        FeatureParams::ThemedVideo(p) => require(&p.theme, "theme"),
        FeatureParams::Storyboard(p) => {
            require(&p.story, "story")?;
            match p.pages {
                Some(pages) if !PAGE_RANGE.contains(&pages) => {
                    Err(MissingInputError::new(MissingInputErrorKind::OutOfRange {
                        field: "pages",
                        min: *PAGE_RANGE.start(),
                        max: *PAGE_RANGE.end(),
                        value: pages,
                    })
                    .into())
                }
                _ => Ok(()),
            }
        }
        FeatureParams::Critique(p) => require(&p.text, "text"),
    }
}

#[track_caller]
fn require(value: &Option<String>, field: &'static str) -> DaihonResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(MissingInputError::new(MissingInputErrorKind::Empty { field }).into()),
    }
}
