//! Typed parameters, one struct per feature.
//!
//! Every field is optional. The documented default for an absent field is
//! applied by the template, never here, so a replayed request renders the
//! exact same prompt as the first attempt.

use crate::{
    CheckLevel, CritiqueFocus, Feature, GenerationMode, Genre, ParameterRecord, PlotFormat,
    ScriptFormat, StoryboardFormat, ThreadStyle, VideoLength, Viewpoint,
};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Plot creation parameters.
///
/// # Examples
///
/// ```
/// use daihon_core::{Genre, PlotParams};
///
/// let params = PlotParams::default()
///     .genre(Genre::Mystery)
///     .title("青春の記憶");
/// assert_eq!(params.title.as_deref(), Some("青春の記憶"));
/// assert!(params.protagonist.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct PlotParams {
    /// Story genre
    pub genre: Option<Genre>,
    /// Working title
    pub title: Option<String>,
    /// Length class
    pub format: Option<PlotFormat>,
    /// Protagonist: age, personality, job, background
    pub protagonist: Option<String>,
    /// Era, place, society, special rules
    pub worldview: Option<String>,
    /// Theme or message of the work
    pub theme: Option<String>,
    /// Existing plot to refine
    pub existing_plot: Option<String>,
    /// Generation mode
    pub mode: Option<GenerationMode>,
}

/// Script creation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct ScriptParams {
    /// Plot to turn into a script (required)
    pub plot: Option<String>,
    /// Script layout
    pub format: Option<ScriptFormat>,
    /// Generation mode
    pub mode: Option<GenerationMode>,
}

/// Proofreading parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct ProofreadParams {
    /// Text to check (required)
    pub text: Option<String>,
    /// Check depth
    pub level: Option<CheckLevel>,
}

/// 2ch-style video parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct ThemedVideoParams {
    /// Video theme (required)
    pub theme: Option<String>,
    /// Thread style variant
    pub style: Option<ThreadStyle>,
    /// Running time
    pub length: Option<VideoLength>,
    /// Generation mode
    pub mode: Option<GenerationMode>,
}

/// Manga/anime storyboard parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct StoryboardParams {
    /// Story summary (required)
    pub story: Option<String>,
    /// Page count as entered; checked against 1 to 200 before rendering
    pub pages: Option<i64>,
    /// Storyboard layout
    pub format: Option<StoryboardFormat>,
    /// Generation mode
    pub mode: Option<GenerationMode>,
}

/// Critique parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct CritiqueParams {
    /// Manuscript to critique (required)
    pub text: Option<String>,
    /// Aspect to concentrate on
    pub focus: Option<CritiqueFocus>,
    /// Point of view of the critic
    pub viewpoint: Option<Viewpoint>,
    /// Also ask for a rewritten sample passage
    pub with_rewrite: Option<bool>,
}

/// Parameters for any feature, tagged by feature.
///
/// This is the serializable parameter half of a replay state.
///
/// # Examples
///
/// ```
/// use daihon_core::{Feature, FeatureParams, ParameterRecord, CheckLevel};
///
/// let record = ParameterRecord::new()
///     .with("text", "こんにちわ")
///     .with("level", "basic");
/// let params = FeatureParams::from_record(Feature::Proofread, &record);
///
/// assert_eq!(params.feature(), Feature::Proofread);
/// match params {
///     FeatureParams::Proofread(p) => assert_eq!(p.level, Some(CheckLevel::Basic)),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "feature", content = "params", rename_all = "kebab-case")]
pub enum FeatureParams {
    /// Plot creation
    Plot(PlotParams),
    /// Script creation
    Script(ScriptParams),
    /// Proofreading
    Proofread(ProofreadParams),
    /// 2ch-style video
    #[serde(rename = "video")]
    ThemedVideo(ThemedVideoParams),
    /// Storyboard
    Storyboard(StoryboardParams),
    /// Critique
    Critique(CritiqueParams),
}

impl FeatureParams {
    /// The feature these parameters belong to.
    pub fn feature(&self) -> Feature {
        match self {
            FeatureParams::Plot(_) => Feature::Plot,
            FeatureParams::Script(_) => Feature::Script,
            FeatureParams::Proofread(_) => Feature::Proofread,
            FeatureParams::ThemedVideo(_) => Feature::ThemedVideo,
            FeatureParams::Storyboard(_) => Feature::Storyboard,
            FeatureParams::Critique(_) => Feature::Critique,
        }
    }

    /// Empty parameters for a feature.
    pub fn empty(feature: Feature) -> Self {
        Self::from_record(feature, &ParameterRecord::new())
    }

    /// Builds typed parameters from a loosely typed record.
    ///
    /// Unknown keys are ignored; unrecognized option values become `None`.
    pub fn from_record(feature: Feature, record: &ParameterRecord) -> Self {
        match feature {
            Feature::Plot => FeatureParams::Plot(PlotParams {
                genre: record.choice("genre"),
                title: record.text("title"),
                format: record.choice("format"),
                protagonist: record.text("protagonist"),
                worldview: record.text("worldview"),
                theme: record.text("theme"),
                existing_plot: record.text("existing_plot"),
                mode: record.choice("mode"),
            }),
            Feature::Script => FeatureParams::Script(ScriptParams {
                plot: record.text("plot"),
                format: record.choice("format"),
                mode: record.choice("mode"),
            }),
            Feature::Proofread => FeatureParams::Proofread(ProofreadParams {
                text: record.text("text"),
                level: record.choice("level"),
            }),
            Feature::ThemedVideo => FeatureParams::ThemedVideo(ThemedVideoParams {
                theme: record.text("theme"),
                style: record.choice("style"),
                length: record.choice("length"),
                mode: record.choice("mode"),
            }),
            Feature::Storyboard => FeatureParams::Storyboard(StoryboardParams {
                story: record.text("story"),
                pages: record.number("pages"),
                format: record.choice("format"),
                mode: record.choice("mode"),
            }),
            Feature::Critique => FeatureParams::Critique(CritiqueParams {
                text: record.text("text"),
                focus: record.choice("focus"),
                viewpoint: record.choice("viewpoint"),
                with_rewrite: record.flag("with_rewrite"),
            }),
        }
    }
}
