//! Feature tabs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One generation feature, i.e. one tab of the studio.
///
/// The display form is the Japanese label used as the default feature label
/// in history entries.
///
/// # Examples
///
/// ```
/// use daihon_core::Feature;
/// use std::str::FromStr;
///
/// assert_eq!(Feature::Proofread.to_string(), "校正");
/// assert_eq!(Feature::from_str("video").unwrap(), Feature::ThemedVideo);
/// assert_eq!(Feature::Storyboard.id(), "storyboard");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Feature {
    /// Plot outline from genre, characters and theme
    Plot,
    /// Script written from an existing plot
    Script,
    /// Typo and grammar check
    Proofread,
    /// 2ch-thread style video plot
    #[serde(rename = "video")]
    #[strum(serialize = "video")]
    ThemedVideo,
    /// Manga/anime storyboard ("name")
    Storyboard,
    /// Editorial critique of a manuscript
    Critique,
}

impl Feature {
    /// Stable machine identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Feature::Plot => "plot",
            Feature::Script => "script",
            Feature::Proofread => "proofread",
            Feature::ThemedVideo => "video",
            Feature::Storyboard => "storyboard",
            Feature::Critique => "critique",
        }
    }

    /// Default label recorded in history for this feature.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Plot => "プロット",
            Feature::Script => "台本",
            Feature::Proofread => "校正",
            Feature::ThemedVideo => "2ch動画",
            Feature::Storyboard => "ネーム",
            Feature::Critique => "講評",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
