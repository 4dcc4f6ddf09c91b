//! Feature to template lookup.

use crate::{critique, plot, proofread, script, storyboard, video};
use daihon_core::{Feature, FeatureParams};
use serde::Serialize;
use tracing::{debug, instrument};

/// Static description of one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct TemplateInfo {
    /// Feature the template serves
    feature: Feature,
    /// Short display name
    name: &'static str,
    /// What the template asks the model to produce
    description: &'static str,
}

const ENTRIES: [TemplateInfo; 6] = [
    TemplateInfo {
        feature: Feature::Plot,
        name: "プロット作成",
        description: "ジャンル・主人公・世界観・テーマからプロットを作成",
    },
    TemplateInfo {
        feature: Feature::Script,
        name: "台本作成",
        description: "プロットを指定形式の台本に書き起こす",
    },
    TemplateInfo {
        feature: Feature::Proofread,
        name: "AI誤字脱字検出",
        description: "チェックレベルに応じて誤字脱字と表記を校正",
    },
    TemplateInfo {
        feature: Feature::ThemedVideo,
        name: "YouTube 2ch系動画作成",
        description: "テーマとスレッドスタイルから2ch風動画台本を作成",
    },
    TemplateInfo {
        feature: Feature::Storyboard,
        name: "マンガ・アニメネーム作成",
        description: "ストーリー概要をページ数と形式に合わせたネームに構成",
    },
    TemplateInfo {
        feature: Feature::Critique,
        name: "原稿講評",
        description: "観点と視点を指定して原稿を講評",
    },
];

/// The fixed set of prompt templates, one per feature.
///
/// Templates are plain functions, so the registry holds no state.
///
/// # Examples
///
/// ```
/// use daihon_core::Feature;
/// use daihon_prompts::TemplateRegistry;
///
/// assert_eq!(TemplateRegistry::entries().len(), 6);
/// assert_eq!(TemplateRegistry::get(Feature::Storyboard).name(), "マンガ・アニメネーム作成");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// Every template in tab order.
    pub fn entries() -> &'static [TemplateInfo] {
        &ENTRIES
    }

    /// Template description for a feature.
    pub fn get(feature: Feature) -> &'static TemplateInfo {
        match feature {
            Feature::Plot => &ENTRIES[0],
            Feature::Script => &ENTRIES[1],
            Feature::Proofread => &ENTRIES[2],
            Feature::ThemedVideo => &ENTRIES[3],
            Feature::Storyboard => &ENTRIES[4],
            Feature::Critique => &ENTRIES[5],
        }
    }
}

/// Render the prompt for any feature.
///
/// Pure: the same parameters always give the same text.
#[instrument(skip(params), fields(feature = %params.feature().id()))]
pub fn render(params: &FeatureParams) -> String {
    let prompt = match params {
        FeatureParams::Plot(p) => plot::render(p),
        FeatureParams::Script(p) => script::render(p),
        FeatureParams::Proofread(p) => proofread::render(p),
        FeatureParams::ThemedVideo(p) => video::render(p),
        FeatureParams::Storyboard(p) => storyboard::render(p),
        FeatureParams::Critique(p) => critique::render(p),
    };
    debug!(chars = prompt.chars().count(), "Rendered prompt");
    prompt
}
