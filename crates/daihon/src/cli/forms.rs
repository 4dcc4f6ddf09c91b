//! Field-by-field input forms for the interactive studio.

use daihon::{
    CheckLevel, Choice, CritiqueFocus, Feature, GenerationMode, Genre, PlotFormat, ScriptFormat,
    StoryboardFormat, ThreadStyle, VideoLength, Viewpoint,
};

/// How a form field is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of text
    Line,
    /// Multi-line text terminated by a line holding only `.`
    Block,
    /// One of a fixed set of `(id, label)` options
    Choice(Vec<(&'static str, &'static str)>),
    /// Whole number
    Number,
    /// Yes/no
    Flag,
}

/// One question of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Parameter record key
    pub key: &'static str,
    /// Question shown to the user
    pub label: &'static str,
    /// Input style
    pub kind: FieldKind,
}

impl FormField {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

fn choices<C: Choice>() -> FieldKind {
    FieldKind::Choice(C::all().iter().map(|c| (c.id(), c.label())).collect())
}

/// Questions asked for a feature, in display order.
pub fn form(feature: Feature) -> Vec<FormField> {
    use FieldKind::{Block, Flag, Line, Number};

    match feature {
        Feature::Plot => vec![
            FormField::new("genre", "ジャンル", choices::<Genre>()),
            FormField::new("title", "作品タイトル", Line),
            FormField::new("format", "形式・長さ", choices::<PlotFormat>()),
            FormField::new("protagonist", "主人公設定", Line),
            FormField::new("worldview", "世界観・設定", Line),
            FormField::new("theme", "テーマ・メッセージ", Line),
            FormField::new("existing_plot", "既存プロット", Block),
            FormField::new("mode", "生成モード", choices::<GenerationMode>()),
        ],
        Feature::Script => vec![
            FormField::new("plot", "プロット", Block),
            FormField::new("format", "台本形式", choices::<ScriptFormat>()),
            FormField::new("mode", "生成モード", choices::<GenerationMode>()),
        ],
        Feature::Proofread => vec![
            FormField::new("text", "チェック対象テキスト", Block),
            FormField::new("level", "チェックレベル", choices::<CheckLevel>()),
        ],
        Feature::ThemedVideo => vec![
            FormField::new("theme", "動画テーマ", Line),
            FormField::new("style", "スレッドスタイル", choices::<ThreadStyle>()),
            FormField::new("length", "動画の長さ", choices::<VideoLength>()),
            FormField::new("mode", "生成モード", choices::<GenerationMode>()),
        ],
        Feature::Storyboard => vec![
            FormField::new("story", "ストーリー概要", Block),
            FormField::new("pages", "ページ数（1〜200）", Number),
            FormField::new("format", "ネーム形式", choices::<StoryboardFormat>()),
            FormField::new("mode", "生成モード", choices::<GenerationMode>()),
        ],
        Feature::Critique => vec![
            FormField::new("text", "講評する原稿", Block),
            FormField::new("focus", "講評の観点", choices::<CritiqueFocus>()),
            FormField::new("viewpoint", "講評の視点", choices::<Viewpoint>()),
            FormField::new("with_rewrite", "リライト例も提示する", Flag),
        ],
    }
}

/// Resolve a menu answer: a 1-based number picks an option, anything else
/// is passed through for lenient id/label matching.
pub fn resolve_choice(options: &[(&'static str, &'static str)], answer: &str) -> String {
    let answer = answer.trim();
    match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].0.to_string(),
        _ => answer.to_string(),
    }
}

/// Numbered option list, e.g. `1) ドラマ  2) コメディ`.
pub fn menu(options: &[(&'static str, &'static str)]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, (_, label))| format!("{}) {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_has_a_form() {
        for info in daihon::TemplateRegistry::entries() {
            assert!(!form(*info.feature()).is_empty());
        }
    }

    #[test]
    fn test_resolve_choice() {
        let FieldKind::Choice(options) = choices::<CheckLevel>() else {
            panic!("check level is a choice");
        };
        assert_eq!(resolve_choice(&options, "2"), "advanced");
        assert_eq!(resolve_choice(&options, "9"), "9");
        assert_eq!(resolve_choice(&options, "基本チェック"), "基本チェック");
        assert!(menu(&options).starts_with("1) 基本チェック"));
    }
}
