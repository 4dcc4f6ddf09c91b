//! Manga/anime storyboard ("name") template.

use crate::layout::{UNSET, push_block, push_field, push_mode, push_output_format, text_or};
use daihon_core::{Choice, StoryboardFormat, StoryboardParams};
use std::ops::RangeInclusive;

/// Page count used when none is given.
pub const DEFAULT_PAGES: i64 = 20;

/// Accepted page counts.
pub const PAGE_RANGE: RangeInclusive<i64> = 1..=200;

const OUTPUT_ITEMS: &[&str] = &[
    "ページ/コマ番号",
    "コマ割り指示",
    "登場人物の配置",
    "セリフ・モノローグ",
    "動作・表情指示",
    "背景・効果音指示",
];

const CLOSING: &str = "読者が映像として想像しやすく、感情移入できるネームを作成してください。";

/// Render a storyboard prompt.
///
/// Pages default to [`DEFAULT_PAGES`] and the format to a manga name.
pub fn render(params: &StoryboardParams) -> String {
    let format = params.format.unwrap_or(StoryboardFormat::Manga);
    let pages = params.pages.unwrap_or(DEFAULT_PAGES);

    let mut prompt = String::new();
    prompt.push_str("あなたはプロの漫画家・演出家です。以下のストーリーを");
    prompt.push_str(format.phrase());
    prompt.push_str("に構成してください。\n\n");

    push_block(&mut prompt, "ストーリー概要", text_or(&params.story, UNSET));
    push_field(&mut prompt, "ページ数", &format!("{pages}ページ"));
    push_field(&mut prompt, "形式", format.label());
    prompt.push('\n');

    push_mode(&mut prompt, params.mode);
    push_output_format(&mut prompt, Some("各ページ/コマごとに："), OUTPUT_ITEMS);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}
