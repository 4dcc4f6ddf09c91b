//! Manuscript critique template.

use crate::layout::{UNSET, push_block, push_field, push_output_format, text_or};
use daihon_core::{Choice, CritiqueFocus, CritiqueParams, Viewpoint};

const OUTPUT_ITEMS: &[&str] = &[
    "総合評価（5段階）と一言コメント",
    "良い点",
    "改善が必要な点",
    "具体的な改善提案",
];

const REWRITE_ITEM: &str = "改善提案を反映した書き直し例（原稿の一部分）";

const CLOSING: &str = "作者の意欲を損なわないよう、率直かつ建設的に講評してください。";

/// Render a critique prompt.
///
/// Focus defaults to an overall review from a reader's point of view.
pub fn render(params: &CritiqueParams) -> String {
    let focus = params.focus.unwrap_or(CritiqueFocus::Overall);
    let viewpoint = params.viewpoint.unwrap_or(Viewpoint::Reader);

    let mut prompt = String::new();
    prompt.push_str("あなたは");
    prompt.push_str(viewpoint.persona());
    prompt.push_str("です。以下の原稿を");
    prompt.push_str(focus.phrase());
    prompt.push_str("講評してください。\n\n");

    push_field(&mut prompt, "講評の観点", focus.label());
    push_field(&mut prompt, "視点", viewpoint.label());
    prompt.push('\n');

    push_block(&mut prompt, "原稿", text_or(&params.text, UNSET));

    let mut items = OUTPUT_ITEMS.to_vec();
    if params.with_rewrite.unwrap_or(false) {
        items.push(REWRITE_ITEM);
    }
    push_output_format(&mut prompt, None, &items);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}
