//! Proofreading template.

use crate::layout::{UNSET, push_block, push_field, push_output_format, text_or};
use daihon_core::{CheckLevel, Choice, ProofreadParams};

const INTRO: &str =
    "あなたはプロの校正者です。以下のテキストの誤字脱字をチェックし、修正案を提示してください。";

const OUTPUT_ITEMS: &[&str] = &[
    "修正箇所の一覧（元の表記 → 修正案、修正理由）",
    "修正を反映した全文",
    "文章全体の改善ポイント（あれば）",
];

const CLOSING: &str = "修正が不要な箇所は変更せず、原文の文体と意図を尊重してください。";

/// Render a proofreading prompt. The level defaults to a basic check.
pub fn render(params: &ProofreadParams) -> String {
    let level = params.level.unwrap_or(CheckLevel::Basic);

    let mut prompt = String::new();
    prompt.push_str(INTRO);
    prompt.push_str("\n\n");

    push_field(&mut prompt, "チェックレベル", level.label());
    prompt.push_str(level.instruction());
    prompt.push_str("\n\n");

    push_block(&mut prompt, "チェック対象テキスト", text_or(&params.text, UNSET));
    push_output_format(&mut prompt, None, OUTPUT_ITEMS);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_instruction_changes_with_level() {
        let basic = render(&ProofreadParams::default().text("本文"));
        let pro = render(
            &ProofreadParams::default()
                .text("本文")
                .level(CheckLevel::Professional),
        );
        assert!(basic.contains(CheckLevel::Basic.instruction()));
        assert!(pro.contains(CheckLevel::Professional.instruction()));
        assert!(!pro.contains(CheckLevel::Basic.instruction()));
    }
}
