//! Script creation template.

use crate::layout::{UNSET, push_block, push_field, push_mode, push_output_format, text_or};
use daihon_core::{Choice, ScriptFormat, ScriptParams};

const OUTPUT_ITEMS: &[&str] = &[
    "登場人物一覧（名前と簡単な紹介）",
    "シーンごとの台本本文",
    "演出・撮影上の注意点",
];

const CLOSING: &str = "登場人物の個性が伝わる、自然で生き生きとしたセリフを書いてください。";

/// Render a script prompt. The format defaults to the standard layout.
pub fn render(params: &ScriptParams) -> String {
    let format = params.format.unwrap_or(ScriptFormat::Standard);

    let mut prompt = String::new();
    prompt.push_str("あなたはプロの脚本家です。以下のプロットをもとに、");
    prompt.push_str(format.label());
    prompt.push_str("の台本を作成してください。\n\n");

    push_field(&mut prompt, "台本形式", format.label());
    prompt.push_str(format.phrase());
    prompt.push_str("で書いてください。\n\n");

    push_mode(&mut prompt, params.mode);
    push_block(&mut prompt, "プロット", text_or(&params.plot, UNSET));
    push_output_format(&mut prompt, None, OUTPUT_ITEMS);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_defaults_to_standard() {
        let prompt = render(&ScriptParams::default().plot("起：出会い"));
        assert!(prompt.contains("【台本形式】: 標準台本"));
        assert!(prompt.contains("【プロット】\n起：出会い\n"));
    }

    #[test]
    fn test_script_format_phrase() {
        let prompt = render(&ScriptParams::default().format(ScriptFormat::Radio));
        assert!(prompt.contains(ScriptFormat::Radio.phrase()));
        assert!(prompt.contains("【プロット】\n未設定\n"));
    }
}
