//! Plot creation template.

use crate::layout::{
    NEW_WORK, UNSET, label_or_unset, push_block, push_field, push_mode, push_output_format,
    text_or,
};
use daihon_core::PlotParams;

const INTRO: &str =
    "あなたはプロの脚本家・構成作家です。以下の設定をもとに、独創的で引き込まれるプロットを作成してください。";

const OUTPUT_ITEMS: &[&str] = &[
    "タイトル案（3つ）",
    "ログライン（1〜2文で作品の核を表現）",
    "主要登場人物（名前、年齢、性格、物語上の役割）",
    "起承転結ごとのあらすじ",
    "見どころとなる重要シーン",
    "結末と作品が伝えるメッセージ",
];

const CLOSING: &str = "登場人物の動機と感情の変化が伝わり、最後まで先が気になる展開にしてください。";

/// Render a plot prompt.
///
/// Absent fields render as `未設定`, an absent existing plot as
/// `なし（新規作成）`.
pub fn render(params: &PlotParams) -> String {
    let mut prompt = String::new();
    prompt.push_str(INTRO);
    prompt.push_str("\n\n");

    push_field(&mut prompt, "ジャンル", label_or_unset(params.genre));
    push_field(&mut prompt, "作品タイトル", text_or(&params.title, UNSET));
    push_field(&mut prompt, "形式・長さ", label_or_unset(params.format));
    push_field(&mut prompt, "主人公設定", text_or(&params.protagonist, UNSET));
    push_field(&mut prompt, "世界観・設定", text_or(&params.worldview, UNSET));
    push_field(&mut prompt, "テーマ・メッセージ", text_or(&params.theme, UNSET));
    prompt.push('\n');

    push_block(
        &mut prompt,
        "既存プロット",
        text_or(&params.existing_plot, NEW_WORK),
    );
    if params.existing_plot.is_some() {
        prompt.push_str("既存プロットの良さを活かしつつ、改良・発展させてください。\n\n");
    }

    push_mode(&mut prompt, params.mode);

    if let Some(format) = params.format {
        prompt.push_str(format.phrase());
        prompt.push_str("にしてください。\n\n");
    }

    push_output_format(&mut prompt, None, OUTPUT_ITEMS);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}
