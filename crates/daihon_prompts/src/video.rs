//! 2ch-style video template.

use crate::layout::{UNSET, label_or_unset, push_field, push_mode, push_output_format, text_or};
use daihon_core::{Choice, ThemedVideoParams, VideoLength};

const INTRO: &str = "あなたは人気YouTubeチャンネルで2ch系動画を手がける構成作家です。以下のテーマで、2ch風スレッド形式の動画台本を作成してください。";

const ANY_STYLE: &str = "スタイルの指定はないため、テーマに最も合う雰囲気を選んでください。";

const OUTPUT_ITEMS: &[&str] = &[
    "スレッドタイトル",
    "イッチ（スレ主）の人物設定",
    "レス番号・名前・書き込み内容の形式で進むスレッド本文",
    "住民の反応、ツッコミ、アンカー付きのレス",
    "結末とイッチの後日談",
    "動画用のサムネイル文言案",
];

/// Closing sentence every video prompt ends with.
pub const CLOSING: &str =
    "リアルな2chの雰囲気を再現し、視聴者が最後まで飽きない展開を作成してください。";

/// Render a 2ch-style video prompt. The length defaults to standard.
pub fn render(params: &ThemedVideoParams) -> String {
    let length = params.length.unwrap_or(VideoLength::Standard);
    let (min_posts, max_posts) = length.post_range();

    let mut prompt = String::new();
    prompt.push_str(INTRO);
    prompt.push_str("\n\n");

    push_field(&mut prompt, "動画テーマ", text_or(&params.theme, UNSET));
    push_field(&mut prompt, "スレッドスタイル", label_or_unset(params.style));
    match params.style {
        Some(style) => {
            prompt.push_str(style.phrase());
            prompt.push_str("で書いてください。\n");
        }
        None => {
            prompt.push_str(ANY_STYLE);
            prompt.push('\n');
        }
    }
    push_field(
        &mut prompt,
        "動画の長さ",
        &format!(
            "{}（レス数の目安: {}〜{}レス）",
            length.label(),
            min_posts,
            max_posts
        ),
    );
    prompt.push('\n');

    push_mode(&mut prompt, params.mode);
    push_output_format(&mut prompt, None, OUTPUT_ITEMS);
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use daihon_core::ThreadStyle;

    #[test]
    fn test_video_defaults() {
        let prompt = render(&ThemedVideoParams::default().theme("同僚とのトラブルと予想外の結末"));
        assert!(prompt.contains("【動画テーマ】: 同僚とのトラブルと予想外の結末"));
        assert!(prompt.contains("【スレッドスタイル】: 未設定"));
        assert!(prompt.contains("【動画の長さ】: 標準（10-15分）（レス数の目安: 50〜80レス）"));
        assert!(prompt.trim_end().ends_with(CLOSING));
    }

    #[test]
    fn test_video_style_phrase() {
        let prompt = render(
            &ThemedVideoParams::default()
                .theme("テーマ")
                .style(ThreadStyle::Revenge)
                .length(VideoLength::Short),
        );
        assert!(prompt.contains("【スレッドスタイル】: 復讐・因果応報系"));
        assert!(prompt.contains(ThreadStyle::Revenge.phrase()));
        assert!(prompt.contains("20〜40レス"));
        assert!(!prompt.contains(ANY_STYLE));
    }
}
