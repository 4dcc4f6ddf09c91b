//! Shared building blocks for prompt text.

use daihon_core::{Choice, GenerationMode};

/// Rendered in place of an absent field.
pub const UNSET: &str = "未設定";

/// Rendered in place of an absent existing plot.
pub const NEW_WORK: &str = "なし（新規作成）";

/// Free text, or `default` when absent.
pub(crate) fn text_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// Option label, or [`UNSET`] when absent.
pub(crate) fn label_or_unset<C: Choice>(value: Option<C>) -> &'static str {
    value.map(|v| v.label()).unwrap_or(UNSET)
}

/// `【name】: value` on one line.
pub(crate) fn push_field(prompt: &mut String, name: &str, value: &str) {
    prompt.push('【');
    prompt.push_str(name);
    prompt.push_str("】: ");
    prompt.push_str(value);
    prompt.push('\n');
}

/// `【name】` heading followed by a multi-line body.
pub(crate) fn push_block(prompt: &mut String, name: &str, body: &str) {
    prompt.push('【');
    prompt.push_str(name);
    prompt.push_str("】\n");
    prompt.push_str(body);
    prompt.push_str("\n\n");
}

/// `【出力形式】` heading followed by a bullet list.
pub(crate) fn push_output_format(prompt: &mut String, lead: Option<&str>, items: &[&str]) {
    prompt.push_str("【出力形式】\n");
    if let Some(lead) = lead {
        prompt.push_str(lead);
        prompt.push('\n');
    }
    for item in items {
        prompt.push_str("- ");
        prompt.push_str(item);
        prompt.push('\n');
    }
    prompt.push('\n');
}

/// Mode line plus its instruction.
pub(crate) fn push_mode(prompt: &mut String, mode: Option<GenerationMode>) {
    let mode = mode.unwrap_or(GenerationMode::FullAuto);
    push_field(prompt, "生成モード", mode.label());
    prompt.push_str(mode.instruction());
    prompt.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use daihon_core::Genre;

    #[test]
    fn test_field_layout() {
        let mut prompt = String::new();
        push_field(&mut prompt, "ジャンル", label_or_unset(Some(Genre::Horror)));
        push_field(&mut prompt, "作品タイトル", text_or(&None, UNSET));
        assert_eq!(prompt, "【ジャンル】: ホラー\n【作品タイトル】: 未設定\n");
    }

    #[test]
    fn test_mode_defaults_to_full_auto() {
        let mut prompt = String::new();
        push_mode(&mut prompt, None);
        assert!(prompt.starts_with("【生成モード】: フルオート\n"));
        assert!(prompt.contains(GenerationMode::FullAuto.instruction()));
    }
}
