//! User-facing outcome messages.

use daihon_core::Feature;
use daihon_error::{CredentialErrorKind, DaihonError, DaihonErrorKind, MissingInputErrorKind};
use serde::Serialize;

/// Outcome of a studio action, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    /// The action completed
    #[display("✅ {}", _0)]
    Success(String),
    /// Nothing was done, but nothing went wrong either
    #[display("⚠️ {}", _0)]
    Warning(String),
    /// The action failed; the session is still usable
    #[display("❌ {}", _0)]
    Error(String),
}

impl Notice {
    /// Message without the level marker.
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }

    /// Whether the action completed.
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    /// Success message for a finished generation.
    pub fn generated(feature: Feature) -> Self {
        let message = match feature {
            Feature::Plot => "プロット生成完了！",
            Feature::Script => "台本生成完了！",
            Feature::Proofread => "チェック完了！",
            Feature::ThemedVideo => "2ch風動画生成完了！",
            Feature::Storyboard => "ネーム生成完了！",
            Feature::Critique => "講評完了！",
        };
        Notice::Success(message.to_string())
    }

    /// Success message for a finished regeneration.
    pub fn regenerated() -> Self {
        Notice::Success("再生成完了！".to_string())
    }
}

impl From<&DaihonError> for Notice {
    fn from(error: &DaihonError) -> Self {
        match error.kind() {
            DaihonErrorKind::MissingInput(e) => match &e.kind {
                MissingInputErrorKind::Empty { field } => Notice::Error(empty_field_message(field)),
                MissingInputErrorKind::OutOfRange { min, max, .. } => {
                    Notice::Error(format!("ページ数は{}〜{}の範囲で指定してください", min, max))
                }
                MissingInputErrorKind::NothingToReplay => {
                    Notice::Warning("再生成するパラメータが見つかりません".to_string())
                }
                MissingInputErrorKind::NothingToExport => {
                    Notice::Warning("保存する生成結果がありません".to_string())
                }
            },
            DaihonErrorKind::Credential(e) => match &e.kind {
                CredentialErrorKind::Missing => {
                    Notice::Warning("APIキーを入力してください".to_string())
                }
                CredentialErrorKind::Rejected(reason) => {
                    Notice::Error(format!("API接続失敗: {}", reason))
                }
            },
            DaihonErrorKind::Invocation(e) => match &e.kind {
                kind if kind.is_quota() => {
                    Notice::Error(format!("生成エラー: APIの利用上限に達しました（{}）", kind))
                }
                kind => Notice::Error(format!("生成エラー: {}", kind)),
            },
            DaihonErrorKind::Config(e) => Notice::Error(format!("設定エラー: {}", e.message)),
            DaihonErrorKind::Export(e) => Notice::Error(format!("保存エラー: {}", e.message)),
        }
    }
}

fn empty_field_message(field: &str) -> String {
    let what = match field {
        "plot" => "プロット",
        "text" => "テキスト",
        "theme" => "動画テーマ",
        "story" => "ストーリー概要",
        other => other,
    };
    format!("{}を入力してください", what)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daihon_error::{CredentialError, InvocationError, InvocationErrorKind, MissingInputError};

    #[test]
    fn test_missing_input_messages() {
        let err: DaihonError =
            MissingInputError::new(MissingInputErrorKind::Empty { field: "theme" }).into();
        assert_eq!(
            Notice::from(&err),
            Notice::Error("動画テーマを入力してください".to_string())
        );

        let err: DaihonError = MissingInputError::new(MissingInputErrorKind::NothingToReplay).into();
        assert_eq!(
            Notice::from(&err),
            Notice::Warning("再生成するパラメータが見つかりません".to_string())
        );
    }

    #[test]
    fn test_quota_message() {
        let err: DaihonError = InvocationError::new(InvocationErrorKind::Http {
            status_code: 429,
            message: "RESOURCE_EXHAUSTED".to_string(),
        })
        .into();
        let notice = Notice::from(&err);
        assert!(!notice.is_success());
        assert!(notice.message().contains("利用上限"));

        let err: DaihonError =
            InvocationError::new(InvocationErrorKind::Request("timed out".to_string())).into();
        assert_eq!(
            Notice::from(&err),
            Notice::Error("生成エラー: Request failed: timed out".to_string())
        );
    }

    #[test]
    fn test_credential_missing_is_warning() {
        let err: DaihonError = CredentialError::new(CredentialErrorKind::Missing).into();
        assert!(matches!(Notice::from(&err), Notice::Warning(_)));
    }

    #[test]
    fn test_display_marks_level() {
        assert_eq!(Notice::regenerated().to_string(), "✅ 再生成完了！");
    }
}
