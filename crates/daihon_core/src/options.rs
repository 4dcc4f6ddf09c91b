//! Enumerated option fields and their prompt phrases.
//!
//! Every select box of the studio is an explicit enum here. Each enum maps
//! exhaustively to a stable id, a display label and, where the templates need
//! one, the phrase inserted into the prompt.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::warn;

/// Common behaviour of enumerated option fields.
///
/// # Examples
///
/// ```
/// use daihon_core::{Choice, CheckLevel};
///
/// assert_eq!(CheckLevel::parse_lenient("advanced"), Some(CheckLevel::Advanced));
/// assert_eq!(CheckLevel::parse_lenient("高度チェック"), Some(CheckLevel::Advanced));
/// assert_eq!(CheckLevel::parse_lenient("extreme"), None);
/// ```
pub trait Choice: Sized + Copy + PartialEq + IntoEnumIterator + 'static {
    /// Stable wire id (kebab-case).
    fn id(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Parse from either the id or the label.
    ///
    /// Unrecognized values are logged and treated as absent so the field's
    /// documented default applies.
    fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let found = Self::iter().find(|v| v.id() == raw || v.label() == raw);
        if found.is_none() {
            warn!(value = raw, "Unrecognized option value, falling back to default");
        }
        found
    }

    /// All variants in declaration order.
    fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Story genre.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    /// ドラマ
    Drama,
    /// コメディ
    Comedy,
    /// アクション
    Action,
    /// ロマンス
    Romance,
    /// ホラー
    Horror,
    /// SF
    #[serde(rename = "sf")]
    ScienceFiction,
    /// ファンタジー
    Fantasy,
    /// ミステリー
    Mystery,
    /// 日常系
    SliceOfLife,
    /// 2ch系
    #[serde(rename = "2ch")]
    TwoChannel,
}

impl Choice for Genre {
    fn id(&self) -> &'static str {
        match self {
            Genre::Drama => "drama",
            Genre::Comedy => "comedy",
            Genre::Action => "action",
            Genre::Romance => "romance",
            Genre::Horror => "horror",
            Genre::ScienceFiction => "sf",
            Genre::Fantasy => "fantasy",
            Genre::Mystery => "mystery",
            Genre::SliceOfLife => "slice-of-life",
            Genre::TwoChannel => "2ch",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Genre::Drama => "ドラマ",
            Genre::Comedy => "コメディ",
            Genre::Action => "アクション",
            Genre::Romance => "ロマンス",
            Genre::Horror => "ホラー",
            Genre::ScienceFiction => "SF",
            Genre::Fantasy => "ファンタジー",
            Genre::Mystery => "ミステリー",
            Genre::SliceOfLife => "日常系",
            Genre::TwoChannel => "2ch系",
        }
    }
}

/// Length class of a plot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlotFormat {
    /// 5-10 minutes
    Short,
    /// 15-30 minutes
    Medium,
    /// 45-90 minutes
    Long,
    /// Multi-episode series
    Series,
    /// 10-20 minute video
    Youtube,
}

impl Choice for PlotFormat {
    fn id(&self) -> &'static str {
        match self {
            PlotFormat::Short => "short",
            PlotFormat::Medium => "medium",
            PlotFormat::Long => "long",
            PlotFormat::Series => "series",
            PlotFormat::Youtube => "youtube",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PlotFormat::Short => "短編（5-10分）",
            PlotFormat::Medium => "中編（15-30分）",
            PlotFormat::Long => "長編（45-90分）",
            PlotFormat::Series => "シリーズ（複数話）",
            PlotFormat::Youtube => "YouTube動画（10-20分）",
        }
    }
}

impl PlotFormat {
    /// Structural guidance matching the length class.
    pub fn phrase(&self) -> &'static str {
        match self {
            PlotFormat::Short => "短編として、ひとつの事件と明快な結末に絞った構成",
            PlotFormat::Medium => "中編として、サブプロットを1本加えた三幕構成",
            PlotFormat::Long => "長編として、複数の転換点と人物の成長を描く三幕構成",
            PlotFormat::Series => "シリーズとして、全体の縦軸と各話の見どころを分けた構成",
            PlotFormat::Youtube => "YouTube動画として、冒頭30秒で引き込み最後まで離脱させない構成",
        }
    }
}

/// Output format of a script.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptFormat {
    /// 標準台本
    Standard,
    /// 映画脚本
    Screenplay,
    /// ラジオドラマ
    Radio,
    /// YouTube動画
    Youtube,
    /// 2ch風スレッド
    #[serde(rename = "2ch-thread")]
    TwoChannelThread,
    /// マンガネーム
    MangaName,
}

impl Choice for ScriptFormat {
    fn id(&self) -> &'static str {
        match self {
            ScriptFormat::Standard => "standard",
            ScriptFormat::Screenplay => "screenplay",
            ScriptFormat::Radio => "radio",
            ScriptFormat::Youtube => "youtube",
            ScriptFormat::TwoChannelThread => "2ch-thread",
            ScriptFormat::MangaName => "manga-name",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ScriptFormat::Standard => "標準台本",
            ScriptFormat::Screenplay => "映画脚本",
            ScriptFormat::Radio => "ラジオドラマ",
            ScriptFormat::Youtube => "YouTube動画",
            ScriptFormat::TwoChannelThread => "2ch風スレッド",
            ScriptFormat::MangaName => "マンガネーム",
        }
    }
}

impl ScriptFormat {
    /// Layout instructions for the script body.
    pub fn phrase(&self) -> &'static str {
        match self {
            ScriptFormat::Standard => "柱（場所・時間）、ト書き、登場人物名とセリフを明確に分けた標準的な台本形式",
            ScriptFormat::Screenplay => "シーン見出し、アクション、キャラクター名、セリフで構成する映画脚本形式",
            ScriptFormat::Radio => "効果音（SE）、音楽（M）、ナレーションを明記した音声のみで伝わるラジオドラマ形式",
            ScriptFormat::Youtube => "ナレーションとテロップ指示、画面切り替えのタイミングを含むYouTube動画用の台本",
            ScriptFormat::TwoChannelThread => "レス番号、名前欄、書き込み内容で構成する2ch風スレッド形式",
            ScriptFormat::MangaName => "ページ・コマごとにセリフと構図指示を並べたマンガネーム形式",
        }
    }
}

/// Depth of a proofreading pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckLevel {
    /// 基本チェック
    Basic,
    /// 高度チェック
    Advanced,
    /// プロフェッショナル
    Professional,
}

impl Choice for CheckLevel {
    fn id(&self) -> &'static str {
        match self {
            CheckLevel::Basic => "basic",
            CheckLevel::Advanced => "advanced",
            CheckLevel::Professional => "professional",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CheckLevel::Basic => "基本チェック",
            CheckLevel::Advanced => "高度チェック",
            CheckLevel::Professional => "プロフェッショナル",
        }
    }
}

impl CheckLevel {
    /// Instruction describing what the proofreader must look for.
    pub fn instruction(&self) -> &'static str {
        match self {
            CheckLevel::Basic => "誤字脱字と明らかな変換ミスを中心にチェックしてください。",
            CheckLevel::Advanced => {
                "誤字脱字に加えて、表記ゆれ・助詞の誤用・文法の誤り・不自然な言い回しもチェックしてください。"
            }
            CheckLevel::Professional => {
                "出版物の校正基準で、誤字脱字・表記ゆれ・文法・事実関係の矛盾・文体の統一・読みやすさまで総合的にチェックしてください。"
            }
        }
    }
}

/// Thread style of a 2ch-themed video.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadStyle {
    /// 恋愛系スレ
    LoveStory,
    /// 社会人系スレ
    WorkLife,
    /// 学生系スレ
    SchoolLife,
    /// 家族系スレ
    Family,
    /// 不思議体験系
    Mystery,
    /// 復讐・因果応報系
    Revenge,
    /// 成功体験系
    Success,
}

impl Choice for ThreadStyle {
    fn id(&self) -> &'static str {
        match self {
            ThreadStyle::LoveStory => "love-story",
            ThreadStyle::WorkLife => "work-life",
            ThreadStyle::SchoolLife => "school-life",
            ThreadStyle::Family => "family",
            ThreadStyle::Mystery => "mystery",
            ThreadStyle::Revenge => "revenge",
            ThreadStyle::Success => "success",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ThreadStyle::LoveStory => "恋愛系スレ",
            ThreadStyle::WorkLife => "社会人系スレ",
            ThreadStyle::SchoolLife => "学生系スレ",
            ThreadStyle::Family => "家族系スレ",
            ThreadStyle::Mystery => "不思議体験系",
            ThreadStyle::Revenge => "復讐・因果応報系",
            ThreadStyle::Success => "成功体験系",
        }
    }
}

impl ThreadStyle {
    /// Mood and story beats typical of the thread style.
    pub fn phrase(&self) -> &'static str {
        match self {
            ThreadStyle::LoveStory => "甘酸っぱさとすれ違い、最後に報われる恋愛報告スレの雰囲気",
            ThreadStyle::WorkLife => "職場の理不尽や人間関係に共感が集まる社会人スレの雰囲気",
            ThreadStyle::SchoolLife => "学校生活の青春と黒歴史が入り混じる学生スレの雰囲気",
            ThreadStyle::Family => "家族の衝突と和解が描かれる家庭スレの雰囲気",
            ThreadStyle::Mystery => "実話風の不気味さと謎が少しずつ明かされるオカルトスレの雰囲気",
            ThreadStyle::Revenge => "スカッとする逆転劇と因果応報の結末が待つ復讐スレの雰囲気",
            ThreadStyle::Success => "どん底からの逆転と努力が報われる成功体験スレの雰囲気",
        }
    }
}

/// Target running time of a themed video.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum VideoLength {
    /// 5-8 minutes
    Short,
    /// 10-15 minutes
    Standard,
    /// 20-30 minutes
    Long,
}

impl Choice for VideoLength {
    fn id(&self) -> &'static str {
        match self {
            VideoLength::Short => "short",
            VideoLength::Standard => "standard",
            VideoLength::Long => "long",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VideoLength::Short => "ショート（5-8分）",
            VideoLength::Standard => "標準（10-15分）",
            VideoLength::Long => "長編（20-30分）",
        }
    }
}

impl VideoLength {
    /// Approximate number of thread posts fitting the running time.
    pub fn post_range(&self) -> (u32, u32) {
        match self {
            VideoLength::Short => (20, 40),
            VideoLength::Standard => (50, 80),
            VideoLength::Long => (100, 150),
        }
    }
}

/// Layout of a storyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum StoryboardFormat {
    /// マンガネーム
    Manga,
    /// 4コマネーム
    #[serde(rename = "4koma")]
    Yonkoma,
    /// アニメ絵コンテ
    Storyboard,
    /// ウェブトゥーン
    Webtoon,
}

impl Choice for StoryboardFormat {
    fn id(&self) -> &'static str {
        match self {
            StoryboardFormat::Manga => "manga",
            StoryboardFormat::Yonkoma => "4koma",
            StoryboardFormat::Storyboard => "storyboard",
            StoryboardFormat::Webtoon => "webtoon",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StoryboardFormat::Manga => "マンガネーム",
            StoryboardFormat::Yonkoma => "4コマネーム",
            StoryboardFormat::Storyboard => "アニメ絵コンテ",
            StoryboardFormat::Webtoon => "ウェブトゥーン",
        }
    }
}

impl StoryboardFormat {
    /// What the story is to be composed into.
    pub fn phrase(&self) -> &'static str {
        match self {
            StoryboardFormat::Manga => "マンガのネーム（コマ割り、セリフ、動作指示）",
            StoryboardFormat::Yonkoma => "4コマ漫画のネーム（起承転結の4コマ構成）",
            StoryboardFormat::Storyboard => "アニメの絵コンテ（カット番号、カメラワーク指示）",
            StoryboardFormat::Webtoon => "ウェブトゥーン形式（縦読み、スクロール対応）",
        }
    }
}

/// How much of the work the model is allowed to invent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// The model fills every gap freely
    FullAuto,
    /// The model respects the inputs and fills only missing parts
    SemiSelf,
    /// The model organises the inputs with minimal invention
    #[serde(rename = "self")]
    Manual,
}

impl Choice for GenerationMode {
    fn id(&self) -> &'static str {
        match self {
            GenerationMode::FullAuto => "full-auto",
            GenerationMode::SemiSelf => "semi-self",
            GenerationMode::Manual => "self",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GenerationMode::FullAuto => "フルオート",
            GenerationMode::SemiSelf => "セミセルフ（AI）",
            GenerationMode::Manual => "セルフ",
        }
    }
}

impl GenerationMode {
    /// Instruction telling the model how far it may go beyond the inputs.
    pub fn instruction(&self) -> &'static str {
        match self {
            GenerationMode::FullAuto => "未設定の要素も含めて、すべてを自由に創作して完成させてください。",
            GenerationMode::SemiSelf => "入力された要素を最優先し、不足している部分のみを補って完成させてください。",
            GenerationMode::Manual => "入力された要素だけを整理・構成し、新たな創作は最小限にとどめてください。",
        }
    }
}

/// Aspect a critique concentrates on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum CritiqueFocus {
    /// 総合評価
    Overall,
    /// 構成
    Structure,
    /// キャラクター
    Character,
    /// セリフ
    Dialogue,
    /// テンポ
    Pacing,
}

impl Choice for CritiqueFocus {
    fn id(&self) -> &'static str {
        match self {
            CritiqueFocus::Overall => "overall",
            CritiqueFocus::Structure => "structure",
            CritiqueFocus::Character => "character",
            CritiqueFocus::Dialogue => "dialogue",
            CritiqueFocus::Pacing => "pacing",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CritiqueFocus::Overall => "総合評価",
            CritiqueFocus::Structure => "構成",
            CritiqueFocus::Character => "キャラクター",
            CritiqueFocus::Dialogue => "セリフ",
            CritiqueFocus::Pacing => "テンポ",
        }
    }
}

impl CritiqueFocus {
    /// Evaluation criteria for the focus.
    pub fn phrase(&self) -> &'static str {
        match self {
            CritiqueFocus::Overall => "構成・キャラクター・セリフ・テンポ・テーマ性を総合的に",
            CritiqueFocus::Structure => "起承転結のバランス、伏線と回収、見せ場の配置を中心に",
            CritiqueFocus::Character => "人物の動機、一貫性、成長の描き方を中心に",
            CritiqueFocus::Dialogue => "セリフの自然さ、キャラクターらしさ、説明過多になっていないかを中心に",
            CritiqueFocus::Pacing => "展開の速さ、中だるみ、場面転換のリズムを中心に",
        }
    }
}

/// Point of view the critique is written from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Viewpoint {
    /// 読者目線
    Reader,
    /// 編集者目線
    Editor,
    /// プロデューサー目線
    Producer,
}

impl Choice for Viewpoint {
    fn id(&self) -> &'static str {
        match self {
            Viewpoint::Reader => "reader",
            Viewpoint::Editor => "editor",
            Viewpoint::Producer => "producer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Viewpoint::Reader => "読者目線",
            Viewpoint::Editor => "編集者目線",
            Viewpoint::Producer => "プロデューサー目線",
        }
    }
}

impl Viewpoint {
    /// Persona the model takes when critiquing.
    pub fn persona(&self) -> &'static str {
        match self {
            Viewpoint::Reader => "作品を楽しみにしている熱心な読者",
            Viewpoint::Editor => "数多くのヒット作を担当してきた編集者",
            Viewpoint::Producer => "映像化を検討している映像プロデューサー",
        }
    }
}
