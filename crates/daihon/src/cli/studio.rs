//! Interactive studio session.
//!
//! Reads commands line by line, fills feature forms field by field and
//! prints every outcome as a notice. Errors never end the session.

use super::forms::{FieldKind, form, menu, resolve_choice};
use super::run::summary;
use daihon::{
    Feature, FeatureParams, GeneratorFactory, Notice, ParameterRecord, SessionConfig, Studio,
    TemplateRegistry, input_hint,
};
use std::fmt::Display;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};

const HELP: &str = "\
コマンド:
  plot | script | proofread | video | storyboard | critique
              フォームに入力して生成
  regen       直前のパラメータで再生成
  show        現在の生成結果を表示
  history     最近の生成履歴
  stats       現在の生成結果の統計
  usage       トークン使用量
  export [DIR]
              現在の生成結果をファイルに保存
  clear       現在の生成結果をクリア（履歴は残る）
  reset       履歴とカウンタを含めてリセット
  key [KEY]   APIキーを設定
  templates   テンプレート一覧
  help        このヘルプ
  quit        終了";

/// Line-oriented console over any async reader and sync writer.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: AsyncBufRead + Unpin, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    fn say(&mut self, text: impl Display) -> std::io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Prompt and read one line; `None` at end of input.
    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.lines.next_line().await
    }

    /// Read lines up to one holding only `.`; `None` at end of input
    /// before anything was entered.
    async fn ask_block(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.say(format!("{}（複数行可。「.」だけの行で終了）", prompt))?;
        let mut collected: Vec<String> = Vec::new();
        loop {
            match self.lines.next_line().await? {
                Some(line) if line.trim() == "." => break,
                Some(line) => collected.push(line),
                None if collected.is_empty() => return Ok(None),
                None => break,
            }
        }
        Ok(Some(collected.join("\n")))
    }
}

/// Run the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run_studio<F, R, W>(
    studio: &mut Studio<F>,
    session: &SessionConfig,
    console: &mut Console<R, W>,
) -> std::io::Result<()>
where
    F: GeneratorFactory,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("daihon studio ( help でコマンド一覧 )")?;
    if !studio.is_connected() {
        console.say(Notice::Warning("APIキーを入力してください（key コマンド）".to_string()))?;
    }

    while let Some(line) = console.ask("daihon> ").await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command, "Studio command");

        match command {
            "" => {}
            "quit" | "exit" | "q" => break,
            "help" => console.say(HELP)?,
            "templates" => {
                for info in TemplateRegistry::entries() {
                    console.say(format!(
                        "  {:<11} {} - {}",
                        info.feature().id(),
                        info.name(),
                        info.description()
                    ))?;
                }
            }
            "regen" => {
                let notice = studio.resubmit().await;
                report_generation(studio, console, notice)?;
            }
            "show" => match studio.state().current_text() {
                Some(text) => console.say(text)?,
                None => console.say(Notice::Warning("生成結果がありません".to_string()))?,
            },
            "history" => {
                if studio.state().history().is_empty() {
                    console.say("履歴はまだありません")?;
                }
                let lines: Vec<String> = studio
                    .state()
                    .recent(*session.history_preview())
                    .map(|r| {
                        format!(
                            "#{} [{}] {}: {}",
                            r.sequence(),
                            r.display_time(),
                            r.label(),
                            r.preview(*session.preview_chars())
                        )
                    })
                    .collect();
                for line in lines {
                    console.say(line)?;
                }
            }
            "stats" => match studio.stats() {
                Some(stats) => console.say(format!(
                    "文字数: {} / 行数: {} / 段落数: {}",
                    stats.characters(),
                    stats.lines(),
                    stats.paragraphs()
                ))?,
                None => console.say(Notice::Warning("生成結果がありません".to_string()))?,
            },
            "usage" => {
                let usage = *studio.state().usage();
                console.say(format!(
                    "最新: {} トークン / セッション累計: {} トークン / 呼び出し: {} 回",
                    usage.last_call_tokens(),
                    usage.cumulative_session_tokens(),
                    usage.calls()
                ))?;
            }
            "export" => {
                let dir = if rest.is_empty() {
                    session.export_dir().clone()
                } else {
                    rest.into()
                };
                console.say(studio.save(&dir))?;
            }
            "clear" => {
                studio.clear();
                console.say(Notice::Success("生成結果をクリアしました".to_string()))?;
            }
            "reset" => {
                studio.reset();
                console.say(Notice::Success("セッションをリセットしました".to_string()))?;
            }
            "key" => {
                let secret = if rest.is_empty() {
                    match console.ask("APIキー: ").await? {
                        Some(secret) => secret,
                        None => break,
                    }
                } else {
                    rest.to_string()
                };
                let notice = studio.connect(&secret).await;
                console.say(notice)?;
            }
            other => match other.parse::<Feature>() {
                Ok(feature) => {
                    let Some(record) = fill_form(studio, console, feature).await? else {
                        break;
                    };
                    let params = FeatureParams::from_record(feature, &record);
                    if let Some(hint) = input_hint(&params) {
                        console.say(hint)?;
                    }
                    let notice = studio.submit(params, None).await;
                    report_generation(studio, console, notice)?;
                }
                Err(_) => console.say(Notice::Warning(format!(
                    "不明なコマンドです: {}（help で一覧）",
                    other
                )))?,
            },
        }
    }
    Ok(())
}

/// Ask every question of the feature's form; `None` at end of input.
///
/// A blank script plot falls back to the latest generated plot.
async fn fill_form<F, R, W>(
    studio: &Studio<F>,
    console: &mut Console<R, W>,
    feature: Feature,
) -> std::io::Result<Option<ParameterRecord>>
where
    F: GeneratorFactory,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let latest_plot = match feature {
        Feature::Script => studio
            .state()
            .latest_for(Feature::Plot)
            .map(|r| r.text().clone()),
        _ => None,
    };

    let mut record = ParameterRecord::new();
    for field in form(feature) {
        let answer = match &field.kind {
            FieldKind::Block => {
                let prompt = match (&latest_plot, field.key) {
                    (Some(_), "plot") => format!("{}（空欄で最新のプロットを使用）", field.label),
                    _ => field.label.to_string(),
                };
                console.ask_block(&prompt).await?
            }
            FieldKind::Choice(options) => {
                let prompt = format!("{} [{}]（空欄で既定）: ", field.label, menu(options));
                console
                    .ask(&prompt)
                    .await?
                    .map(|answer| resolve_choice(options, &answer))
            }
            FieldKind::Flag => console.ask(&format!("{} [y/N]: ", field.label)).await?,
            FieldKind::Line | FieldKind::Number => {
                console.ask(&format!("{}: ", field.label)).await?
            }
        };
        let Some(answer) = answer else {
            return Ok(None);
        };

        match (&latest_plot, field.key) {
            (Some(plot), "plot") if answer.trim().is_empty() => {
                record.insert(field.key, plot.as_str());
            }
            _ if field.kind == FieldKind::Flag => {
                let yes = matches!(answer.trim(), "y" | "Y" | "yes" | "はい");
                record.insert(field.key, yes);
            }
            _ => record.insert(field.key, answer),
        }
    }
    Ok(Some(record))
}

fn report_generation<F, R, W>(
    studio: &Studio<F>,
    console: &mut Console<R, W>,
    notice: Notice,
) -> std::io::Result<()>
where
    F: GeneratorFactory,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let succeeded = notice.is_success();
    console.say(notice)?;
    if !succeeded {
        return Ok(());
    }
    if let Some(current) = studio.state().current() {
        console.say("")?;
        console.say(current.text())?;
        console.say("")?;
        console.say(summary(current, studio.state().usage()))?;
    }
    Ok(())
}
