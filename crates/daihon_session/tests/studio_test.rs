mod test_utils;

use daihon_core::{
    Feature, FeatureParams, ParameterRecord, PlotParams, ScriptParams, ThemedVideoParams,
};
use daihon_error::{CredentialErrorKind, DaihonErrorKind, MissingInputErrorKind};
use daihon_session::{GenerationSettings, Notice, Studio, export_filename, input_hint};
use std::sync::Arc;
use test_utils::{StubBackend, StubFactory, StubReply};

fn studio(replies: impl IntoIterator<Item = StubReply>) -> (Studio<StubFactory>, Arc<StubBackend>) {
    let backend = StubBackend::new(replies);
    let studio = Studio::new(
        StubFactory::new(Arc::clone(&backend)),
        GenerationSettings::default(),
    );
    (studio, backend)
}

fn video(theme: &str) -> FeatureParams {
    FeatureParams::ThemedVideo(ThemedVideoParams::default().theme(theme))
}

#[tokio::test]
async fn generation_requires_credential() {
    let (mut studio, backend) = studio([StubReply::text("unused", 1)]);

    let err = studio.generate(video("テーマ"), None).await.unwrap_err();
    assert!(err.is_credential());
    assert_eq!(backend.calls(), 0);
    assert!(studio.state().replay().is_none());
}

#[tokio::test]
async fn unchanged_credential_keeps_handle() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([]);

    studio.set_credential("key-1").await?;
    studio.set_credential(" key-1 ").await?;
    assert_eq!(studio.factory().connects(), 1);
    assert_eq!(backend.verifications(), 1);

    studio.set_credential("key-2").await?;
    assert_eq!(studio.factory().connects(), 2);
    assert_eq!(studio.generator().map(|g| g.key()), Some("key-2"));
    Ok(())
}

#[tokio::test]
async fn rejected_credential_blocks_generation() {
    let (mut studio, backend) = studio([StubReply::text("unused", 1)]);

    let err = studio.set_credential("bad-key").await.unwrap_err();
    match err.kind() {
        DaihonErrorKind::Credential(e) => {
            assert!(matches!(e.kind, CredentialErrorKind::Rejected(_)))
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(!studio.is_connected());

    let err = studio.generate(video("テーマ"), None).await.unwrap_err();
    assert!(err.is_credential());
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn blank_credential_disconnects() -> anyhow::Result<()> {
    let (mut studio, _backend) = studio([]);
    studio.set_credential("key").await?;
    assert!(studio.is_connected());

    let notice = studio.connect("   ").await;
    assert_eq!(notice, Notice::Warning("APIキーを入力してください".to_string()));
    assert!(!studio.is_connected());
    Ok(())
}

#[tokio::test]
async fn missing_input_makes_no_call() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([StubReply::text("unused", 1)]);
    studio.set_credential("key").await?;

    let err = studio
        .generate(FeatureParams::Script(ScriptParams::default().plot("   ")), None)
        .await
        .unwrap_err();
    assert!(err.is_missing_input());
    assert_eq!(backend.calls(), 0);
    assert!(studio.state().replay().is_none());
    assert!(studio.state().history().is_empty());
    Ok(())
}

#[tokio::test]
async fn negative_page_count_makes_no_call() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([StubReply::text("unused", 1)]);
    studio.set_credential("key").await?;

    let record = ParameterRecord::new().with("story", "あらすじ").with("pages", -3i64);
    let err = studio
        .generate_from_record(Feature::Storyboard, &record)
        .await
        .unwrap_err();
    match err.kind() {
        DaihonErrorKind::MissingInput(e) => {
            assert!(matches!(e.kind, MissingInputErrorKind::OutOfRange { value: -3, .. }))
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(backend.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn regenerate_without_history_warns_and_makes_no_call() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([StubReply::text("unused", 1)]);
    studio.set_credential("key").await?;

    let err = studio.regenerate().await.unwrap_err();
    match err.kind() {
        DaihonErrorKind::MissingInput(e) => {
            assert_eq!(e.kind, MissingInputErrorKind::NothingToReplay)
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(
        studio.resubmit().await,
        Notice::Warning("再生成するパラメータが見つかりません".to_string())
    );
    assert_eq!(backend.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn regenerate_after_failure_retries_same_prompt() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([
        StubReply::quota_exceeded(),
        StubReply::text("スレタイ：同僚が…", 30),
    ]);
    studio.set_credential("key").await?;

    let notice = studio.submit(video("同僚とのトラブルと予想外の結末"), None).await;
    assert!(matches!(notice, Notice::Error(_)));
    assert!(studio.state().history().is_empty());

    assert_eq!(studio.resubmit().await, Notice::regenerated());
    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], prompts[1]);

    let record = &studio.state().history()[0];
    assert_eq!(record.label(), "2ch動画");
    assert_eq!(*studio.state().usage().cumulative_session_tokens(), 30);
    Ok(())
}

#[tokio::test]
async fn script_can_reuse_latest_plot() -> anyhow::Result<()> {
    let (mut studio, backend) = studio([
        StubReply::text("古いプロット", 5),
        StubReply::text("新しいプロット", 5),
        StubReply::text("台本本文", 5),
    ]);
    studio.set_credential("key").await?;

    let plot = FeatureParams::Plot(PlotParams::default().title("青春の記憶"));
    studio.generate(plot.clone(), None).await?;
    studio.generate(plot, None).await?;

    let latest = studio
        .state()
        .latest_for(Feature::Plot)
        .map(|r| r.text().clone())
        .unwrap_or_default();
    let record = ParameterRecord::new().with("plot", latest);
    studio.generate_from_record(Feature::Script, &record).await?;

    assert!(backend.prompts()[2].contains("新しいプロット"));
    assert_eq!(studio.state().history().len(), 3);
    Ok(())
}

#[tokio::test]
async fn clear_keeps_history_and_reset_forgets_it() -> anyhow::Result<()> {
    let (mut studio, _backend) = studio([StubReply::text("本文\n\n二段落目", 8)]);
    studio.set_credential("key").await?;
    studio.generate(video("テーマ"), None).await?;

    let stats = studio.stats().unwrap();
    assert_eq!(*stats.paragraphs(), 2);

    studio.clear();
    assert!(studio.state().current().is_none());
    assert!(studio.stats().is_none());
    assert_eq!(studio.state().history().len(), 1);
    assert_eq!(*studio.state().usage().cumulative_session_tokens(), 8);

    studio.reset();
    assert!(studio.state().history().is_empty());
    assert_eq!(*studio.state().usage().cumulative_session_tokens(), 0);
    assert!(studio.is_connected());
    Ok(())
}

#[tokio::test]
async fn export_writes_current_result() -> anyhow::Result<()> {
    let (mut studio, _backend) = studio([StubReply::text("書き出す本文", 3)]);
    let dir = tempfile::tempdir()?;

    let notice = studio.save(dir.path());
    assert!(matches!(notice, Notice::Warning(_)));

    studio.set_credential("key").await?;
    studio.generate(video("テーマ"), None).await?;

    let path = studio.export(&dir.path().join("out"))?;
    let expected_name = export_filename(studio.state().current().unwrap());
    assert_eq!(path.file_name().unwrap().to_str(), Some(expected_name.as_str()));
    assert!(expected_name.starts_with("generated_content_"));
    assert!(expected_name.ends_with(".txt"));
    assert_eq!(std::fs::read_to_string(&path)?, "書き出す本文");
    Ok(())
}

#[tokio::test]
async fn session_stays_usable_after_errors() -> anyhow::Result<()> {
    let (mut studio, _backend) = studio([
        StubReply::quota_exceeded(),
        StubReply::text("最終的に成功", 4),
    ]);
    assert!(matches!(studio.submit(video("x"), None).await, Notice::Warning(_)));
    studio.set_credential("key").await?;
    assert!(matches!(studio.submit(video(""), None).await, Notice::Error(_)));
    assert!(matches!(studio.submit(video("x"), None).await, Notice::Error(_)));
    assert_eq!(
        studio.submit(video("x"), Some("動画".to_string())).await,
        Notice::generated(Feature::ThemedVideo)
    );
    assert_eq!(studio.state().history()[0].label(), "動画");
    Ok(())
}

#[test]
fn empty_plot_gets_a_hint() {
    assert!(input_hint(&FeatureParams::empty(Feature::Plot)).is_some());
    let plot = FeatureParams::Plot(PlotParams::default().theme("友情"));
    assert!(input_hint(&plot).is_none());
    assert!(input_hint(&video("x")).is_none());
}
