use daihon_core::{CheckLevel, Feature, FeatureParams, ParameterRecord, StoryboardParams};
use daihon_error::{DaihonErrorKind, MissingInputErrorKind};
use daihon_prompts::{UNSET, render, validate};
use strum::IntoEnumIterator;

#[test]
fn every_template_renders_defaults_for_empty_record() {
    for feature in Feature::iter() {
        let prompt = render(&FeatureParams::empty(feature));
        assert!(!prompt.trim().is_empty(), "{feature:?} rendered nothing");
        assert!(prompt.contains(UNSET), "{feature:?} has no default label");
    }
}

#[test]
fn empty_plot_marks_character_world_and_theme_unset() {
    let prompt = render(&FeatureParams::from_record(
        Feature::Plot,
        &ParameterRecord::new(),
    ));
    for name in ["主人公設定", "世界観・設定", "テーマ・メッセージ"] {
        assert!(prompt.contains(&format!("【{name}】: {UNSET}")), "missing {name}");
    }
}

#[test]
fn templates_are_pure() {
    let record = ParameterRecord::new()
        .with("theme", "同僚とのトラブルと予想外の結末")
        .with("style", "work-life")
        .with("length", "long");
    for feature in Feature::iter() {
        let params = FeatureParams::from_record(feature, &record);
        assert_eq!(render(&params), render(&params.clone()));
    }
}

#[test]
fn proofread_embeds_text_and_basic_instruction() {
    let record = ParameterRecord::new()
        .with("text", "こんにちわ")
        .with("level", "basic");
    let prompt = render(&FeatureParams::from_record(Feature::Proofread, &record));
    assert!(prompt.contains("こんにちわ"));
    assert!(prompt.contains(CheckLevel::Basic.instruction()));
}

#[test]
fn free_text_is_inserted_verbatim() {
    let story = "<b>太字</b> & {braces} \"quotes\"\n二行目";
    let record = ParameterRecord::new().with("story", story).with("pages", 7i64);
    let prompt = render(&FeatureParams::from_record(Feature::Storyboard, &record));
    assert!(prompt.contains(story));
    assert!(prompt.contains("【ページ数】: 7ページ"));
}

#[test]
fn unknown_option_renders_like_absent_option() {
    let unknown = ParameterRecord::new()
        .with("text", "原稿")
        .with("focus", "vibes");
    let absent = ParameterRecord::new().with("text", "原稿");
    assert_eq!(
        render(&FeatureParams::from_record(Feature::Critique, &unknown)),
        render(&FeatureParams::from_record(Feature::Critique, &absent)),
    );
}

#[test]
fn validate_rejects_blank_required_fields() {
    for feature in [
        Feature::Script,
        Feature::Proofread,
        Feature::ThemedVideo,
        Feature::Storyboard,
        Feature::Critique,
    ] {
        let err = validate(&FeatureParams::empty(feature)).unwrap_err();
        assert!(err.is_missing_input(), "{feature:?} accepted empty input");
    }
    assert!(validate(&FeatureParams::empty(Feature::Plot)).is_ok());
}

#[test]
fn validate_rejects_out_of_range_pages() {
    let params = FeatureParams::Storyboard(StoryboardParams::default().story("話").pages(0));
    let err = validate(&params).unwrap_err();
    match err.kind() {
        DaihonErrorKind::MissingInput(e) => assert_eq!(
            e.kind,
            MissingInputErrorKind::OutOfRange {
                field: "pages",
                min: 1,
                max: 200,
                value: 0,
            }
        ),
        other => panic!("unexpected error {other:?}"),
    }

    let params = FeatureParams::Storyboard(StoryboardParams::default().story("話").pages(200));
    assert!(validate(&params).is_ok());
}


#[test]
fn validate_rejects_negative_and_oversized_page_counts() {
    for value in [-3i64, 5_000_000_000] {
        let record = ParameterRecord::new().with("story", "話").with("pages", value);
        let err = validate(&FeatureParams::from_record(Feature::Storyboard, &record)).unwrap_err();
        match err.kind() {
            DaihonErrorKind::MissingInput(e) => assert_eq!(
                e.kind,
                MissingInputErrorKind::OutOfRange {
                    field: "pages",
                    min: 1,
                    max: 200,
                    value,
                }
            ),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
