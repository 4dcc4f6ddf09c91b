use async_trait::async_trait;
use daihon::{
    DaihonConfig, DaihonResult, Feature, FeatureParams, GenerateRequest, GenerateResponse,
    GenerationSettings, GeneratorFactory, ParameterRecord, Studio, TextGenerator, TokenUsage,
    render,
};

#[derive(Debug, Clone, Default)]
struct Echo;

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, request: &GenerateRequest) -> DaihonResult<GenerateResponse> {
        let tokens = request.prompt.chars().count() as u64;
        Ok(GenerateResponse::new(
            request.prompt.clone(),
            Some(TokenUsage::total(tokens)),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

impl GeneratorFactory for Echo {
    type Generator = Echo;

    fn connect(&self, _credential: &str) -> DaihonResult<Echo> {
        Ok(Echo)
    }
}

#[tokio::test]
async fn facade_runs_a_storyboard_session() -> anyhow::Result<()> {
    let mut studio = Studio::new(Echo, GenerationSettings::default());
    studio.set_credential("any").await?;

    let record = ParameterRecord::new()
        .with("story", "夏祭りの夜、幼なじみと再会する")
        .with("pages", 8u32);
    let result = studio
        .generate_from_record(Feature::Storyboard, &record)
        .await?;

    let expected = render(&FeatureParams::from_record(Feature::Storyboard, &record));
    assert_eq!(result.text(), &expected);
    assert!(expected.contains("8ページ"));
    assert_eq!(
        *studio.state().usage().cumulative_session_tokens(),
        expected.chars().count() as u64
    );
    Ok(())
}

#[test]
fn config_file_overrides_model() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("daihon.toml");
    std::fs::write(&path, "[gemini]\nmodel = \"gemini-1.5-flash\"\n")?;

    let config = DaihonConfig::from_file(&path)?;
    assert_eq!(config.gemini().model(), "gemini-1.5-flash");
    assert_eq!(
        config.gemini().endpoint(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
    );
    Ok(())
}
