//! Edge-case tests for the masking pipeline boundary behavior

use shroud::config::ShroudConfig;
use shroud::core::MaskingPipeline;
use shroud::domain::Source;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> ShroudConfig {
    let mut config = ShroudConfig::default();
    config.cache.path = dir.path().join("pii_cache.json");
    config
}

#[test]
fn blank_input_is_rejected_before_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = MaskingPipeline::from_config(&config_in(&dir)).unwrap();

    let outcome = pipeline.process_text("   \t  ", true);

    assert_eq!(outcome.source, Source::Error);
    assert_eq!(outcome.masked_text, "   \t  ");
    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.category, "Unknown");
    assert!(pipeline.cache().is_empty());
}

#[test]
fn overlong_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = MaskingPipeline::from_config(&config_in(&dir)).unwrap();

    let text = "a@b.com ".repeat(2_000);
    let outcome = pipeline.process_text(&text, true);

    assert_eq!(outcome.source, Source::Error);
    assert_eq!(outcome.masked_text, text);
}

#[test]
fn custom_length_limits_are_honored() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.validation.min_length = 10;
    config.validation.max_length = 20;
    let mut pipeline = MaskingPipeline::from_config(&config).unwrap();

    assert_eq!(pipeline.process_text("short", true).source, Source::Error);
    assert_eq!(
        pipeline.process_text("just long enough", true).source,
        Source::Processor
    );
}

#[test]
fn cache_bypass_never_touches_the_store() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = MaskingPipeline::from_config(&config_in(&dir)).unwrap();

    pipeline.process_text("mail a@b.com", false);
    let second = pipeline.process_text("mail a@b.com", false);

    assert_eq!(second.source, Source::Processor);
    assert!(pipeline.cache().is_empty());
    assert!(!pipeline.cache().store_path().exists());
}

#[test]
fn classifier_labels_ride_along_with_masking() {
    let dir = TempDir::new().unwrap();
    let model_path = dir.path().join("classifier.json");
    let artifact = serde_json::json!({
        "classes": ["billing", "support"],
        "vocabulary": {"invoice": 0, "refund": 1, "password": 2},
        "coefficients": [[2.0, 1.5, -1.0], [-1.0, -0.5, 2.0]],
        "intercepts": [0.1, 0.0],
    });
    std::fs::write(&model_path, artifact.to_string()).unwrap();

    let mut config = config_in(&dir);
    config.classifier.model_path = Some(model_path);
    let mut pipeline = MaskingPipeline::from_config(&config).unwrap();

    let outcome = pipeline.process_text("Refund the invoice for a@b.com", true);

    assert_eq!(outcome.category, "billing");
    assert!(outcome.masked_text.contains("[email]_"));

    // The label is recomputed on cache hits too
    let cached = pipeline.process_text("Refund the invoice for a@b.com", true);
    assert_eq!(cached.source, Source::Cache);
    assert_eq!(cached.category, "billing");
}

#[test]
fn custom_pattern_library_replaces_the_builtin_rules() {
    let dir = TempDir::new().unwrap();
    let library_path = dir.path().join("patterns.toml");
    std::fs::write(
        &library_path,
        r#"
        [patterns.email]
        category = "email"
        patterns = ['\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b']
        "#,
    )
    .unwrap();

    let mut config = config_in(&dir);
    config.detector.pattern_library = Some(library_path);
    let mut pipeline = MaskingPipeline::from_config(&config).unwrap();

    // Only the email rule exists: the name stays, the email is masked
    let outcome = pipeline.process_text("Contact John Doe at a@b.com", false);
    assert!(outcome.masked_text.contains("John Doe"));
    assert!(outcome.masked_text.contains("[email]_"));
}

#[test]
fn missing_pattern_library_fails_pipeline_construction() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.detector.pattern_library = Some(dir.path().join("nope.toml"));

    assert!(MaskingPipeline::from_config(&config).is_err());
}
