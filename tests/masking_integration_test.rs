//! Integration tests for the detection and masking pipeline

use shroud::config::ShroudConfig;
use shroud::core::MaskingPipeline;
use shroud::domain::{PiiCategory, Source};
use tempfile::TempDir;

fn pipeline_in(dir: &TempDir) -> MaskingPipeline {
    let mut config = ShroudConfig::default();
    config.cache.path = dir.path().join("pii_cache.json");
    MaskingPipeline::from_config(&config).expect("pipeline should build from defaults")
}

#[test]
fn masks_the_documented_contact_example() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    let text = "Contact John Doe at john.doe@email.com or 1234-5678-9876-5432.";
    let outcome = pipeline.process_text(text, false);

    assert_eq!(outcome.source, Source::Processor);
    assert_eq!(
        outcome.findings.get(PiiCategory::FullName).unwrap(),
        &["John Doe".to_string()]
    );
    assert_eq!(
        outcome.findings.get(PiiCategory::Email).unwrap(),
        &["john.doe@email.com".to_string()]
    );
    assert_eq!(
        outcome.findings.get(PiiCategory::CreditDebitNo).unwrap(),
        &["1234-5678-9876-5432".to_string()]
    );

    let shape = regex::Regex::new(
        r"^Contact \[full_name\]_[0-9a-f]{6} at \[email\]_[0-9a-f]{6} or \[credit_debit_no\]_[0-9a-f]{6}\.$",
    )
    .unwrap();
    assert!(
        shape.is_match(&outcome.masked_text),
        "unexpected masked text: {}",
        outcome.masked_text
    );
}

#[test]
fn masks_a_text_with_every_major_category() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    let text = "Contact John Doe at john.doe@email.com or 1234-5678-9876-5432. \
                His Aadhar is 1234 5678 9012 and DOB is 01/01/1990.";
    let outcome = pipeline.process_text(text, false);

    assert!(outcome.findings.get(PiiCategory::FullName).is_some());
    assert!(outcome.findings.get(PiiCategory::Email).is_some());
    assert!(outcome.findings.get(PiiCategory::CreditDebitNo).is_some());
    assert!(outcome
        .findings
        .get(PiiCategory::AadharNum)
        .unwrap()
        .contains(&"1234 5678 9012".to_string()));
    assert!(outcome.findings.get(PiiCategory::Dob).is_some());

    let masked = &outcome.masked_text;
    assert!(masked.contains("[full_name]_"));
    assert!(masked.contains("[email]_"));
    assert!(masked.contains("[credit_debit_no]_"));
    assert!(masked.contains("[aadhar_num]_"));
    assert!(masked.contains("[dob]_"));
    assert!(!masked.contains("John Doe"));
    assert!(!masked.contains("john.doe@email.com"));
    assert!(!masked.contains("1234 5678 9012"));
    assert!(!masked.contains("01/01/1990"));
}

#[test]
fn overlapping_matches_collapse_to_one_token() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    // The card number contains an Aadhaar-shaped 12-digit prefix; both
    // categories match overlapping ranges of the same digits.
    let text = "pay 1234-5678-9876-5432 today";
    let outcome = pipeline.process_text(text, false);

    assert!(outcome.findings.get(PiiCategory::AadharNum).is_some());
    assert!(outcome.findings.get(PiiCategory::CreditDebitNo).is_some());

    // Exactly one merged token covers the overlap, with the surrounding
    // text byte-for-byte intact.
    assert_eq!(outcome.masked_text.matches('[').count(), 1);
    assert!(outcome.masked_text.starts_with("pay [credit_debit_no]_"));
    assert!(outcome.masked_text.ends_with(" today"));
    for digits in ["1234", "5678", "9876", "5432"] {
        assert!(
            !outcome.masked_text.contains(digits),
            "residual digits {digits} in: {}",
            outcome.masked_text
        );
    }
}

#[test]
fn expiry_inside_dob_resolves_to_the_longer_date() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    // "01/01" satisfies the expiry rule while the full string is a DOB
    let outcome = pipeline.process_text("born 01/01/1990 ok", false);

    assert!(outcome.findings.get(PiiCategory::Dob).is_some());
    assert_eq!(outcome.masked_text.matches('[').count(), 1);
    assert!(
        outcome.masked_text.contains("[dob]_"),
        "got: {}",
        outcome.masked_text
    );
    assert!(!outcome.masked_text.contains("1990"));
}

#[test]
fn repeated_values_share_one_token_per_pipeline() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    let first = pipeline.process_text("mail a@b.com please", false);
    let second = pipeline.process_text("again a@b.com thanks", false);

    let token_of = |s: &str| {
        let start = s.find("[email]_").unwrap();
        s[start..start + "[email]_".len() + 6].to_string()
    };

    assert_eq!(token_of(&first.masked_text), token_of(&second.masked_text));
}

#[test]
fn clean_text_passes_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    let outcome = pipeline.process_text("no sensitive content here", false);

    assert_eq!(outcome.masked_text, "no sensitive content here");
    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.source, Source::Processor);
}

#[test]
fn unicode_text_survives_masking_intact() {
    let dir = TempDir::new().unwrap();
    let mut pipeline = pipeline_in(&dir);

    let text = "überweisung an a@b.com — danke";
    let outcome = pipeline.process_text(text, false);

    assert!(outcome.masked_text.starts_with("überweisung an [email]_"));
    assert!(outcome.masked_text.ends_with(" — danke"));
}
