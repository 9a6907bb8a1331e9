use serde_json::json;

use studio_core::payload::instagram::{CaptionEntry, CaptionSet, HashtagSet};
use studio_core::payload::youtube::TagSet;
use studio_core::{
    artifact_plans, copy_text_for, Category, CopyTarget, OverallScores, ResultPayload,
    SessionResults,
};

fn captions(best: &str, texts: &[&str]) -> ResultPayload {
    ResultPayload::Captions(CaptionSet {
        best_caption: Some(best.to_string()),
        captions: texts
            .iter()
            .map(|t| CaptionEntry::Plain(t.to_string()))
            .collect(),
        caption_tips: Vec::new(),
    })
}

#[test]
fn record_is_last_write_wins() {
    let mut results = SessionResults::new();
    results.record(Category::Captions, captions("first", &["a"]));
    results.record(Category::Captions, captions("second", &["b", "c"]));

    match results.get(Category::Captions) {
        Some(ResultPayload::Captions(set)) => {
            assert_eq!(set.best_caption.as_deref(), Some("second"));
            assert_eq!(set.captions.len(), 2);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
    assert_eq!(results.iter().count(), 1);
}

#[test]
fn aggregates_tolerate_missing_categories() {
    let scores = OverallScores::from_results(&SessionResults::new());
    assert_eq!(scores.idea, 0.0);
    assert_eq!(scores.market, 0.0);
    assert_eq!(scores.financial, 0.0);
    assert_eq!(scores.future, 0.0);
    assert_eq!(scores.tam, None);
    assert_eq!(scores.market_cap, None);
}

#[test]
fn aggregates_read_the_recorded_payloads() {
    let mut results = SessionResults::new();
    results.record(
        Category::FinancialAnalysis,
        ResultPayload::Financial(
            serde_json::from_value(json!({
                "financial_score": 7,
                "market_cap_potential": "$500M",
            }))
            .unwrap(),
        ),
    );

    let scores = OverallScores::from_results(&results);
    assert_eq!(scores.financial, 7.0);
    assert_eq!(scores.market_cap.as_deref(), Some("$500M"));
    assert_eq!(scores.idea, 0.0);
}

#[test]
fn copy_targets_join_like_the_results_page() {
    let mut results = SessionResults::new();
    results.record(Category::Captions, captions("best one", &["one", "two"]));
    results.record(
        Category::Hashtags,
        ResultPayload::Hashtags(HashtagSet {
            all_hashtags: vec!["#a".to_string(), "#b".to_string()],
            recommended_set: vec!["#a".to_string()],
            ..HashtagSet::default()
        }),
    );
    results.record(
        Category::Tags,
        ResultPayload::Tags(TagSet {
            all_tags: vec!["rust".to_string(), "tutorial".to_string()],
            ..TagSet::default()
        }),
    );

    assert_eq!(
        copy_text_for(CopyTarget::BestCaption, &results).as_deref(),
        Some("best one")
    );
    assert_eq!(
        copy_text_for(CopyTarget::AllCaptions, &results).as_deref(),
        Some("one\n\n---\n\ntwo")
    );
    assert_eq!(
        copy_text_for(CopyTarget::AllHashtags, &results).as_deref(),
        Some("#a #b")
    );
    assert_eq!(
        copy_text_for(CopyTarget::RecommendedHashtags, &results).as_deref(),
        Some("#a")
    );
    assert_eq!(
        copy_text_for(CopyTarget::AllTags, &results).as_deref(),
        Some("rust, tutorial")
    );
}

#[test]
fn copy_targets_without_data_yield_none() {
    let results = SessionResults::new();
    assert_eq!(copy_text_for(CopyTarget::AllCaptions, &results), None);
    assert_eq!(copy_text_for(CopyTarget::FrontendCode, &results), None);

    // Recorded but empty lists also yield nothing to copy.
    let mut results = SessionResults::new();
    results.record(
        Category::Hashtags,
        ResultPayload::Hashtags(HashtagSet::default()),
    );
    assert_eq!(copy_text_for(CopyTarget::AllHashtags, &results), None);
}

#[test]
fn artifacts_use_fixed_filename_mime_pairs() {
    let mut results = SessionResults::new();
    results.record(
        Category::FrontendCode,
        ResultPayload::Code("<html></html>".to_string()),
    );
    results.record(
        Category::BackendCode,
        ResultPayload::Code("app = Flask(__name__)".to_string()),
    );

    let plans = artifact_plans(&results);
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].filename, "index.html");
    assert_eq!(plans[0].mime, "text/html");
    assert_eq!(plans[1].filename, "app.py");
    assert_eq!(plans[1].mime, "text/x-python");

    assert!(artifact_plans(&SessionResults::new()).is_empty());
}
