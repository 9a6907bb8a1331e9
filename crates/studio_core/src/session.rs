use std::collections::BTreeMap;

use crate::{ArtifactPlan, Category, ResultPayload};

/// Per-job result cache: the last payload received for each category.
///
/// Write path during streaming, read path at `done` and after. Constructed
/// on submit and dropped with the job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionResults {
    map: BTreeMap<Category, ResultPayload>,
}

impl SessionResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payload for a category, replacing any earlier one.
    pub fn record(&mut self, category: Category, payload: ResultPayload) {
        self.map.insert(category, payload);
    }

    pub fn get(&self, category: Category) -> Option<&ResultPayload> {
        self.map.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &ResultPayload)> {
        self.map.iter()
    }
}

/// Cross-category aggregate computed once at `done`.
///
/// Any absent category contributes a neutral default rather than failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverallScores {
    pub idea: f64,
    pub market: f64,
    pub financial: f64,
    pub future: f64,
    pub tam: Option<String>,
    pub growth_rate: Option<String>,
    pub market_cap: Option<String>,
}

impl OverallScores {
    pub fn from_results(results: &SessionResults) -> Self {
        let mut scores = Self::default();
        if let Some(ResultPayload::Idea(idea)) = results.get(Category::IdeaAnalysis) {
            scores.idea = idea.overall_rating;
        }
        if let Some(ResultPayload::Market(market)) = results.get(Category::MarketAnalysis) {
            scores.market = market.market_score;
            scores.tam = market.tam.clone();
            scores.growth_rate = market.growth_rate.clone();
        }
        if let Some(ResultPayload::Financial(financial)) = results.get(Category::FinancialAnalysis)
        {
            scores.financial = financial.financial_score;
            scores.market_cap = financial.market_cap_potential.clone();
        }
        if let Some(ResultPayload::Future(future)) = results.get(Category::FutureAnalysis) {
            scores.future = future.future_score;
        }
        scores
    }
}

/// What a copy action reads from the session results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    BestCaption,
    AllCaptions,
    BestHook,
    BestBio,
    AllHashtags,
    RecommendedHashtags,
    BestTitle,
    AllTitles,
    AllTags,
    FrontendCode,
    BackendCode,
}

/// Derive the clipboard text for a target from the recorded results.
/// Returns `None` when the backing category has not arrived.
pub fn copy_text_for(target: CopyTarget, results: &SessionResults) -> Option<String> {
    match target {
        CopyTarget::BestCaption => match results.get(Category::Captions)? {
            ResultPayload::Captions(set) => set.best_caption.clone(),
            _ => None,
        },
        CopyTarget::AllCaptions => match results.get(Category::Captions)? {
            ResultPayload::Captions(set) if !set.captions.is_empty() => Some(
                set.captions
                    .iter()
                    .map(|c| c.text().to_string())
                    .collect::<Vec<_>>()
                    .join("\n\n---\n\n"),
            ),
            _ => None,
        },
        CopyTarget::BestHook => match results.get(Category::Hooks)? {
            ResultPayload::Hooks(set) => set.best_hook.clone(),
            _ => None,
        },
        CopyTarget::BestBio => match results.get(Category::Bio)? {
            ResultPayload::Bio(set) => set.best_bio.clone(),
            _ => None,
        },
        CopyTarget::AllHashtags => {
            let all = match results
                .get(Category::Hashtags)
                .or_else(|| results.get(Category::VideoHashtags))?
            {
                ResultPayload::Hashtags(set) => &set.all_hashtags,
                ResultPayload::VideoHashtags(set) => &set.all_hashtags,
                _ => return None,
            };
            (!all.is_empty()).then(|| all.join(" "))
        }
        CopyTarget::RecommendedHashtags => {
            let recommended = match results
                .get(Category::Hashtags)
                .or_else(|| results.get(Category::VideoHashtags))?
            {
                ResultPayload::Hashtags(set) => &set.recommended_set,
                ResultPayload::VideoHashtags(set) => &set.recommended_combination,
                _ => return None,
            };
            (!recommended.is_empty()).then(|| recommended.join(" "))
        }
        CopyTarget::BestTitle => match results.get(Category::Titles)? {
            ResultPayload::Titles(set) => set.best_title.clone(),
            _ => None,
        },
        CopyTarget::AllTitles => match results.get(Category::Titles)? {
            ResultPayload::Titles(set) if !set.titles.is_empty() => Some(
                set.titles
                    .iter()
                    .map(|t| t.title().to_string())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            ),
            _ => None,
        },
        CopyTarget::AllTags => match results.get(Category::Tags)? {
            ResultPayload::Tags(set) if !set.all_tags.is_empty() => Some(set.all_tags.join(", ")),
            _ => None,
        },
        CopyTarget::FrontendCode => match results.get(Category::FrontendCode)? {
            ResultPayload::Code(code) => Some(code.clone()),
            _ => None,
        },
        CopyTarget::BackendCode => match results.get(Category::BackendCode)? {
            ResultPayload::Code(code) => Some(code.clone()),
            _ => None,
        },
    }
}

/// Exportable artifacts recorded in the session, with their fixed
/// filename/MIME pairs.
pub fn artifact_plans(results: &SessionResults) -> Vec<ArtifactPlan> {
    let mut plans = Vec::new();
    if let Some(ResultPayload::Code(code)) = results.get(Category::FrontendCode) {
        plans.push(ArtifactPlan {
            filename: "index.html".to_string(),
            mime: "text/html".to_string(),
            content: code.clone(),
        });
    }
    if let Some(ResultPayload::Code(code)) = results.get(Category::BackendCode) {
        plans.push(ArtifactPlan {
            filename: "app.py".to_string(),
            mime: "text/x-python".to_string(),
            content: code.clone(),
        });
    }
    plans
}
