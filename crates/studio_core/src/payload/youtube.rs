use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TrendAnalysis {
    pub trending_topics: Vec<String>,
    pub search_keywords: Vec<String>,
    pub competition_level: Option<String>,
    /// 0-10.
    pub opportunity_score: f64,
    pub viral_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TitleEntry {
    Plain(String),
    Detailed {
        #[serde(default)]
        title: String,
        #[serde(default)]
        score: Option<f64>,
        #[serde(default)]
        strategy: Option<String>,
    },
}

impl TitleEntry {
    pub fn title(&self) -> &str {
        match self {
            TitleEntry::Plain(title) => title,
            TitleEntry::Detailed { title, .. } => title,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            TitleEntry::Plain(_) => None,
            TitleEntry::Detailed { score, .. } => *score,
        }
    }

    pub fn strategy(&self) -> Option<&str> {
        match self {
            TitleEntry::Plain(_) => None,
            TitleEntry::Detailed { strategy, .. } => strategy.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TitleSet {
    pub best_title: Option<String>,
    pub titles: Vec<TitleEntry>,
    pub title_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TagSet {
    pub primary_tags: Vec<String>,
    pub secondary_tags: Vec<String>,
    pub long_tail_tags: Vec<String>,
    pub trending_tags: Vec<String>,
    pub all_tags: Vec<String>,
    pub tag_strategy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct VideoHashtagSet {
    pub recommended_combination: Vec<String>,
    pub trending_hashtags: Vec<String>,
    pub niche_hashtags: Vec<String>,
    pub branded_hashtags: Vec<String>,
    pub evergreen_hashtags: Vec<String>,
    pub all_hashtags: Vec<String>,
    pub hashtag_strategy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct VideoStrategy {
    pub description_template: Option<String>,
    pub thumbnail_tips: Vec<String>,
    pub cta_suggestions: Vec<String>,
    pub engagement_tactics: Vec<String>,
    pub best_posting_times: Vec<String>,
    pub series_ideas: Vec<String>,
    /// 0-10.
    pub growth_score: f64,
    pub pro_tips: Vec<String>,
}
