use serde::Deserialize;

/// A caption either as a bare string (older backend revisions) or as an
/// object with scoring metadata. Both shapes are kept; `text()` normalizes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CaptionEntry {
    Plain(String),
    Detailed {
        #[serde(default)]
        text: String,
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        engagement_score: Option<f64>,
    },
}

impl CaptionEntry {
    pub fn text(&self) -> &str {
        match self {
            CaptionEntry::Plain(text) => text,
            CaptionEntry::Detailed { text, .. } => text,
        }
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            CaptionEntry::Plain(_) => None,
            CaptionEntry::Detailed { kind, .. } => kind.as_deref(),
        }
    }

    pub fn engagement_score(&self) -> Option<f64> {
        match self {
            CaptionEntry::Plain(_) => None,
            CaptionEntry::Detailed {
                engagement_score, ..
            } => *engagement_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CaptionSet {
    pub best_caption: Option<String>,
    pub captions: Vec<CaptionEntry>,
    pub caption_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HashtagSet {
    pub recommended_set: Vec<String>,
    pub trending_hashtags: Vec<String>,
    pub medium_hashtags: Vec<String>,
    pub niche_hashtags: Vec<String>,
    pub branded_hashtags: Vec<String>,
    pub all_hashtags: Vec<String>,
    pub hashtag_strategy: Option<String>,
    /// 0-10.
    pub viral_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HookEntry {
    Plain(String),
    Detailed {
        #[serde(default)]
        hook: String,
        #[serde(default)]
        psychology: Option<String>,
    },
}

impl HookEntry {
    pub fn hook(&self) -> &str {
        match self {
            HookEntry::Plain(hook) => hook,
            HookEntry::Detailed { hook, .. } => hook,
        }
    }

    pub fn psychology(&self) -> Option<&str> {
        match self {
            HookEntry::Plain(_) => None,
            HookEntry::Detailed { psychology, .. } => psychology.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CtaEntry {
    Plain(String),
    Detailed {
        #[serde(default)]
        cta: String,
        #[serde(default)]
        action: Option<String>,
    },
}

impl CtaEntry {
    pub fn cta(&self) -> &str {
        match self {
            CtaEntry::Plain(cta) => cta,
            CtaEntry::Detailed { cta, .. } => cta,
        }
    }

    pub fn action(&self) -> Option<&str> {
        match self {
            CtaEntry::Plain(_) => None,
            CtaEntry::Detailed { action, .. } => action.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HookSet {
    pub best_hook: Option<String>,
    pub best_cta: Option<String>,
    pub caption_hooks: Vec<HookEntry>,
    pub ctas: Vec<CtaEntry>,
    pub story_hooks: Vec<String>,
    pub comment_prompts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReelScript {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub script: Option<String>,
    pub hook: Option<String>,
    pub music_suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StorySequence {
    pub sequence_title: Option<String>,
    pub slides: Vec<String>,
    pub engagement_tactic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CarouselStructure {
    pub title: Option<String>,
    pub slides: Vec<String>,
    pub design_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ScriptSet {
    pub reel_scripts: Vec<ReelScript>,
    pub story_sequences: Vec<StorySequence>,
    pub carousel_structure: Option<CarouselStructure>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BioEntry {
    Plain(String),
    Detailed {
        #[serde(default)]
        bio: String,
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        conversion_score: Option<f64>,
    },
}

impl BioEntry {
    pub fn bio(&self) -> &str {
        match self {
            BioEntry::Plain(bio) => bio,
            BioEntry::Detailed { bio, .. } => bio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BioSet {
    pub best_bio: Option<String>,
    pub bio_variations: Vec<BioEntry>,
    pub name_suggestions: Vec<String>,
    pub link_text: Option<String>,
    pub highlight_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CalendarDay {
    pub day: Option<String>,
    pub content_type: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ContentStrategy {
    pub posting_times: Vec<String>,
    /// 0-10.
    pub viral_potential: f64,
    pub success_metrics: Vec<String>,
    pub engagement_tactics: Vec<String>,
    pub algorithm_tips: Vec<String>,
    pub growth_hacks: Vec<String>,
    pub content_calendar: Vec<CalendarDay>,
}
