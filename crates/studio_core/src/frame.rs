use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::payload::{
    analyzer::{
        CompetitorAnalysis, FinancialAnalysis, FutureAnalysis, IdeaAnalysis, MarketAnalysis,
        SwotAnalysis,
    },
    instagram::{BioSet, CaptionSet, ContentStrategy, HashtagSet, HookSet, ScriptSet},
    youtube::{TagSet, TitleSet, TrendAnalysis, VideoHashtagSet, VideoStrategy},
};
use crate::ToolKind;

/// A named result subsection tracked independently in session state.
///
/// `hashtags` and `strategy` frames carry different payload shapes per tool,
/// so the Instagram and YouTube variants are distinct categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    FrontendCode,
    BackendCode,
    IdeaAnalysis,
    CompetitorAnalysis,
    MarketAnalysis,
    FinancialAnalysis,
    SwotAnalysis,
    FutureAnalysis,
    Captions,
    Hashtags,
    Hooks,
    Scripts,
    Bio,
    Strategy,
    TrendAnalysis,
    Titles,
    Tags,
    VideoHashtags,
    VideoStrategy,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::FrontendCode => "Frontend Code",
            Category::BackendCode => "Backend Code",
            Category::IdeaAnalysis => "Idea Analysis",
            Category::CompetitorAnalysis => "Competitor Analysis",
            Category::MarketAnalysis => "Market Analysis",
            Category::FinancialAnalysis => "Financial Analysis",
            Category::SwotAnalysis => "SWOT Analysis",
            Category::FutureAnalysis => "Future Outlook",
            Category::Captions => "Captions",
            Category::Hashtags => "Hashtags",
            Category::Hooks => "Hooks & CTAs",
            Category::Scripts => "Scripts",
            Category::Bio => "Bio",
            Category::Strategy => "Content Strategy",
            Category::TrendAnalysis => "Trend Analysis",
            Category::Titles => "Titles",
            Category::Tags => "Tags",
            Category::VideoHashtags => "Hashtags",
            Category::VideoStrategy => "Video Strategy",
        }
    }
}

/// The last payload received for a category.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPayload {
    Code(String),
    Idea(IdeaAnalysis),
    Competitor(CompetitorAnalysis),
    Market(MarketAnalysis),
    Financial(FinancialAnalysis),
    Swot(SwotAnalysis),
    Future(FutureAnalysis),
    Captions(CaptionSet),
    Hashtags(HashtagSet),
    Hooks(HookSet),
    Scripts(ScriptSet),
    Bio(BioSet),
    Strategy(ContentStrategy),
    Trends(TrendAnalysis),
    Titles(TitleSet),
    Tags(TagSet),
    VideoHashtags(VideoHashtagSet),
    VideoStrategy(VideoStrategy),
}

/// One inbound frame after normalization at the decode boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// Human-readable progress label plus a 0-100 percentage.
    Status {
        label: String,
        progress: Option<f64>,
    },
    /// A chat transcript line attributed to an agent.
    Chat { agent: String, text: String },
    /// A domain result for one category.
    Result {
        category: Category,
        payload: Box<ResultPayload>,
    },
    /// Explicit failure reported by the backend. Terminal.
    Error { text: String },
    /// Terminal success marker.
    Done,
    /// Unrecognized frame type; dispatch ignores it.
    Unknown,
}

/// Normalize a raw frame into a [`FrameEvent`] for the given tool.
///
/// Unknown `type` values and payloads that do not decode map to
/// [`FrameEvent::Unknown`]; partially-missing fields decode to defaults.
pub fn decode_frame(
    kind: ToolKind,
    frame_type: &str,
    agent: Option<&str>,
    text: Option<&str>,
    progress: Option<f64>,
    data: Option<&Value>,
) -> FrameEvent {
    match frame_type {
        "status" => FrameEvent::Status {
            label: text.unwrap_or("Working...").to_string(),
            progress,
        },
        "msg" => FrameEvent::Chat {
            agent: agent.unwrap_or("System").to_string(),
            text: text.unwrap_or_default().to_string(),
        },
        "error" => FrameEvent::Error {
            text: text.unwrap_or("Unknown error").to_string(),
        },
        "done" => FrameEvent::Done,
        other => decode_result(kind, other, text, data),
    }
}

fn decode_result(
    kind: ToolKind,
    frame_type: &str,
    text: Option<&str>,
    data: Option<&Value>,
) -> FrameEvent {
    match (kind, frame_type) {
        (ToolKind::VibeCoding, "frontend_code") => code_result(Category::FrontendCode, text),
        (ToolKind::VibeCoding, "backend_code") => code_result(Category::BackendCode, text),
        (ToolKind::BusinessAnalyzer, "idea_analysis") => {
            data_result(Category::IdeaAnalysis, data, ResultPayload::Idea)
        }
        (ToolKind::BusinessAnalyzer, "competitor_analysis") => {
            data_result(Category::CompetitorAnalysis, data, ResultPayload::Competitor)
        }
        (ToolKind::BusinessAnalyzer, "market_analysis") => {
            data_result(Category::MarketAnalysis, data, ResultPayload::Market)
        }
        (ToolKind::BusinessAnalyzer, "financial_analysis") => {
            data_result(Category::FinancialAnalysis, data, ResultPayload::Financial)
        }
        (ToolKind::BusinessAnalyzer, "swot_analysis") => {
            data_result(Category::SwotAnalysis, data, ResultPayload::Swot)
        }
        (ToolKind::BusinessAnalyzer, "future_analysis") => {
            data_result(Category::FutureAnalysis, data, ResultPayload::Future)
        }
        (ToolKind::InstagramContent, "captions") => {
            data_result(Category::Captions, data, ResultPayload::Captions)
        }
        (ToolKind::InstagramContent, "hashtags") => {
            data_result(Category::Hashtags, data, ResultPayload::Hashtags)
        }
        (ToolKind::InstagramContent, "hooks") => {
            data_result(Category::Hooks, data, ResultPayload::Hooks)
        }
        (ToolKind::InstagramContent, "scripts") => {
            data_result(Category::Scripts, data, ResultPayload::Scripts)
        }
        (ToolKind::InstagramContent, "bio") => data_result(Category::Bio, data, ResultPayload::Bio),
        (ToolKind::InstagramContent, "strategy") => {
            data_result(Category::Strategy, data, ResultPayload::Strategy)
        }
        (ToolKind::YoutubeOptimizer, "trend_analysis") => {
            data_result(Category::TrendAnalysis, data, ResultPayload::Trends)
        }
        (ToolKind::YoutubeOptimizer, "titles") => {
            data_result(Category::Titles, data, ResultPayload::Titles)
        }
        (ToolKind::YoutubeOptimizer, "tags") => {
            data_result(Category::Tags, data, ResultPayload::Tags)
        }
        (ToolKind::YoutubeOptimizer, "hashtags") => {
            data_result(Category::VideoHashtags, data, ResultPayload::VideoHashtags)
        }
        (ToolKind::YoutubeOptimizer, "strategy") => {
            data_result(Category::VideoStrategy, data, ResultPayload::VideoStrategy)
        }
        _ => FrameEvent::Unknown,
    }
}

fn code_result(category: Category, text: Option<&str>) -> FrameEvent {
    match text {
        Some(code) => FrameEvent::Result {
            category,
            payload: Box::new(ResultPayload::Code(code.to_string())),
        },
        None => FrameEvent::Unknown,
    }
}

fn data_result<T, F>(category: Category, data: Option<&Value>, wrap: F) -> FrameEvent
where
    T: DeserializeOwned,
    F: FnOnce(T) -> ResultPayload,
{
    match data.and_then(|value| serde_json::from_value::<T>(value.clone()).ok()) {
        Some(payload) => FrameEvent::Result {
            category,
            payload: Box::new(wrap(payload)),
        },
        None => FrameEvent::Unknown,
    }
}
