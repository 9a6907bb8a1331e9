use serde_json::{json, Value};

/// The four tools served by the backend. Each tool has its own start
/// endpoint, request body shape and set of result categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    VibeCoding,
    BusinessAnalyzer,
    InstagramContent,
    YoutubeOptimizer,
}

impl ToolKind {
    /// Path of the POST endpoint that creates a job for this tool.
    pub fn start_path(&self) -> &'static str {
        match self {
            ToolKind::BusinessAnalyzer => "/analyze",
            ToolKind::VibeCoding | ToolKind::InstagramContent | ToolKind::YoutubeOptimizer => {
                "/generate"
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::VibeCoding => "Vibe Coding",
            ToolKind::BusinessAnalyzer => "Business Analyzer",
            ToolKind::InstagramContent => "Instagram Content",
            ToolKind::YoutubeOptimizer => "YouTube Optimizer",
        }
    }
}

/// Parameters of one submitted job, as the backend expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobParams {
    Vibe {
        idea: String,
    },
    Analyze {
        idea: String,
    },
    Instagram {
        topic: String,
        niche: String,
        post_type: String,
        tone: String,
    },
    Youtube {
        concept: String,
        niche: String,
        audience: String,
        video_type: String,
    },
}

impl JobParams {
    pub fn kind(&self) -> ToolKind {
        match self {
            JobParams::Vibe { .. } => ToolKind::VibeCoding,
            JobParams::Analyze { .. } => ToolKind::BusinessAnalyzer,
            JobParams::Instagram { .. } => ToolKind::InstagramContent,
            JobParams::Youtube { .. } => ToolKind::YoutubeOptimizer,
        }
    }

    /// JSON body for the start request, including the caller-generated
    /// stream id the backend keys the event stream on.
    pub fn start_body(&self, stream_id: &str) -> Value {
        match self {
            JobParams::Vibe { idea } | JobParams::Analyze { idea } => {
                json!({ "idea": idea, "stream_id": stream_id })
            }
            JobParams::Instagram {
                topic,
                niche,
                post_type,
                tone,
            } => json!({
                "topic": topic,
                "niche": niche,
                "post_type": post_type,
                "tone": tone,
                "stream_id": stream_id,
            }),
            JobParams::Youtube {
                concept,
                niche,
                audience,
                video_type,
            } => json!({
                "concept": concept,
                "niche": niche,
                "audience": audience,
                "type": video_type,
                "stream_id": stream_id,
            }),
        }
    }
}
