use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use studio_core::{CopyTarget, ToolKind, ToolOptions};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "vibe-studio",
    about = "Streaming console for the studio generation tools"
)]
pub struct Cli {
    #[command(subcommand)]
    pub tool: ToolCommand,

    /// Backend base URL.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Directory result artifacts are exported to.
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Export result artifacts when the job completes.
    #[arg(long)]
    pub export: bool,

    /// Copy a result to the clipboard when the job completes.
    #[arg(long, value_enum)]
    pub copy: Option<CopyArg>,

    #[arg(long, value_enum, default_value = "file")]
    pub log: LogArg,
}

#[derive(Debug, Subcommand)]
pub enum ToolCommand {
    /// Generate a frontend/backend code pair from an idea.
    Vibe { idea: String },
    /// Analyze a business idea.
    Analyze { idea: String },
    /// Generate Instagram content for a topic.
    Instagram {
        topic: String,
        #[arg(long)]
        niche: Option<String>,
        #[arg(long)]
        post_type: Option<String>,
        #[arg(long)]
        tone: Option<String>,
    },
    /// Optimize a YouTube video concept.
    Youtube {
        concept: String,
        #[arg(long)]
        niche: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        video_type: Option<String>,
    },
}

impl ToolCommand {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolCommand::Vibe { .. } => ToolKind::VibeCoding,
            ToolCommand::Analyze { .. } => ToolKind::BusinessAnalyzer,
            ToolCommand::Instagram { .. } => ToolKind::InstagramContent,
            ToolCommand::Youtube { .. } => ToolKind::YoutubeOptimizer,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            ToolCommand::Vibe { idea } | ToolCommand::Analyze { idea } => idea,
            ToolCommand::Instagram { topic, .. } => topic,
            ToolCommand::Youtube { concept, .. } => concept,
        }
    }

    pub fn options(&self) -> ToolOptions {
        match self {
            ToolCommand::Vibe { .. } | ToolCommand::Analyze { .. } => ToolOptions::default(),
            ToolCommand::Instagram {
                niche,
                post_type,
                tone,
                ..
            } => ToolOptions {
                niche: niche.clone(),
                post_type: post_type.clone(),
                tone: tone.clone(),
                ..ToolOptions::default()
            },
            ToolCommand::Youtube {
                niche,
                audience,
                video_type,
                ..
            } => ToolOptions {
                niche: niche.clone(),
                audience: audience.clone(),
                video_type: video_type.clone(),
                ..ToolOptions::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CopyArg {
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

impl CopyArg {
    pub fn target(self) -> CopyTarget {
        match self {
            CopyArg::BestCaption => CopyTarget::BestCaption,
            CopyArg::AllCaptions => CopyTarget::AllCaptions,
            CopyArg::BestHook => CopyTarget::BestHook,
            CopyArg::BestBio => CopyTarget::BestBio,
            CopyArg::AllHashtags => CopyTarget::AllHashtags,
            CopyArg::RecommendedHashtags => CopyTarget::RecommendedHashtags,
            CopyArg::BestTitle => CopyTarget::BestTitle,
            CopyArg::AllTitles => CopyTarget::AllTitles,
            CopyArg::AllTags => CopyTarget::AllTags,
            CopyArg::FrontendCode => CopyTarget::FrontendCode,
            CopyArg::BackendCode => CopyTarget::BackendCode,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

impl LogArg {
    pub fn destination(self) -> LogDestination {
        match self {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}
