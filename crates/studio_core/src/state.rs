use crate::view_model::{score_board, AppViewModel, ProgressView};
use crate::{region_for, OverallScores, SessionResults, ToolKind};

/// Caller-generated stream id identifying one job.
pub type JobId = String;

/// Lifecycle of the (at most one) active job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub agent: String,
    pub text: String,
}

/// Transient acknowledgement with a tick deadline. A newer notice replaces
/// text and deadline together, so a stale deadline never clears it early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub expires_at: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progress {
    pub percent: f64,
    pub label: String,
}

/// Fixed per-run selections that accompany the free-text prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOptions {
    pub niche: Option<String>,
    pub post_type: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub video_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) kind: ToolKind,
    pub(crate) options: ToolOptions,
    pub(crate) tick: u64,
    pub(crate) input: String,
    pub(crate) phase: JobPhase,
    pub(crate) job_id: Option<JobId>,
    pub(crate) progress: Progress,
    pub(crate) transcript: Vec<ChatLine>,
    pub(crate) results: SessionResults,
    pub(crate) scores: Option<OverallScores>,
    pub(crate) notice: Option<Notice>,
    pub(crate) error: Option<String>,
    pub(crate) done_reset_at: Option<u64>,
    pub(crate) dirty: bool,
}

impl AppState {
    pub fn new(kind: ToolKind, options: ToolOptions) -> Self {
        Self {
            kind,
            options,
            tick: 0,
            input: String::new(),
            phase: JobPhase::Idle,
            job_id: None,
            progress: Progress::default(),
            transcript: Vec::new(),
            results: SessionResults::new(),
            scores: None,
            notice: None,
            error: None,
            done_reset_at: None,
            dirty: false,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    pub fn results(&self) -> &SessionResults {
        &self.results
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            tool_label: self.kind.label().to_string(),
            phase: self.phase,
            submit_enabled: matches!(self.phase, JobPhase::Idle | JobPhase::Completed),
            input: self.input.clone(),
            progress: ProgressView {
                percent: self.progress.percent.clamp(0.0, 100.0),
                label: self.progress.label.clone(),
            },
            transcript: self.transcript.clone(),
            notice: self.notice.as_ref().map(|n| n.text.clone()),
            error: self.error.clone(),
            regions: self
                .results
                .iter()
                .map(|(category, payload)| region_for(*category, payload))
                .collect(),
            scores: self.scores.as_ref().map(score_board),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True when the given id belongs to the currently active job.
    pub(crate) fn is_active_job(&self, job_id: &str) -> bool {
        self.job_id.as_deref() == Some(job_id)
    }
}
