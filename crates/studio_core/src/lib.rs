//! Studio core: pure state machine, payload model and view-model helpers.
mod effect;
mod frame;
mod msg;
pub mod payload;
mod regions;
mod session;
mod state;
mod tool;
mod update;
mod view_model;

pub use effect::{ArtifactPlan, Effect};
pub use frame::{decode_frame, Category, FrameEvent, ResultPayload};
pub use msg::{CloseNote, Msg};
pub use regions::region_for;
pub use session::{artifact_plans, copy_text_for, CopyTarget, OverallScores, SessionResults};
pub use state::{AppState, ChatLine, JobId, JobPhase, Notice, Progress, ToolOptions};
pub use tool::{JobParams, ToolKind};
pub use update::{update, DONE_RESET_TICKS, NOTICE_TICKS};
pub use view_model::{AppViewModel, GaugeView, ProgressView, RegionBlock, RegionView, ScoreBoardView};
