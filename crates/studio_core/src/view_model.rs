use crate::{Category, ChatLine, JobPhase, OverallScores};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressView {
    /// Clamped to 0-100.
    pub percent: f64,
    pub label: String,
}

/// Everything the platform needs to render one frame of the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub tool_label: String,
    pub phase: JobPhase,
    pub submit_enabled: bool,
    pub input: String,
    pub progress: ProgressView,
    pub transcript: Vec<ChatLine>,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub regions: Vec<RegionView>,
    pub scores: Option<ScoreBoardView>,
}

/// One named output region, fully rebuilt from its category's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView {
    pub category: Category,
    pub title: String,
    pub blocks: Vec<RegionBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegionBlock {
    Text(String),
    KeyValue { key: String, value: String },
    /// Short clickable-chip items (hashtags, tags, topics).
    Pills { label: String, items: Vec<String> },
    Items {
        label: Option<String>,
        items: Vec<String>,
    },
    Gauge(GaugeView),
    Card { title: String, lines: Vec<String> },
}

/// A score rendered both as text and as a proportional indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub label: String,
    pub value: f64,
    pub max: f64,
}

impl GaugeView {
    pub fn new(label: impl Into<String>, value: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            value,
            max,
        }
    }

    /// Bar width: `value / max * 100`, clamped to the domain.
    pub fn percent(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max * 100.0).clamp(0.0, 100.0)
    }

    /// Circular arc: `value / max * 360`, clamped to the domain.
    pub fn degrees(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max * 360.0).clamp(0.0, 360.0)
    }
}

/// The aggregate score circles plus key metrics shown once a business
/// analysis completes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoardView {
    pub gauges: Vec<GaugeView>,
    pub metrics: Vec<(String, String)>,
}

pub(crate) fn score_board(scores: &OverallScores) -> ScoreBoardView {
    let metric = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    ScoreBoardView {
        gauges: vec![
            GaugeView::new("Idea", scores.idea, 10.0),
            GaugeView::new("Market", scores.market, 10.0),
            GaugeView::new("Financial", scores.financial, 10.0),
            GaugeView::new("Future", scores.future, 10.0),
        ],
        metrics: vec![
            ("TAM".to_string(), metric(&scores.tam)),
            ("Growth Rate".to_string(), metric(&scores.growth_rate)),
            ("Market Cap Potential".to_string(), metric(&scores.market_cap)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::GaugeView;

    #[test]
    fn gauge_clamps_to_domain() {
        let gauge = GaugeView::new("score", 7.0, 10.0);
        assert_eq!(gauge.percent(), 70.0);
        assert_eq!(gauge.degrees(), 252.0);

        let over = GaugeView::new("score", 15.0, 10.0);
        assert_eq!(over.percent(), 100.0);
        assert_eq!(over.degrees(), 360.0);

        let degenerate = GaugeView::new("score", 5.0, 0.0);
        assert_eq!(degenerate.percent(), 0.0);
    }
}
