//! Terminal rendering of the view model.
//!
//! Transcript and progress render incrementally while the job streams; the
//! result regions and score board print once on completion.

use studio_core::{
    AppViewModel, GaugeView, JobPhase, ProgressView, RegionBlock, RegionView, ScoreBoardView,
};

const BAR_WIDTH: usize = 20;

pub struct Renderer {
    transcript_seen: usize,
    last_progress_line: String,
    last_notice: Option<String>,
    printed_regions: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            transcript_seen: 0,
            last_progress_line: String::new(),
            last_notice: None,
            printed_regions: false,
        }
    }

    pub fn render(&mut self, view: &AppViewModel) {
        for line in &view.transcript[self.transcript_seen..] {
            println!("[{}] {}", line.agent, line.text);
        }
        self.transcript_seen = view.transcript.len();

        let progress_line = format_progress(&view.progress);
        if !progress_line.is_empty() && progress_line != self.last_progress_line {
            println!("{progress_line}");
        }
        self.last_progress_line = progress_line;

        if let Some(notice) = &view.notice {
            if self.last_notice.as_ref() != Some(notice) {
                println!("* {notice}");
            }
        }
        self.last_notice = view.notice.clone();

        if view.phase == JobPhase::Completed && !self.printed_regions {
            self.printed_regions = true;
            for region in &view.regions {
                print_region(region);
            }
            if let Some(scores) = &view.scores {
                print_scores(scores);
            }
        }
    }
}

fn format_progress(progress: &ProgressView) -> String {
    if progress.label.is_empty() && progress.percent == 0.0 {
        return String::new();
    }
    let filled = (progress.percent / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3.0}% {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent,
        progress.label
    )
}

fn print_region(region: &RegionView) {
    println!();
    println!("== {} ==", region.title);
    for block in &region.blocks {
        print_block(block);
    }
}

fn print_block(block: &RegionBlock) {
    match block {
        RegionBlock::Text(text) => println!("{text}"),
        RegionBlock::KeyValue { key, value } => println!("{key}: {value}"),
        RegionBlock::Pills { label, items } => println!("{label}: {}", items.join(" ")),
        RegionBlock::Items { label, items } => {
            if let Some(label) = label {
                println!("{label}:");
            }
            for item in items {
                println!("  - {item}");
            }
        }
        RegionBlock::Gauge(gauge) => println!("{}", format_gauge(gauge)),
        RegionBlock::Card { title, lines } => {
            println!("* {title}");
            for line in lines {
                println!("    {line}");
            }
        }
    }
}

fn format_gauge(gauge: &GaugeView) -> String {
    let filled = (gauge.percent() / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}: {}/{} [{}{}] {:.0}%",
        gauge.label,
        gauge.value,
        gauge.max,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        gauge.percent()
    )
}

fn print_scores(scores: &ScoreBoardView) {
    println!();
    println!("== Overall ==");
    for gauge in &scores.gauges {
        // Score circles: the arc sweep mirrors the value within its domain.
        println!(
            "{}: {}/{} ({:.0} deg)",
            gauge.label,
            gauge.value,
            gauge.max,
            gauge.degrees()
        );
    }
    for (key, value) in &scores.metrics {
        println!("{key}: {value}");
    }
}
