//! Render registry: pure payload-to-region transformations.
//!
//! Each builder fully rebuilds its region's blocks from the payload. Missing
//! strings render as `-`, missing lists vanish, missing scores gauge at 0.

use crate::payload::{
    analyzer::{
        CompetitorAnalysis, FinancialAnalysis, FutureAnalysis, IdeaAnalysis, MarketAnalysis,
        SwotAnalysis,
    },
    instagram::{BioEntry, BioSet, CaptionSet, ContentStrategy, HashtagSet, HookSet, ScriptSet},
    youtube::{TagSet, TitleSet, TrendAnalysis, VideoHashtagSet, VideoStrategy},
};
use crate::view_model::{GaugeView, RegionBlock, RegionView};
use crate::{Category, ResultPayload};

/// Build the region view for a recorded category payload.
pub fn region_for(category: Category, payload: &ResultPayload) -> RegionView {
    let blocks = match payload {
        ResultPayload::Code(code) => vec![RegionBlock::Text(code.clone())],
        ResultPayload::Idea(data) => idea_blocks(data),
        ResultPayload::Competitor(data) => competitor_blocks(data),
        ResultPayload::Market(data) => market_blocks(data),
        ResultPayload::Financial(data) => financial_blocks(data),
        ResultPayload::Swot(data) => swot_blocks(data),
        ResultPayload::Future(data) => future_blocks(data),
        ResultPayload::Captions(data) => caption_blocks(data),
        ResultPayload::Hashtags(data) => hashtag_blocks(data),
        ResultPayload::Hooks(data) => hook_blocks(data),
        ResultPayload::Scripts(data) => script_blocks(data),
        ResultPayload::Bio(data) => bio_blocks(data),
        ResultPayload::Strategy(data) => strategy_blocks(data),
        ResultPayload::Trends(data) => trend_blocks(data),
        ResultPayload::Titles(data) => title_blocks(data),
        ResultPayload::Tags(data) => tag_blocks(data),
        ResultPayload::VideoHashtags(data) => video_hashtag_blocks(data),
        ResultPayload::VideoStrategy(data) => video_strategy_blocks(data),
    };
    RegionView {
        category,
        title: category.title().to_string(),
        blocks,
    }
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn key_value(key: &str, value: &Option<String>) -> RegionBlock {
    RegionBlock::KeyValue {
        key: key.to_string(),
        value: dash(value),
    }
}

fn push_items(blocks: &mut Vec<RegionBlock>, label: &str, items: &[String]) {
    if !items.is_empty() {
        blocks.push(RegionBlock::Items {
            label: Some(label.to_string()),
            items: items.to_vec(),
        });
    }
}

fn push_pills(blocks: &mut Vec<RegionBlock>, label: &str, items: &[String]) {
    if !items.is_empty() {
        blocks.push(RegionBlock::Pills {
            label: label.to_string(),
            items: items.to_vec(),
        });
    }
}

fn idea_blocks(data: &IdeaAnalysis) -> Vec<RegionBlock> {
    let mut blocks = vec![
        key_value("Value Proposition", &data.value_proposition),
        key_value("Business Model", &data.business_model),
        key_value("Innovation Level", &data.innovation_level),
        RegionBlock::Gauge(GaugeView::new("Uniqueness", data.uniqueness_score, 10.0)),
    ];
    push_items(&mut blocks, "Key Insights", &data.key_insights);
    blocks
}

fn competitor_blocks(data: &CompetitorAnalysis) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    // Cap at five entries like the results page does.
    for competitor in data.direct_competitors.iter().take(5) {
        let mut lines = vec![
            format!("Strength: {}", dash(&competitor.strength)),
            format!("Weakness: {}", dash(&competitor.weakness)),
        ];
        if let Some(share) = &competitor.market_share {
            lines.push(format!("Market Share: {share}"));
        }
        blocks.push(RegionBlock::Card {
            title: competitor
                .name
                .clone()
                .unwrap_or_else(|| "Competitor".to_string()),
            lines,
        });
    }
    push_items(
        &mut blocks,
        "Competitive Advantages",
        &data.competitive_advantages,
    );
    push_items(&mut blocks, "Market Gaps", &data.market_gaps);
    blocks.push(RegionBlock::Gauge(GaugeView::new(
        "Differentiation",
        data.differentiation_score,
        10.0,
    )));
    blocks
}

fn market_blocks(data: &MarketAnalysis) -> Vec<RegionBlock> {
    let mut blocks = vec![
        key_value("Market Maturity", &data.maturity_level),
        key_value("Growth Rate", &data.growth_rate),
    ];
    if let Some(demo) = &data.target_demographics {
        blocks.push(RegionBlock::KeyValue {
            key: "Target Demographics".to_string(),
            value: format!(
                "Age: {}, Income: {}, Region: {}",
                dash(&demo.age),
                dash(&demo.income),
                dash(&demo.geography)
            ),
        });
    }
    push_items(&mut blocks, "Market Trends", &data.market_trends);
    blocks.push(key_value("TAM", &data.tam));
    blocks.push(key_value("SAM", &data.sam));
    blocks.push(key_value("SOM", &data.som));
    blocks
}

fn financial_blocks(data: &FinancialAnalysis) -> Vec<RegionBlock> {
    let mut blocks = vec![
        key_value("Investment Required", &data.investment_required),
        key_value("ROI Potential", &data.roi_potential),
        key_value("Profitability Timeline", &data.profitability_timeline),
        key_value("Financial Risk", &data.financial_risk),
    ];
    if let Some(projections) = &data.revenue_projections {
        let series = projections.series();
        let lines = [
            &projections.year1,
            &projections.year2,
            &projections.year3,
            &projections.year4,
            &projections.year5,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, year)| format!("Year {}: {} ({})", i + 1, dash(year), series[i]))
        .collect();
        blocks.push(RegionBlock::Card {
            title: "Revenue Projections".to_string(),
            lines,
        });
    }
    blocks
}

fn swot_blocks(data: &SwotAnalysis) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_items(&mut blocks, "Strengths", &data.strengths);
    push_items(&mut blocks, "Weaknesses", &data.weaknesses);
    push_items(&mut blocks, "Opportunities", &data.opportunities);
    push_items(&mut blocks, "Threats", &data.threats);
    push_items(&mut blocks, "Pros", &data.pros);
    push_items(&mut blocks, "Cons", &data.cons);
    blocks
}

fn future_blocks(data: &FutureAnalysis) -> Vec<RegionBlock> {
    let mut blocks = vec![
        RegionBlock::Gauge(GaugeView::new("Scalability", data.scalability_score, 10.0)),
        key_value("Long-Term Viability", &data.long_term_viability),
        key_value("Tech Adoption", &data.tech_adoption),
    ];
    push_items(
        &mut blocks,
        "Expansion Opportunities",
        &data.expansion_opportunities,
    );
    push_items(&mut blocks, "Future Trends", &data.future_trends);
    blocks.push(key_value("Five-Year Outlook", &data.five_year_outlook));
    blocks
}

fn caption_blocks(data: &CaptionSet) -> Vec<RegionBlock> {
    let mut blocks = vec![key_value("Best Caption", &data.best_caption)];
    for caption in &data.captions {
        let score = caption
            .engagement_score()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        blocks.push(RegionBlock::Card {
            title: format!(
                "{} ({})",
                caption.kind().unwrap_or("Caption"),
                score
            ),
            lines: vec![caption.text().to_string()],
        });
    }
    push_items(&mut blocks, "Caption Tips", &data.caption_tips);
    blocks
}

fn hashtag_blocks(data: &HashtagSet) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_pills(&mut blocks, "Recommended", &data.recommended_set);
    push_pills(&mut blocks, "Trending", &data.trending_hashtags);
    push_pills(&mut blocks, "Medium", &data.medium_hashtags);
    push_pills(&mut blocks, "Niche", &data.niche_hashtags);
    push_pills(&mut blocks, "Branded", &data.branded_hashtags);
    blocks.push(key_value("Strategy", &data.hashtag_strategy));
    blocks.push(RegionBlock::Gauge(GaugeView::new(
        "Viral Score",
        data.viral_score,
        10.0,
    )));
    blocks
}

fn hook_blocks(data: &HookSet) -> Vec<RegionBlock> {
    let mut blocks = vec![
        key_value("Best Hook", &data.best_hook),
        key_value("Best CTA", &data.best_cta),
    ];
    for hook in &data.caption_hooks {
        let mut lines = Vec::new();
        if let Some(psychology) = hook.psychology() {
            lines.push(psychology.to_string());
        }
        blocks.push(RegionBlock::Card {
            title: hook.hook().to_string(),
            lines,
        });
    }
    for cta in &data.ctas {
        let mut lines = Vec::new();
        if let Some(action) = cta.action() {
            lines.push(action.to_string());
        }
        blocks.push(RegionBlock::Card {
            title: cta.cta().to_string(),
            lines,
        });
    }
    push_items(&mut blocks, "Story Hooks", &data.story_hooks);
    push_items(&mut blocks, "Comment Prompts", &data.comment_prompts);
    blocks
}

fn script_blocks(data: &ScriptSet) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    for reel in &data.reel_scripts {
        blocks.push(RegionBlock::Card {
            title: reel.title.clone().unwrap_or_else(|| "Reel Script".to_string()),
            lines: vec![
                format!(
                    "Duration: {}",
                    reel.duration.as_deref().unwrap_or("15-30 seconds")
                ),
                dash(&reel.script),
                format!("Hook (First 3s): {}", dash(&reel.hook)),
                format!("Music: {}", dash(&reel.music_suggestion)),
            ],
        });
    }
    for sequence in &data.story_sequences {
        let mut lines: Vec<String> = sequence
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| format!("Slide {}: {}", i + 1, slide))
            .collect();
        lines.push(format!(
            "Engagement: {}",
            dash(&sequence.engagement_tactic)
        ));
        blocks.push(RegionBlock::Card {
            title: sequence
                .sequence_title
                .clone()
                .unwrap_or_else(|| "Story Sequence".to_string()),
            lines,
        });
    }
    if let Some(carousel) = &data.carousel_structure {
        let mut lines: Vec<String> = carousel
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| format!("Slide {}: {}", i + 1, slide))
            .collect();
        lines.extend(carousel.design_tips.iter().cloned());
        blocks.push(RegionBlock::Card {
            title: carousel
                .title
                .clone()
                .unwrap_or_else(|| "Carousel Post".to_string()),
            lines,
        });
    }
    blocks
}

fn bio_blocks(data: &BioSet) -> Vec<RegionBlock> {
    let mut blocks = vec![key_value("Best Bio", &data.best_bio)];
    for entry in &data.bio_variations {
        let lines = match entry {
            BioEntry::Plain(_) => Vec::new(),
            BioEntry::Detailed {
                style,
                conversion_score,
                ..
            } => vec![format!(
                "{} - Score: {}",
                style.as_deref().unwrap_or(""),
                conversion_score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )],
        };
        blocks.push(RegionBlock::Card {
            title: entry.bio().to_string(),
            lines,
        });
    }
    push_items(&mut blocks, "Name Suggestions", &data.name_suggestions);
    blocks.push(key_value("Link Text", &data.link_text));
    push_pills(&mut blocks, "Highlights", &data.highlight_names);
    blocks
}

fn strategy_blocks(data: &ContentStrategy) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_items(&mut blocks, "Posting Times", &data.posting_times);
    blocks.push(RegionBlock::Gauge(GaugeView::new(
        "Viral Potential",
        data.viral_potential,
        10.0,
    )));
    push_items(&mut blocks, "Success Metrics", &data.success_metrics);
    push_items(&mut blocks, "Engagement Tactics", &data.engagement_tactics);
    push_items(&mut blocks, "Algorithm Tips", &data.algorithm_tips);
    push_items(&mut blocks, "Growth Hacks", &data.growth_hacks);
    for day in &data.content_calendar {
        blocks.push(RegionBlock::Card {
            title: day.day.clone().unwrap_or_else(|| "Day".to_string()),
            lines: vec![
                day.content_type.clone().unwrap_or_else(|| "Post".to_string()),
                dash(&day.topic),
            ],
        });
    }
    blocks
}

fn trend_blocks(data: &TrendAnalysis) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_pills(&mut blocks, "Trending Topics", &data.trending_topics);
    push_pills(&mut blocks, "Search Keywords", &data.search_keywords);
    blocks.push(key_value("Competition Level", &data.competition_level));
    blocks.push(RegionBlock::Gauge(GaugeView::new(
        "Opportunity",
        data.opportunity_score,
        10.0,
    )));
    blocks.push(RegionBlock::KeyValue {
        key: "Viral Patterns".to_string(),
        value: format!("{} patterns", data.viral_patterns.len()),
    });
    blocks
}

fn title_blocks(data: &TitleSet) -> Vec<RegionBlock> {
    let mut blocks = vec![key_value("Best Title", &data.best_title)];
    for title in &data.titles {
        let score = title
            .score()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        blocks.push(RegionBlock::Card {
            title: format!("{} ({})", title.strategy().unwrap_or("Optimized"), score),
            lines: vec![title.title().to_string()],
        });
    }
    push_items(&mut blocks, "Title Tips", &data.title_tips);
    blocks
}

fn tag_blocks(data: &TagSet) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_pills(&mut blocks, "Primary", &data.primary_tags);
    push_pills(&mut blocks, "Secondary", &data.secondary_tags);
    push_pills(&mut blocks, "Long-Tail", &data.long_tail_tags);
    push_pills(&mut blocks, "Trending", &data.trending_tags);
    blocks.push(key_value("Strategy", &data.tag_strategy));
    blocks
}

fn video_hashtag_blocks(data: &VideoHashtagSet) -> Vec<RegionBlock> {
    let mut blocks = Vec::new();
    push_pills(&mut blocks, "Recommended", &data.recommended_combination);
    push_pills(&mut blocks, "Trending", &data.trending_hashtags);
    push_pills(&mut blocks, "Niche", &data.niche_hashtags);
    push_pills(&mut blocks, "Branded", &data.branded_hashtags);
    push_pills(&mut blocks, "Evergreen", &data.evergreen_hashtags);
    blocks.push(key_value("Strategy", &data.hashtag_strategy));
    blocks
}

fn video_strategy_blocks(data: &VideoStrategy) -> Vec<RegionBlock> {
    let mut blocks = vec![key_value(
        "Description Template",
        &data.description_template,
    )];
    push_items(&mut blocks, "Thumbnail Tips", &data.thumbnail_tips);
    push_items(&mut blocks, "CTA Suggestions", &data.cta_suggestions);
    push_items(&mut blocks, "Engagement Tactics", &data.engagement_tactics);
    push_items(&mut blocks, "Best Posting Times", &data.best_posting_times);
    push_items(&mut blocks, "Series Ideas", &data.series_ideas);
    blocks.push(RegionBlock::Gauge(GaugeView::new(
        "Growth Score",
        data.growth_score,
        10.0,
    )));
    push_items(&mut blocks, "Pro Tips", &data.pro_tips);
    blocks
}
