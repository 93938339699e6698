// src/analytics/mod.rs
//
// Chart data derived from one interview's feedback rows. Everything here is
// pure; callers fetch rows first and hand them in already ordered by row id.

use std::collections::BTreeMap;

use crate::models::{
    DistributionBucket, FeedbackAnalytics, FeedbackItem, FeedbackRecord, QuestionPerformance,
    RatingPoint, TierCount,
};

pub mod cache;
pub mod rating;
pub mod tier;

pub use cache::AnalyticsCache;
pub use rating::parse_rating;
pub use tier::{Tier, TierTally};

const TREND_PREVIEW_CHARS: usize = 30;
const PERFORMANCE_PREVIEW_CHARS: usize = 25;

/// Builds every chart series plus the two scalar summaries.
///
/// Returns `None` for an empty session so no average is computed over zero rows.
pub fn derive(records: &[FeedbackRecord]) -> Option<FeedbackAnalytics> {
    if records.is_empty() {
        return None;
    }

    let total = records.len();
    let mut rating_trend = Vec::with_capacity(total);
    let mut performance = Vec::with_capacity(total);
    let mut buckets: BTreeMap<i64, usize> = BTreeMap::new();
    let mut tally = TierTally::default();
    let mut sum = 0.0;

    for (i, rec) in records.iter().enumerate() {
        let rating = parse_rating(rec.rating.as_deref());
        let label = format!("Q{}", i + 1);
        let tier = Tier::classify(rating);

        rating_trend.push(RatingPoint {
            question: label.clone(),
            rating,
            full_question: preview(&rec.question, TREND_PREVIEW_CHARS),
        });
        performance.push(QuestionPerformance {
            name: label,
            rating,
            question: preview(&rec.question, PERFORMANCE_PREVIEW_CHARS),
            tier,
            color: tier.color(),
        });

        *buckets.entry(rating.floor() as i64).or_insert(0) += 1;
        tally.record(tier);
        sum += rating;
    }

    debug_assert_eq!(tally.total(), total);

    // BTreeMap keys iterate numerically, so "10-11" lands after "9-10".
    let distribution = buckets
        .into_iter()
        .map(|(lower, count)| DistributionBucket {
            rating: format!("{}-{}", lower, lower.saturating_add(1)),
            count,
        })
        .collect();

    let performance_stats = Tier::ALL
        .iter()
        .map(|&t| {
            let value = tally.count(t);
            TierCount {
                name: t.label(),
                value,
                color: t.color(),
                percent: ((value as f64 / total as f64) * 100.0).round() as u32,
            }
        })
        .collect();

    Some(FeedbackAnalytics {
        rating_trend,
        distribution,
        performance,
        performance_stats,
        avg_rating: format!("{:.1}", sum / total as f64),
        total_questions: total,
    })
}

/// Rows for the expandable per-question list, tagged with their parsed rating.
pub fn feedback_items(records: Vec<FeedbackRecord>) -> Vec<FeedbackItem> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let rating_value = parse_rating(record.rating.as_deref());
            FeedbackItem {
                index: i + 1,
                rating_value,
                tier: Tier::classify(rating_value),
                record,
            }
        })
        .collect()
}

// Counts chars, not UTF-16 units, so emoji never split into half a surrogate pair.
fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
