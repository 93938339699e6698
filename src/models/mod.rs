// src/models/mod.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analytics::Tier;

// ───────────────────────────────────────
// Stored rows
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FeedbackRecord {
    pub id: i64,                          // row id, presentation order
    pub interview_id: String,             // "mockIdRef"
    pub question: String,
    pub correct_answer: Option<String>,
    pub user_answer: Option<String>,
    pub rating: Option<String>,           // free text: "7/10", "7.5", ...
    pub feedback: Option<String>,
    pub user_email: Option<String>,
    pub created_at: Option<String>,       // stored as text upstream
}

// ───────────────────────────────────────
// Derived chart data
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub question: String,                 // "Q1", "Q2", ...
    pub rating: f64,
    pub full_question: String,            // 30 chars + "..."
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub rating: String,                   // "<r>-<r+1>"
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPerformance {
    pub name: String,                     // "Q1", "Q2", ...
    pub rating: f64,
    pub question: String,                 // 25 chars + "..."
    pub tier: Tier,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCount {
    pub name: &'static str,
    pub value: usize,
    pub color: &'static str,
    pub percent: u32,                     // 0..100
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackAnalytics {
    pub rating_trend: Vec<RatingPoint>,
    pub distribution: Vec<DistributionBucket>,
    pub performance: Vec<QuestionPerformance>,
    pub performance_stats: Vec<TierCount>,
    pub avg_rating: String,               // one fractional digit
    pub total_questions: usize,
}

// ───────────────────────────────────────
// DTOs for endpoints
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackItem {
    pub index: usize,                     // 1-based, matches "Q<k>"
    #[serde(flatten)]
    pub record: FeedbackRecord,
    pub rating_value: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub interview_id: String,
    pub generated_at: DateTime<Utc>,
    pub analytics: Option<Arc<FeedbackAnalytics>>, // None: no feedback recorded yet
}
