// src/analytics/tier.rs

use serde::Serialize;

/// Performance tier for a single parsed rating.
///
/// | Range        | Tier              |
/// |--------------|-------------------|
/// | >= 8         | Excellent         |
/// | >= 6 and < 8 | Good              |
/// | < 6          | Needs Improvement |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Tier {
    /// Display order of the summary buckets.
    pub const ALL: [Tier; 3] = [Tier::Excellent, Tier::Good, Tier::NeedsImprovement];

    pub fn classify(rating: f64) -> Self {
        match rating {
            r if r >= 8.0 => Tier::Excellent,
            r if r >= 6.0 => Tier::Good,
            _ => Tier::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent (8+)",
            Tier::Good => "Good (6-8)",
            Tier::NeedsImprovement => "Needs Improvement (<6)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Excellent => "#00C49F",
            Tier::Good => "#0088FE",
            Tier::NeedsImprovement => "#FF8042",
        }
    }

    fn slot(self) -> usize {
        match self {
            Tier::Excellent => 0,
            Tier::Good => 1,
            Tier::NeedsImprovement => 2,
        }
    }
}

/// Running per-tier counts, indexed in `Tier::ALL` order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TierTally([usize; 3]);

impl TierTally {
    pub fn record(&mut self, tier: Tier) {
        self.0[tier.slot()] += 1;
    }

    pub fn count(&self, tier: Tier) -> usize {
        self.0[tier.slot()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}
