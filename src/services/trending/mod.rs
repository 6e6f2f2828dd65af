// ============================================
// Trending Ranker (cold-start fallback)
// ============================================
//
// Engagement-weighted scoring with exponential time decay, for surfacing
// content to users whose preference profile is empty:
//
// score = (views·w_v + likes·w_l + comments·w_c + shares·w_s) · e^(−λ·age_hours)
//
// Items below the minimum engagement threshold never trend.

use crate::models::ContentItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("Invalid trending config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TrendingError>;

/// Trending algorithm configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// Decay rate (lambda): higher = faster decay. Range (0, 1].
    pub decay_rate: f64,

    /// Weight multipliers for the engagement counters
    pub view_weight: f64,
    pub like_weight: f64,
    pub share_weight: f64,
    pub comment_weight: f64,

    /// Weighted engagement below this never appears in trending
    pub min_engagement_threshold: f64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.1,
            view_weight: 1.0,
            like_weight: 5.0,
            share_weight: 10.0,
            comment_weight: 3.0,
            min_engagement_threshold: 10.0,
        }
    }
}

impl TrendingConfig {
    pub fn with_decay_rate(decay_rate: f64) -> Self {
        Self {
            decay_rate,
            ..Default::default()
        }
    }

    /// Fast decay (λ = 0.5): recent content heavily favored
    pub fn fast_decay() -> Self {
        Self::with_decay_rate(0.5)
    }

    /// Slow decay (λ = 0.05): content stays trending longer
    pub fn slow_decay() -> Self {
        Self::with_decay_rate(0.05)
    }

    /// Decay factor for a given age: e^(−λ × age_hours)
    pub fn decay_factor(&self, age_hours: f64) -> f64 {
        (-self.decay_rate * age_hours).exp()
    }

    /// Time for a score to decay to 50%: ln 2 / λ
    pub fn half_life_hours(&self) -> f64 {
        2.0_f64.ln() / self.decay_rate
    }

    pub fn validate(&self) -> Result<()> {
        if self.decay_rate <= 0.0 || self.decay_rate > 1.0 {
            return Err(TrendingError::InvalidConfig(format!(
                "Decay rate must be in (0, 1], got {}",
                self.decay_rate
            )));
        }

        if self.view_weight < 0.0
            || self.like_weight < 0.0
            || self.share_weight < 0.0
            || self.comment_weight < 0.0
        {
            return Err(TrendingError::InvalidConfig(
                "All weights must be non-negative".to_string(),
            ));
        }

        if self.min_engagement_threshold < 0.0 {
            return Err(TrendingError::InvalidConfig(
                "Minimum engagement threshold must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Ranks content by decayed engagement. Profile-free: the fallback feed
/// for users the profile builder knows nothing about.
#[derive(Debug, Clone)]
pub struct TrendingRanker {
    config: TrendingConfig,
    limit: usize,
}

impl TrendingRanker {
    pub fn new(limit: usize) -> Self {
        Self {
            config: TrendingConfig::default(),
            limit,
        }
    }

    pub fn with_config(config: TrendingConfig, limit: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, limit })
    }

    pub fn rank(&self, candidates: Vec<ContentItem>) -> Vec<ContentItem> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        let input_count = candidates.len();

        let mut scored: Vec<(ContentItem, f64)> = candidates
            .into_iter()
            .filter_map(|content| {
                let score = self.trending_score(&content, now)?;
                Some((content, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let trending: Vec<ContentItem> = scored
            .into_iter()
            .take(self.limit)
            .map(|(content, _)| content)
            .collect();

        info!(
            input_count = input_count,
            output_count = trending.len(),
            "Trending ranking completed"
        );

        trending
    }

    /// Weighted, decayed engagement; `None` below the threshold.
    fn trending_score(&self, content: &ContentItem, now: DateTime<Utc>) -> Option<f64> {
        let engagement = &content.engagement;
        let weighted = f64::from(engagement.views) * self.config.view_weight
            + f64::from(engagement.likes) * self.config.like_weight
            + f64::from(engagement.shares) * self.config.share_weight
            + f64::from(engagement.comments) * self.config.comment_weight;

        if weighted < self.config.min_engagement_threshold {
            return None;
        }

        let age_hours = (now - content.created_at).num_seconds().max(0) as f64 / 3600.0;
        Some(weighted * self.config.decay_factor(age_hours))
    }
}
