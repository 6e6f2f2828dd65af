// ============================================
// Content Relevance Scoring & Feed Ranking
// ============================================
//
// Scores buzzes against a preference profile and assembles the ranked
// feed. Scoring is a fixed-weight blend of four signals:
// - Interest match (profile affinity averaged over content tags)
// - Location match (city/country tiers)
// - Content-type match (profile proportions)
// - Engagement boost (small format-specific heuristic)

pub mod feed;
pub mod scorer;

pub use feed::{FeedRanker, DEFAULT_FEED_LIMIT};
pub use scorer::{RelevanceScorer, RelevanceWeights};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, RankingError>;
