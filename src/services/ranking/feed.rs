use super::scorer::RelevanceScorer;
use crate::models::{ContentItem, GeoLocation, PreferenceProfile};
use tracing::info;

/// Default feed page size.
pub const DEFAULT_FEED_LIMIT: usize = 50;

/// Ranks a candidate set into a feed. Scores via [`RelevanceScorer`],
/// stable-sorts descending (ties keep their input order), truncates to
/// the limit, and returns content only; scores are not exposed.
#[derive(Debug, Clone)]
pub struct FeedRanker {
    scorer: RelevanceScorer,
    limit: usize,
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_LIMIT)
    }
}

impl FeedRanker {
    pub fn new(limit: usize) -> Self {
        Self {
            scorer: RelevanceScorer::new(),
            limit,
        }
    }

    pub fn with_scorer(scorer: RelevanceScorer, limit: usize) -> Self {
        Self { scorer, limit }
    }

    pub fn rank(
        &self,
        candidates: Vec<ContentItem>,
        profile: &PreferenceProfile,
        user_location: Option<&GeoLocation>,
    ) -> Vec<ContentItem> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let input_count = candidates.len();

        let mut scored: Vec<(ContentItem, f64)> = candidates
            .into_iter()
            .map(|content| {
                let score = self.scorer.score(&content, profile, user_location);
                (content, score)
            })
            .collect();

        // Stable sort: ties preserve input order.
        // Note: NaN cannot occur here, every term is bounded arithmetic.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let feed: Vec<ContentItem> = scored
            .into_iter()
            .take(self.limit)
            .map(|(content, _)| content)
            .collect();

        info!(
            input_count = input_count,
            output_count = feed.len(),
            "Feed ranking completed"
        );

        feed
    }
}
