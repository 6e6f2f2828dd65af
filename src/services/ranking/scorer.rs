use super::{RankingError, Result};
use crate::models::{ContentItem, ContentType, GeoLocation, PreferenceProfile};
use crate::utils::location_similarity;

/// Signal weights for content relevance. The four weights must sum to 1
/// so the capped score stays in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct RelevanceWeights {
    pub interest: f64,
    pub location: f64,
    pub content_type: f64,
    pub engagement: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            interest: 0.4,
            location: 0.2,
            content_type: 0.2,
            engagement: 0.2,
        }
    }
}

impl RelevanceWeights {
    pub fn validate(&self) -> Result<()> {
        if self.interest < 0.0
            || self.location < 0.0
            || self.content_type < 0.0
            || self.engagement < 0.0
        {
            return Err(RankingError::InvalidWeights(
                "All weights must be non-negative".to_string(),
            ));
        }

        let sum = self.interest + self.location + self.content_type + self.engagement;
        if (sum - 1.0).abs() > 0.01 {
            return Err(RankingError::InvalidWeights(format!(
                "Weights must sum to 1.0 (got {})",
                sum
            )));
        }

        Ok(())
    }
}

/// Scores a single buzz against a preference profile. Stateless beyond
/// the weight table; safe to share across request handlers.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: RelevanceWeights,
}

impl RelevanceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: RelevanceWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Relevance of `content` for the profiled user, in [0, 1].
    ///
    /// The location term contributes only when both the caller's and the
    /// content's locations are supplied; every other missing field
    /// contributes a neutral zero term.
    pub fn score(
        &self,
        content: &ContentItem,
        profile: &PreferenceProfile,
        user_location: Option<&GeoLocation>,
    ) -> f64 {
        let interest = self.interest_match(content, profile);

        let location = match (user_location, content.location.as_ref()) {
            (Some(user_loc), Some(content_loc)) => location_similarity(user_loc, content_loc),
            _ => 0.0,
        };

        let content_type = content
            .content_type
            .map(|ct| profile.content_type_scores.score(ct))
            .unwrap_or(0.0);

        let engagement = self.engagement_boost(content, profile);

        let score = self.weights.interest * interest
            + self.weights.location * location
            + self.weights.content_type * content_type
            + self.weights.engagement * engagement;

        score.min(1.0)
    }

    /// Mean profile affinity over the content's tags; untagged content
    /// scores 0.
    fn interest_match(&self, content: &ContentItem, profile: &PreferenceProfile) -> f64 {
        if content.interests.is_empty() {
            return 0.0;
        }

        let sum: f64 = content
            .interests
            .iter()
            .map(|tag| profile.interest_scores.get(tag).copied().unwrap_or(0.0))
            .sum();

        sum / content.interests.len() as f64
    }

    /// Format-specific bonus: sharers get a video boost, frequent likers
    /// an image boost, everything else the 0.1 floor.
    fn engagement_boost(&self, content: &ContentItem, profile: &PreferenceProfile) -> f64 {
        match content.content_type {
            Some(ContentType::Video) if profile.engagement_patterns.daily_shares > 0.5 => 0.3,
            Some(ContentType::Image) if profile.engagement_patterns.daily_likes > 1.0 => 0.2,
            _ => 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EngagementCounters, EngagementPatterns};
    use chrono::Utc;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn buzz(tags: &[&str], content_type: Option<ContentType>) -> ContentItem {
        ContentItem {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            body: String::new(),
            media_url: None,
            content_type,
            interests: tags.iter().map(|s| s.to_string()).collect(),
            location: None,
            created_at: Utc::now(),
            engagement: EngagementCounters::default(),
        }
    }

    fn profile_with_interests(scores: &[(&str, f64)]) -> PreferenceProfile {
        PreferenceProfile {
            interest_scores: scores
                .iter()
                .map(|(tag, score)| (tag.to_string(), *score))
                .collect::<HashMap<String, f64>>(),
            ..Default::default()
        }
    }

    #[test]
    fn test_weight_validation() {
        assert!(RelevanceWeights::default().validate().is_ok());

        let unbalanced = RelevanceWeights {
            interest: 0.5,
            location: 0.5,
            content_type: 0.5,
            engagement: 0.5,
        };
        assert!(unbalanced.validate().is_err());

        let negative = RelevanceWeights {
            interest: 1.2,
            location: -0.2,
            content_type: 0.0,
            engagement: 0.0,
        };
        assert!(negative.validate().is_err());
        assert!(RelevanceScorer::with_weights(negative).is_err());
    }

    #[test]
    fn test_score_bounded() {
        let scorer = RelevanceScorer::new();
        let mut profile = profile_with_interests(&[("music", 1.0)]);
        profile.content_type_scores.video = 1.0;
        profile.engagement_patterns.daily_shares = 2.0;

        let content = buzz(&["music"], Some(ContentType::Video));
        let score = scorer.score(&content, &profile, None);

        assert!(score >= 0.0 && score <= 1.0);
    }

    #[test]
    fn test_interest_match_averages_over_tags() {
        let scorer = RelevanceScorer::new();
        let profile = profile_with_interests(&[("music", 1.0)]);

        // One matched tag (1.0), one unknown (0.0) -> mean 0.5
        let content = buzz(&["music", "gardening"], None);
        let score = scorer.score(&content, &profile, None);

        // 0.4 * 0.5 + 0.2 * 0.1 (boost floor)
        assert!((score - (0.4 * 0.5 + 0.02)).abs() < 1e-9);
    }

    #[test]
    fn test_untagged_content_gets_no_interest_term() {
        let scorer = RelevanceScorer::new();
        let profile = profile_with_interests(&[("music", 1.0)]);

        let score = scorer.score(&buzz(&[], None), &profile, None);

        // Only the engagement-boost floor remains
        assert!((score - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_location_term_requires_both_locations() {
        let scorer = RelevanceScorer::new();
        let profile = PreferenceProfile::default();
        let here = GeoLocation {
            city: Some("Lisbon".to_string()),
            country: Some("Portugal".to_string()),
        };

        let mut content = buzz(&[], None);
        let without_content_loc = scorer.score(&content, &profile, Some(&here));

        content.location = Some(here.clone());
        let with_both = scorer.score(&content, &profile, Some(&here));

        // Same city adds the full 0.2 location term
        assert!((with_both - without_content_loc - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_engagement_boost_tiers() {
        let scorer = RelevanceScorer::new();

        let mut sharer = PreferenceProfile::default();
        sharer.engagement_patterns.daily_shares = 0.6;
        assert_eq!(
            scorer.engagement_boost(&buzz(&[], Some(ContentType::Video)), &sharer),
            0.3
        );

        let mut liker = PreferenceProfile::default();
        liker.engagement_patterns.daily_likes = 1.5;
        assert_eq!(
            scorer.engagement_boost(&buzz(&[], Some(ContentType::Image)), &liker),
            0.2
        );

        // Below thresholds, wrong formats, and untyped content all floor at 0.1
        assert_eq!(
            scorer.engagement_boost(&buzz(&[], Some(ContentType::Video)), &liker),
            0.1
        );
        assert_eq!(
            scorer.engagement_boost(&buzz(&[], None), &sharer),
            0.1
        );
    }

    #[test]
    fn test_music_video_scenario() {
        // A declared "music" interest normalized to 1.0: scoring a
        // music-tagged video with no location lands in [0.4, 1.0].
        let scorer = RelevanceScorer::new();
        let mut profile = profile_with_interests(&[("music", 1.0)]);
        profile.content_type_scores.video = 1.0;
        profile.engagement_patterns = EngagementPatterns {
            daily_likes: 1.0,
            daily_comments: 0.0,
            daily_shares: 0.0,
            active_hours: vec![12],
        };

        let score = scorer.score(&buzz(&["music"], Some(ContentType::Video)), &profile, None);

        assert!(score >= 0.4 && score <= 1.0);
        // interest 0.4 + type 0.2 + boost floor 0.02
        assert!((score - 0.62).abs() < 1e-9);
    }
}
