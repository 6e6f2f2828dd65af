// ============================================
// Interest Affinity Builder
// ============================================
//
// Interest scoring formula:
// score(tag) = seed(1.0 if declared) + SUM(interest_boost per interaction)
// normalized by max(max_score, 1.0), clamped to 1.0
//
// Interaction boosts (see InteractionKind::interest_boost):
// - Like: +0.3
// - Comment: +0.5
// - Share: +0.7
// - View or unrecognized: +0.1
//
// Content-type affinities use a separate weight table
// (InteractionKind::content_type_weight: like 1, comment 2, share 3) and
// are normalized to proportions summing to 1.

use crate::models::{ContentType, ContentTypeScores, Interaction, UserProfile};
use std::collections::HashMap;

/// Accumulate and normalize interest affinities.
///
/// Declared interests are seeded at 1.0; every interaction boosts each of
/// the interacted content's tags. Normalization divides by the maximum
/// accumulated score, floored at 1.0 so an all-weak profile is not
/// rescaled upward.
pub(crate) fn build_interest_scores(
    user: &UserProfile,
    interactions: &[Interaction],
) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> = HashMap::new();

    for tag in &user.interests {
        scores.insert(tag.clone(), 1.0);
    }

    for interaction in interactions {
        let boost = interaction.kind.interest_boost();
        for tag in &interaction.content_interests {
            *scores.entry(tag.clone()).or_insert(0.0) += boost;
        }
    }

    let max_score = scores
        .values()
        .fold(0.0_f64, |max, &score| max.max(score))
        .max(1.0);

    for score in scores.values_mut() {
        *score = (*score / max_score).min(1.0);
    }

    scores
}

/// Accumulate weighted like/comment/share counts per recognized content
/// type and normalize to proportions. A zero total leaves all four at 0.
pub(crate) fn build_content_type_scores(interactions: &[Interaction]) -> ContentTypeScores {
    let mut scores = ContentTypeScores::default();

    for interaction in interactions {
        let Some(content_type) = interaction.content_type else {
            continue;
        };
        let weight = interaction.kind.content_type_weight();
        match content_type {
            ContentType::Text => scores.text += weight,
            ContentType::Image => scores.image += weight,
            ContentType::Video => scores.video += weight,
            ContentType::Audio => scores.audio += weight,
        }
    }

    let total = scores.total();
    if total > 0.0 {
        scores.text /= total;
        scores.image /= total;
        scores.video /= total;
        scores.audio /= total;
    }

    scores
}
