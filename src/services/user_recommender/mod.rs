// ============================================
// User Recommender (who to follow)
// ============================================
//
// Scores candidate users for the follow-suggestion surface from six
// additive signals: address-book contacts, linked social connections,
// interest overlap, location proximity, engagement quality, and
// verification. Each contributing signal may attach a human-readable
// reason; a recommendation carries at most three, in signal order.
//
// Candidates scoring at or below the minimum threshold are discarded.

use crate::models::{Contact, SocialConnection, UserProfile, UserRecommendation};
use crate::utils::{jaccard_similarity, location_similarity};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, RecommendationError>;

/// Maximum suggestions returned per call.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;
/// Scores must strictly exceed this to survive.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

const MAX_REASONS: usize = 3;

const REASON_CONTACT: &str = "In your contacts";
const REASON_SOCIAL: &str = "Social connection";
const REASON_INTERESTS: &str = "Similar interests";
const REASON_LOCATION: &str = "Nearby location";
const REASON_ACTIVE: &str = "Active user";
const REASON_VERIFIED: &str = "Verified account";

/// Per-signal weights. The contact and social signals are flat bonuses;
/// the rest scale a similarity in [0, 1]. The raw sum may exceed 1 — the
/// total is capped.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionWeights {
    pub contact: f64,
    pub social: f64,
    pub interest: f64,
    pub location: f64,
    pub engagement: f64,
    pub verified: f64,
}

impl Default for SuggestionWeights {
    fn default() -> Self {
        Self {
            contact: 0.3,
            social: 0.3,
            interest: 0.25,
            location: 0.2,
            engagement: 0.15,
            verified: 0.1,
        }
    }
}

impl SuggestionWeights {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            self.contact,
            self.social,
            self.interest,
            self.location,
            self.engagement,
            self.verified,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(RecommendationError::InvalidWeights(
                "All weights must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UserRecommenderConfig {
    pub max_results: usize,
    pub min_score: f64,
    pub weights: SuggestionWeights,
}

impl Default for UserRecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_SUGGESTION_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            weights: SuggestionWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserRecommender {
    config: UserRecommenderConfig,
}

impl UserRecommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UserRecommenderConfig) -> Result<Self> {
        config.weights.validate()?;
        Ok(Self { config })
    }

    /// Score candidates for the target's who-to-follow surface.
    ///
    /// The target itself and anyone it already subscribes to are skipped;
    /// survivors are sorted by descending score and capped.
    pub fn recommend(
        &self,
        target: &UserProfile,
        candidates: Vec<UserProfile>,
        contacts: &[Contact],
        connections: &[SocialConnection],
    ) -> Vec<UserRecommendation> {
        let now = Utc::now();
        let candidate_count = candidates.len();

        let mut recommendations: Vec<UserRecommendation> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate.id != target.id && !target.subscribed.contains(&candidate.id)
            })
            .filter_map(|candidate| {
                let (score, reasons) =
                    self.score_candidate(target, &candidate, contacts, connections, now);
                if score > self.config.min_score {
                    Some(UserRecommendation {
                        user: candidate,
                        score,
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(self.config.max_results);

        info!(
            target_id = %target.id,
            candidate_count = candidate_count,
            suggestion_count = recommendations.len(),
            "User recommendations computed"
        );

        recommendations
    }

    fn score_candidate(
        &self,
        target: &UserProfile,
        candidate: &UserProfile,
        contacts: &[Contact],
        connections: &[SocialConnection],
        now: DateTime<Utc>,
    ) -> (f64, Vec<String>) {
        let weights = &self.config.weights;
        let mut score = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        if contacts.iter().any(|c| contact_matches(c, candidate)) {
            score += weights.contact;
            reasons.push(REASON_CONTACT.to_string());
        }

        if connections.iter().any(|c| connection_matches(c, candidate)) {
            score += weights.social;
            reasons.push(REASON_SOCIAL.to_string());
        }

        let overlap = jaccard_similarity(&target.interests, &candidate.interests);
        score += weights.interest * overlap;
        if overlap > 0.5 {
            reasons.push(REASON_INTERESTS.to_string());
        }

        if let (Some(target_loc), Some(candidate_loc)) =
            (target.location.as_ref(), candidate.location.as_ref())
        {
            let proximity = location_similarity(target_loc, candidate_loc);
            score += weights.location * proximity;
            if proximity > 0.5 {
                reasons.push(REASON_LOCATION.to_string());
            }
        }

        let quality = engagement_quality(candidate, now);
        score += weights.engagement * quality;
        if quality > 0.7 {
            reasons.push(REASON_ACTIVE.to_string());
        }

        if candidate.verified {
            score += weights.verified;
            reasons.push(REASON_VERIFIED.to_string());
        }

        reasons.truncate(MAX_REASONS);

        (score.min(1.0), reasons)
    }
}

fn contact_matches(contact: &Contact, candidate: &UserProfile) -> bool {
    if let (Some(contact_email), Some(user_email)) = (&contact.email, &candidate.email) {
        if contact_email == user_email {
            return true;
        }
    }

    if let (Some(contact_phone), Some(user_phone)) = (&contact.phone, &candidate.phone) {
        if contact_phone == user_phone {
            return true;
        }
    }

    // Empty display names must not match every contact
    !candidate.display_name.is_empty()
        && contact
            .name
            .to_lowercase()
            .contains(&candidate.display_name.to_lowercase())
}

fn connection_matches(connection: &SocialConnection, candidate: &UserProfile) -> bool {
    if connection.user_id == Some(candidate.id) {
        return true;
    }

    connection
        .username
        .as_deref()
        .is_some_and(|username| username.eq_ignore_ascii_case(&candidate.username))
}

/// Account-quality heuristic in [0, 1]:
/// 0.4·min(buzzes/100, 1) + 0.3·min(followers/1000, 1)
/// + 0.2·verified + 0.1·min(account_age_days/365, 1)
pub fn engagement_quality(user: &UserProfile, now: DateTime<Utc>) -> f64 {
    let buzzes = (f64::from(user.buzz_count) / 100.0).min(1.0);
    let followers = (f64::from(user.follower_count) / 1000.0).min(1.0);
    let verified = if user.verified { 1.0 } else { 0.0 };
    let account_age_days = (now - user.created_at).num_days().max(0) as f64;
    let longevity = (account_age_days / 365.0).min(1.0);

    (0.4 * buzzes + 0.3 * followers + 0.2 * verified + 0.1 * longevity).min(1.0)
}
