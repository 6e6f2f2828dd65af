// ============================================
// Preference Profile Builder
// ============================================
//
// Derives a user's taste profile from their declared interests, posting
// history, and interaction log:
// 1. Interest affinities (declared seeds + interaction boosts)
// 2. Content-type affinities (weighted like/comment/share proportions)
// 3. Location preference (most-posted cities + declared city)
// 4. Engagement patterns (daily rates, active hours)
// 5. Time preferences (peak hours, preferred weekdays)
//
// The profile is ephemeral: a pure function of its inputs, recomputed on
// every request and never persisted by the engine.

mod behavior_builder;
mod interest_builder;
mod location_builder;

use crate::models::{ContentItem, Interaction, PreferenceProfile, UserProfile};
use chrono::Utc;
use tracing::debug;

/// Tunables for the top-N selections in the derived profile.
#[derive(Debug, Clone)]
pub struct ProfileBuilderConfig {
    /// Cities kept in the location preference.
    pub top_cities: usize,
    /// Hours kept in active-hours and peak-hours lists.
    pub top_hours: usize,
    /// Weekdays kept in the preferred-days list.
    pub top_days: usize,
}

impl Default for ProfileBuilderConfig {
    fn default() -> Self {
        Self {
            top_cities: 5,
            top_hours: 3,
            top_days: 3,
        }
    }
}

/// Builds [`PreferenceProfile`]s. Holds only immutable configuration and is
/// freely instantiable; concurrent calls share nothing.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    config: ProfileBuilderConfig,
}

impl ProfileBuilder {
    pub fn new(config: ProfileBuilderConfig) -> Self {
        Self { config }
    }

    /// Derive a preference profile from the user's data and history.
    ///
    /// Empty histories are fine: the result degrades to zero rates and
    /// empty top-N lists rather than failing.
    pub fn build_profile(
        &self,
        user: &UserProfile,
        content_history: &[ContentItem],
        interactions: &[Interaction],
    ) -> PreferenceProfile {
        let now = Utc::now();

        let interest_scores = interest_builder::build_interest_scores(user, interactions);
        let content_type_scores = interest_builder::build_content_type_scores(interactions);
        let location_preference = location_builder::build_location_preference(
            user,
            content_history,
            self.config.top_cities,
        );
        let engagement_patterns =
            behavior_builder::build_engagement_patterns(interactions, now, self.config.top_hours);
        // Independent hour tally from the engagement patterns above; both
        // views of the same signal are exposed separately.
        let time_preferences = behavior_builder::build_time_preferences(
            interactions,
            now,
            self.config.top_hours,
            self.config.top_days,
        );

        debug!(
            user_id = %user.id,
            interest_count = interest_scores.len(),
            top_city_count = location_preference.top_cities.len(),
            interaction_count = interactions.len(),
            "Built preference profile"
        );

        PreferenceProfile {
            interest_scores,
            location_preference,
            content_type_scores,
            engagement_patterns,
            time_preferences,
        }
    }
}
