// ============================================
// Behavior Pattern Builder
// ============================================
//
// Analyzes the interaction log for temporal and rate patterns:
// 1. Daily like/comment/share rates over distinct active days
// 2. Most active hours of day (top N)
// 3. Time preferences: peak hours and preferred weekdays (top N)
//
// Interactions without a timestamp count as happening "now". The hour
// tally for engagement patterns and the one for time preferences are two
// independent computations over the same log; both are exposed.

use crate::models::{EngagementPatterns, Interaction, InteractionKind, TimePreferences};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use std::collections::HashSet;

pub(crate) fn build_engagement_patterns(
    interactions: &[Interaction],
    now: DateTime<Utc>,
    top_n: usize,
) -> EngagementPatterns {
    if interactions.is_empty() {
        return EngagementPatterns::default();
    }

    let mut active_days: HashSet<NaiveDate> = HashSet::new();
    let mut likes = 0u32;
    let mut comments = 0u32;
    let mut shares = 0u32;
    let mut hour_counts = [0u32; 24];

    for interaction in interactions {
        let timestamp = interaction.timestamp.unwrap_or(now);
        active_days.insert(timestamp.date_naive());
        hour_counts[timestamp.hour() as usize] += 1;

        match interaction.kind {
            InteractionKind::Like => likes += 1,
            InteractionKind::Comment => comments += 1,
            InteractionKind::Share => shares += 1,
            InteractionKind::View => {}
        }
    }

    let days_active = active_days.len().max(1) as f64;

    EngagementPatterns {
        daily_likes: f64::from(likes) / days_active,
        daily_comments: f64::from(comments) / days_active,
        daily_shares: f64::from(shares) / days_active,
        active_hours: top_buckets(&hour_counts, top_n),
    }
}

pub(crate) fn build_time_preferences(
    interactions: &[Interaction],
    now: DateTime<Utc>,
    top_hours: usize,
    top_days: usize,
) -> TimePreferences {
    if interactions.is_empty() {
        return TimePreferences::default();
    }

    let mut hour_counts = [0u32; 24];
    let mut day_counts = [0u32; 7];

    for interaction in interactions {
        let timestamp = interaction.timestamp.unwrap_or(now);
        hour_counts[timestamp.hour() as usize] += 1;
        // 0 = Sunday .. 6 = Saturday
        day_counts[timestamp.weekday().num_days_from_sunday() as usize] += 1;
    }

    TimePreferences {
        peak_hours: top_buckets(&hour_counts, top_hours),
        preferred_days: top_buckets(&day_counts, top_days),
    }
}

/// Top-N bucket indices by descending count. Iterating the fixed array in
/// ascending index order and stable-sorting means ties resolve to the
/// lower hour/day. Empty buckets never qualify.
fn top_buckets(counts: &[u32], n: usize) -> Vec<u8> {
    let mut ranked: Vec<(u8, u32)> = counts
        .iter()
        .enumerate()
        .map(|(bucket, &count)| (bucket as u8, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .take(n)
        .map(|(bucket, _)| bucket)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn interaction_at(kind: InteractionKind, timestamp: DateTime<Utc>) -> Interaction {
        Interaction {
            user_id: Uuid::new_v4(),
            content_id: Uuid::new_v4(),
            kind,
            timestamp: Some(timestamp),
            content_interests: Vec::new(),
            content_type: None,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_rates_over_distinct_days() {
        // 4 likes and 2 shares spread over 2 distinct days
        let interactions = vec![
            interaction_at(InteractionKind::Like, at(1, 9)),
            interaction_at(InteractionKind::Like, at(1, 10)),
            interaction_at(InteractionKind::Like, at(2, 9)),
            interaction_at(InteractionKind::Like, at(2, 10)),
            interaction_at(InteractionKind::Share, at(1, 9)),
            interaction_at(InteractionKind::Share, at(2, 9)),
        ];

        let patterns = build_engagement_patterns(&interactions, Utc::now(), 3);

        assert!((patterns.daily_likes - 2.0).abs() < 1e-9);
        assert!((patterns.daily_shares - 1.0).abs() < 1e-9);
        assert_eq!(patterns.daily_comments, 0.0);
    }

    #[test]
    fn test_views_counted_for_hours_not_rates() {
        let interactions = vec![
            interaction_at(InteractionKind::View, at(1, 22)),
            interaction_at(InteractionKind::View, at(1, 22)),
        ];

        let patterns = build_engagement_patterns(&interactions, Utc::now(), 3);

        assert_eq!(patterns.daily_likes, 0.0);
        assert_eq!(patterns.active_hours, vec![22]);
    }

    #[test]
    fn test_top_hours_tie_breaks_ascending() {
        let interactions = vec![
            interaction_at(InteractionKind::Like, at(1, 9)),
            interaction_at(InteractionKind::Like, at(1, 21)),
            interaction_at(InteractionKind::Like, at(1, 21)),
            interaction_at(InteractionKind::Like, at(1, 14)),
        ];

        let patterns = build_engagement_patterns(&interactions, Utc::now(), 3);

        // 21 leads on count; 9 and 14 tie and resolve in ascending order
        assert_eq!(patterns.active_hours, vec![21, 9, 14]);
    }

    #[test]
    fn test_missing_timestamp_defaults_to_now() {
        let interactions = vec![Interaction {
            user_id: Uuid::new_v4(),
            content_id: Uuid::new_v4(),
            kind: InteractionKind::Like,
            timestamp: None,
            content_interests: Vec::new(),
            content_type: None,
        }];
        let now = at(1, 15);

        let patterns = build_engagement_patterns(&interactions, now, 3);
        assert_eq!(patterns.active_hours, vec![15]);
        assert!((patterns.daily_likes - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_preferred_days_sunday_indexed() {
        // 2026-03-01 is a Sunday, 2026-03-02 a Monday
        let interactions = vec![
            interaction_at(InteractionKind::Like, at(1, 9)),
            interaction_at(InteractionKind::Like, at(1, 10)),
            interaction_at(InteractionKind::Like, at(2, 9)),
        ];

        let prefs = build_time_preferences(&interactions, Utc::now(), 3, 3);

        assert_eq!(prefs.preferred_days, vec![0, 1]);
    }

    #[test]
    fn test_peak_hours_match_engagement_tally() {
        let interactions = vec![
            interaction_at(InteractionKind::Comment, at(3, 20)),
            interaction_at(InteractionKind::Comment, at(4, 20)),
            interaction_at(InteractionKind::View, at(5, 8)),
        ];
        let now = Utc::now();

        let patterns = build_engagement_patterns(&interactions, now, 3);
        let prefs = build_time_preferences(&interactions, now, 3, 3);

        assert_eq!(patterns.active_hours, prefs.peak_hours);
        assert_eq!(prefs.peak_hours, vec![20, 8]);
    }

    #[test]
    fn test_empty_interactions() {
        let patterns = build_engagement_patterns(&[], Utc::now(), 3);
        assert_eq!(patterns.daily_likes, 0.0);
        assert!(patterns.active_hours.is_empty());

        let prefs = build_time_preferences(&[], Utc::now(), 3, 3);
        assert!(prefs.peak_hours.is_empty());
        assert!(prefs.preferred_days.is_empty());
    }
}
