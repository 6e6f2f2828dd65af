use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A user as seen by the engine. Owned by the user-management subsystem;
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Declared interest tags. Interests are plain string identifiers;
    /// callers resolve any richer representation before reaching the engine.
    pub interests: Vec<String>,
    pub location: Option<GeoLocation>,
    /// Ids of users this user already follows.
    pub subscribed: Vec<Uuid>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub buzz_count: u32,
    pub follower_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLocation {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// A single engagement event. Append-only; produced by the interaction
/// subsystem and consumed here in bulk per scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub kind: InteractionKind,
    /// Absent timestamps are treated as "now" during profile building.
    pub timestamp: Option<DateTime<Utc>>,
    /// Denormalized interest tags of the interacted content.
    pub content_interests: Vec<String>,
    /// Denormalized content type of the interacted content.
    pub content_type: Option<ContentType>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Comment,
    Share,
    View,
}

impl InteractionKind {
    /// Parse a raw event-type string. Unrecognized kinds collapse to `View`,
    /// the weakest signal, rather than erroring.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "like" => InteractionKind::Like,
            "comment" => InteractionKind::Comment,
            "share" => InteractionKind::Share,
            _ => InteractionKind::View,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Comment => "comment",
            InteractionKind::Share => "share",
            InteractionKind::View => "view",
        }
    }

    /// Boost added to each of the interacted content's interest tags.
    pub fn interest_boost(&self) -> f64 {
        match self {
            InteractionKind::Like => 0.3,
            InteractionKind::Comment => 0.5,
            InteractionKind::Share => 0.7,
            InteractionKind::View => 0.1,
        }
    }

    /// Weight contributed to the content-type affinity tally. Views carry
    /// no weight here.
    pub fn content_type_weight(&self) -> f64 {
        match self {
            InteractionKind::Like => 1.0,
            InteractionKind::Comment => 2.0,
            InteractionKind::Share => 3.0,
            InteractionKind::View => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
}

impl ContentType {
    /// Parse a raw content-type string; unrecognized types yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "text" => Some(ContentType::Text),
            "image" => Some(ContentType::Image),
            "video" => Some(ContentType::Video),
            "audio" => Some(ContentType::Audio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
        }
    }
}

/// A user-authored post ("buzz"). Immutable from the engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub media_url: Option<String>,
    pub content_type: Option<ContentType>,
    pub interests: Vec<String>,
    pub location: Option<GeoLocation>,
    pub created_at: DateTime<Utc>,
    pub engagement: EngagementCounters,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngagementCounters {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub views: u32,
}

/// An address-book entry supplied for contact matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A linked account from an external social network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConnection {
    pub user_id: Option<Uuid>,
    pub username: Option<String>,
}

/// Derived taste summary. Ephemeral: recomputed per call, never persisted
/// by the engine. A default instance is the empty profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Interest tag -> normalized affinity in [0, 1].
    pub interest_scores: HashMap<String, f64>,
    pub location_preference: LocationPreference,
    pub content_type_scores: ContentTypeScores,
    pub engagement_patterns: EngagementPatterns,
    pub time_preferences: TimePreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationPreference {
    /// Most-posted-in cities, highest count first.
    pub top_cities: Vec<String>,
    /// The user's declared city, if any.
    pub current_city: Option<String>,
}

/// Per-type affinity proportions. Values sum to 1 whenever any weighted
/// interaction exists, and are all zero otherwise.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContentTypeScores {
    pub text: f64,
    pub image: f64,
    pub video: f64,
    pub audio: f64,
}

impl ContentTypeScores {
    pub fn score(&self, content_type: ContentType) -> f64 {
        match content_type {
            ContentType::Text => self.text,
            ContentType::Image => self.image,
            ContentType::Video => self.video,
            ContentType::Audio => self.audio,
        }
    }

    pub fn total(&self) -> f64 {
        self.text + self.image + self.video + self.audio
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementPatterns {
    /// Average likes per active day.
    pub daily_likes: f64,
    /// Average comments per active day.
    pub daily_comments: f64,
    /// Average shares per active day.
    pub daily_shares: f64,
    /// Most active hours of day (0-23), most frequent first.
    pub active_hours: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimePreferences {
    /// Peak hours of day (0-23), most frequent first.
    pub peak_hours: Vec<u8>,
    /// Preferred days of week (0 = Sunday .. 6 = Saturday).
    pub preferred_days: Vec<u8>,
}

/// A who-to-follow suggestion with its score and up to three
/// human-readable reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecommendation {
    pub user: UserProfile,
    pub score: f64,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_kind_parse() {
        assert_eq!(InteractionKind::parse("like"), InteractionKind::Like);
        assert_eq!(InteractionKind::parse("SHARE"), InteractionKind::Share);
        // Unrecognized kinds fall back to the weakest signal
        assert_eq!(InteractionKind::parse("repost"), InteractionKind::View);
    }

    #[test]
    fn test_interest_boosts() {
        assert_eq!(InteractionKind::Like.interest_boost(), 0.3);
        assert_eq!(InteractionKind::Comment.interest_boost(), 0.5);
        assert_eq!(InteractionKind::Share.interest_boost(), 0.7);
        assert_eq!(InteractionKind::View.interest_boost(), 0.1);
    }

    #[test]
    fn test_content_type_weights() {
        assert_eq!(InteractionKind::Like.content_type_weight(), 1.0);
        assert_eq!(InteractionKind::Comment.content_type_weight(), 2.0);
        assert_eq!(InteractionKind::Share.content_type_weight(), 3.0);
        assert_eq!(InteractionKind::View.content_type_weight(), 0.0);
    }

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::parse("Video"), Some(ContentType::Video));
        assert_eq!(ContentType::parse("gif"), None);
    }

    #[test]
    fn test_default_profile_is_empty() {
        let profile = PreferenceProfile::default();
        assert!(profile.interest_scores.is_empty());
        assert_eq!(profile.content_type_scores.total(), 0.0);
        assert!(profile.time_preferences.peak_hours.is_empty());
    }

    #[test]
    fn test_content_type_scores_lookup() {
        let scores = ContentTypeScores {
            text: 0.1,
            image: 0.2,
            video: 0.6,
            audio: 0.1,
        };
        assert_eq!(scores.score(ContentType::Video), 0.6);
        assert!((scores.total() - 1.0).abs() < 1e-9);
    }
}
