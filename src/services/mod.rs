pub mod profile_builder;
pub mod ranking;
pub mod trending;
pub mod user_recommender;

pub use profile_builder::{ProfileBuilder, ProfileBuilderConfig};
pub use ranking::{FeedRanker, RelevanceScorer, RelevanceWeights, DEFAULT_FEED_LIMIT};
pub use trending::{TrendingConfig, TrendingRanker};
pub use user_recommender::{
    SuggestionWeights, UserRecommender, UserRecommenderConfig, DEFAULT_MIN_SCORE,
    DEFAULT_SUGGESTION_LIMIT,
};
