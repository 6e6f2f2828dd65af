//! Personalization and ranking engine for the Buzz it app.
//!
//! Two capabilities share the same similarity primitives: feed ranking
//! (derive a [`models::PreferenceProfile`] with [`ProfileBuilder`], score
//! candidates with [`RelevanceScorer`], assemble the page with
//! [`FeedRanker`]) and follow suggestions ([`UserRecommender`]).
//! [`TrendingRanker`] covers users without interaction history.
//!
//! Every operation is a synchronous pure function of its arguments; the
//! engine holds no shared mutable state and performs no I/O, so values
//! can be shared freely across request handlers.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::EngineConfig;
pub use services::{
    FeedRanker, ProfileBuilder, RelevanceScorer, TrendingRanker, UserRecommender,
};
