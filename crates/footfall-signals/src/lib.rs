//! Location-category scoring from social and search signals.
//!
//! Filters discussion posts, comments and videos by each category's keywords,
//! scores their sentiment with a lexicon model, and blends engagement,
//! sentiment and search interest into one ranked score per category. All
//! inputs are collected upstream; nothing here performs I/O.

pub mod aggregate;
pub mod components;
pub mod error;
pub mod matching;
pub mod sentiment;
pub mod summary;
pub mod trends;
pub mod types;

mod lexicon;

pub use aggregate::{aggregate, aggregate_with_analyzer, composite_score, rank};
pub use error::SignalError;
pub use footfall_core::LocationCategory;
pub use matching::{contains_any, KeywordSet};
pub use sentiment::{polarity_scores, score_texts, SentimentAnalyzer, SentimentScores};
pub use summary::{insight, summarize, Summary};
pub use trends::{
    batch_keywords, batch_queries, merge_trend_frames, RawTrendRow, TrendFrame, TrendRow,
};
pub use types::{
    DiscussionComment, DiscussionPost, PlaceScore, SignalSources, VideoMeta, VideoStats,
};
