use serde::{Deserialize, Serialize};

use crate::trends::TrendFrame;

/// A discussion-forum submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Body text. Link posts have none.
    #[serde(default)]
    pub selftext: Option<String>,
    /// Net vote score; may be negative.
    pub score: i64,
    pub num_comments: u64,
}

/// A comment on a discussion-forum submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscussionComment {
    /// Parent submission. Provenance only.
    pub post_id: String,
    #[serde(default)]
    pub body: Option<String>,
    pub score: i64,
}

/// Video search-result metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMeta {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Public counters for one video, keyed by `video_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStats {
    pub video_id: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
}

/// All collected inputs for one aggregation run.
///
/// A source that failed upstream is passed as an empty slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalSources<'a> {
    pub posts: &'a [DiscussionPost],
    pub comments: &'a [DiscussionComment],
    pub videos: &'a [VideoMeta],
    pub video_stats: &'a [VideoStats],
    pub trends: Option<&'a TrendFrame>,
}

/// One ranked row of aggregation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceScore {
    pub place: String,
    /// Composite fit score used for ranking.
    pub score: f64,
    pub engagement: f64,
    pub reddit_engagement: f64,
    pub youtube_engagement: f64,
    /// Weighted mean compound sentiment in `[-1.0, 1.0]`.
    pub sentiment: f64,
    /// Mean search interest, shared by every place in a run.
    pub trend: f64,
}
