//! Per-place signal aggregation and composite scoring.

use std::collections::HashSet;

use footfall_core::LocationCategory;

use crate::matching::KeywordSet;
use crate::sentiment::{default_analyzer, SentimentAnalyzer};
use crate::types::{
    DiscussionComment, DiscussionPost, PlaceScore, SignalSources, VideoMeta, VideoStats,
};

/// Engagement at which `tanh` reaches about 0.76 of its range.
const ENGAGEMENT_SCALE: f64 = 10_000.0;
const ENGAGEMENT_WEIGHT: f64 = 0.6;
const SENTIMENT_WEIGHT: f64 = 0.2;
const TREND_WEIGHT: f64 = 0.2;

const POST_SENTIMENT_WEIGHT: f64 = 0.6;
const COMMENT_SENTIMENT_WEIGHT: f64 = 0.4;

const VIEW_WEIGHT: f64 = 0.001;
const LIKE_WEIGHT: f64 = 0.01;
const VIDEO_COMMENT_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DiscussionSignal {
    engagement: f64,
    sentiment: f64,
    matched: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct VideoSignal {
    views: f64,
    likes: f64,
    comments: f64,
    matched: usize,
}

impl VideoSignal {
    fn engagement(&self) -> f64 {
        self.views * VIEW_WEIGHT + self.likes * LIKE_WEIGHT + self.comments * VIDEO_COMMENT_WEIGHT
    }
}

/// Score every category against the collected sources with the built-in
/// sentiment lexicon. See [`aggregate_with_analyzer`].
#[must_use]
pub fn aggregate(sources: &SignalSources<'_>, categories: &[LocationCategory]) -> Vec<PlaceScore> {
    aggregate_with_analyzer(default_analyzer(), sources, categories)
}

/// Score every category against the collected sources.
///
/// For each category, in the order given:
/// 1. Posts whose title or body mention a keyword contribute votes plus
///    comment counts, and the mean sentiment of `"{title}. {selftext}"`.
/// 2. Comments whose body mentions a keyword contribute votes and mean sentiment.
/// 3. Videos whose title or description mention a keyword are joined to their
///    statistics; views, likes and comments are weighted into engagement.
/// 4. The trend frame's mean interest is shared by every category.
///
/// Rows are returned sorted by score, highest first. Ties keep category order.
/// Empty sources contribute zeros; this function never fails.
#[must_use]
pub fn aggregate_with_analyzer(
    analyzer: &SentimentAnalyzer,
    sources: &SignalSources<'_>,
    categories: &[LocationCategory],
) -> Vec<PlaceScore> {
    // Search interest is not location-specific, so it is computed once.
    let trend = sources.trends.map_or(0.0, crate::trends::TrendFrame::mean_interest);

    if sources.videos.is_empty() && !sources.video_stats.is_empty() {
        tracing::warn!(
            stats = sources.video_stats.len(),
            "video statistics supplied without video metadata; ignoring"
        );
    }

    let mut results: Vec<PlaceScore> = categories
        .iter()
        .map(|category| {
            let keywords = KeywordSet::new(&category.keywords);

            let posts = post_signal(analyzer, sources.posts, &keywords);
            let comments = comment_signal(analyzer, sources.comments, &keywords);
            let videos = video_signal(sources.videos, sources.video_stats, &keywords);

            tracing::debug!(
                place = %category.name,
                posts = posts.matched,
                comments = comments.matched,
                videos = videos.matched,
                "matched records"
            );

            let reddit_engagement = posts.engagement + comments.engagement;
            let youtube_engagement = videos.engagement();
            let engagement = reddit_engagement + youtube_engagement;
            let sentiment = posts.sentiment * POST_SENTIMENT_WEIGHT
                + comments.sentiment * COMMENT_SENTIMENT_WEIGHT;

            PlaceScore {
                place: category.name.clone(),
                score: composite_score(engagement, sentiment, trend),
                engagement,
                reddit_engagement,
                youtube_engagement,
                sentiment,
                trend,
            }
        })
        .collect();

    rank(&mut results);

    tracing::info!(
        places = results.len(),
        leader = results.first().map_or("", |r| r.place.as_str()),
        "aggregated location signals"
    );

    results
}

/// Blend squashed engagement, rescaled sentiment and trend interest.
///
/// `tanh(engagement / 10000) * 0.6 + ((sentiment + 1) / 2) * 0.2 + (trend / 100) * 0.2`
#[must_use]
pub fn composite_score(engagement: f64, sentiment: f64, trend: f64) -> f64 {
    (engagement / ENGAGEMENT_SCALE).tanh() * ENGAGEMENT_WEIGHT
        + ((sentiment + 1.0) / 2.0) * SENTIMENT_WEIGHT
        + (trend / 100.0) * TREND_WEIGHT
}

/// Stable sort by score, highest first.
pub fn rank(results: &mut [PlaceScore]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Arithmetic mean; `0.0` for an empty slice rather than NaN.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn post_signal(
    analyzer: &SentimentAnalyzer,
    posts: &[DiscussionPost],
    keywords: &KeywordSet,
) -> DiscussionSignal {
    let matched: Vec<&DiscussionPost> = posts
        .iter()
        .filter(|p| {
            keywords.matches_any_field(&[Some(p.title.as_str()), p.selftext.as_deref()])
        })
        .collect();
    if matched.is_empty() {
        return DiscussionSignal::default();
    }

    let votes: f64 = matched.iter().map(|p| p.score as f64).sum();
    let comments: f64 = matched.iter().map(|p| p.num_comments as f64).sum();

    let texts: Vec<String> = matched
        .iter()
        .map(|p| format!("{}. {}", p.title, p.selftext.as_deref().unwrap_or("")))
        .collect();
    let compounds: Vec<f64> = analyzer
        .score_texts(texts.iter().map(|t| Some(t.as_str())))
        .iter()
        .map(|s| s.compound)
        .collect();

    DiscussionSignal {
        engagement: votes + comments,
        sentiment: mean(&compounds),
        matched: matched.len(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn comment_signal(
    analyzer: &SentimentAnalyzer,
    comments: &[DiscussionComment],
    keywords: &KeywordSet,
) -> DiscussionSignal {
    let matched: Vec<&DiscussionComment> = comments
        .iter()
        .filter(|c| keywords.matches(c.body.as_deref()))
        .collect();
    if matched.is_empty() {
        return DiscussionSignal::default();
    }

    let compounds: Vec<f64> = analyzer
        .score_texts(matched.iter().map(|c| c.body.as_deref()))
        .iter()
        .map(|s| s.compound)
        .collect();

    DiscussionSignal {
        engagement: matched.iter().map(|c| c.score as f64).sum(),
        sentiment: mean(&compounds),
        matched: matched.len(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn video_signal(videos: &[VideoMeta], stats: &[VideoStats], keywords: &KeywordSet) -> VideoSignal {
    let matched: Vec<&VideoMeta> = videos
        .iter()
        .filter(|v| {
            keywords.matches_any_field(&[Some(v.title.as_str()), v.description.as_deref()])
        })
        .collect();
    if matched.is_empty() {
        return VideoSignal::default();
    }

    let joined = join_stats(&matched, stats);
    VideoSignal {
        views: joined.iter().map(|s| s.view_count as f64).sum(),
        likes: joined.iter().map(|s| s.like_count as f64).sum(),
        comments: joined.iter().map(|s| s.comment_count as f64).sum(),
        matched: matched.len(),
    }
}

/// Inner join: statistics rows whose `video_id` belongs to a matched video.
/// Videos without statistics contribute nothing.
fn join_stats<'a>(videos: &[&VideoMeta], stats: &'a [VideoStats]) -> Vec<&'a VideoStats> {
    let ids: HashSet<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
    stats
        .iter()
        .filter(|s| ids.contains(s.video_id.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
