//! Human-readable recommendation text for the top-ranked places.

use serde::{Deserialize, Serialize};

use crate::types::PlaceScore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub headline: String,
    pub support: String,
}

/// Describe the leader and, when present, the runner-up.
///
/// Expects `results` ranked as returned by [`crate::aggregate()`].
#[must_use]
pub fn summarize(results: &[PlaceScore]) -> Summary {
    let Some(best) = results.first() else {
        return Summary {
            headline: "Insufficient data".to_string(),
            support: "Please run the analysis to populate results.".to_string(),
        };
    };

    let mut support = format!(
        "Highest composite fit score ({:.2}), driven by engagement ({:.0}) and positive sentiment ({:.2}).",
        best.score, best.engagement, best.sentiment
    );
    if let Some(second) = results.get(1) {
        support.push_str(&format!(
            " Next best: {} ({:.2}).",
            second.place, second.score
        ));
    }

    Summary {
        headline: format!("Recommendation: {} first", best.place),
        support,
    }
}

/// One-line takeaway about the leader, or `None` when there are no results.
#[must_use]
pub fn insight(results: &[PlaceScore]) -> Option<String> {
    results.first().map(|best| {
        format!(
            "{} show the strongest composite signal driven by engagement ({:.0}) and sentiment ({:.2}).",
            best.place, best.engagement, best.sentiment
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(place: &str, score: f64, engagement: f64, sentiment: f64) -> PlaceScore {
        PlaceScore {
            place: place.to_string(),
            score,
            engagement,
            reddit_engagement: engagement,
            youtube_engagement: 0.0,
            sentiment,
            trend: 0.0,
        }
    }

    #[test]
    fn empty_results_report_insufficient_data() {
        let summary = summarize(&[]);
        assert_eq!(summary.headline, "Insufficient data");
        assert_eq!(
            summary.support,
            "Please run the analysis to populate results."
        );
        assert!(insight(&[]).is_none());
    }

    #[test]
    fn single_result_has_no_runner_up() {
        let summary = summarize(&[row("Malls", 0.4567, 1234.4, 0.3333)]);
        assert_eq!(summary.headline, "Recommendation: Malls first");
        assert_eq!(
            summary.support,
            "Highest composite fit score (0.46), driven by engagement (1234) and positive sentiment (0.33)."
        );
    }

    #[test]
    fn runner_up_is_appended() {
        let results = [
            row("High Streets", 0.61, 5210.7, 0.1234),
            row("Malls", 0.2349, 80.0, -0.2),
        ];
        let summary = summarize(&results);
        assert_eq!(summary.headline, "Recommendation: High Streets first");
        assert!(
            summary.support.ends_with(" Next best: Malls (0.23)."),
            "got: {}",
            summary.support
        );
        assert!(summary.support.contains("engagement (5211)"));
    }

    #[test]
    fn insight_names_leader() {
        let results = [row("High Streets", 0.61, 5210.7, 0.1234)];
        assert_eq!(
            insight(&results).as_deref(),
            Some("High Streets show the strongest composite signal driven by engagement (5211) and sentiment (0.12).")
        );
    }
}
