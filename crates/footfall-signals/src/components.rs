//! Long-form views of ranked results for the charting and slide layers.

use serde::{Deserialize, Serialize};

use crate::types::PlaceScore;

/// A signal component shown in breakdown charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Engagement,
    Sentiment,
    Trend,
}

impl Component {
    pub const ALL: [Component; 3] = [
        Component::Engagement,
        Component::Sentiment,
        Component::Trend,
    ];

    fn value(self, row: &PlaceScore) -> f64 {
        match self {
            Component::Engagement => row.engagement,
            Component::Sentiment => row.sentiment,
            Component::Trend => row.trend,
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Engagement => write!(f, "engagement"),
            Component::Sentiment => write!(f, "sentiment"),
            Component::Trend => write!(f, "trend"),
        }
    }
}

/// Where engagement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementSource {
    Reddit,
    Youtube,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentValue {
    pub place: String,
    pub metric: Component,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentShare {
    pub place: String,
    pub metric: Component,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEngagement {
    pub place: String,
    pub source: EngagementSource,
    pub value: f64,
}

/// One row per place and component, in result order.
#[must_use]
pub fn component_values(results: &[PlaceScore]) -> Vec<ComponentValue> {
    results
        .iter()
        .flat_map(|row| {
            Component::ALL.into_iter().map(move |metric| ComponentValue {
                place: row.place.clone(),
                metric,
                value: metric.value(row),
            })
        })
        .collect()
}

/// Each component's share of the place's summed components.
///
/// A zero total is treated as one so the shares stay finite.
#[must_use]
pub fn component_shares(results: &[PlaceScore]) -> Vec<ComponentShare> {
    results
        .iter()
        .flat_map(|row| {
            let total = row.engagement + row.sentiment + row.trend;
            let total = if total == 0.0 { 1.0 } else { total };
            Component::ALL.into_iter().map(move |metric| ComponentShare {
                place: row.place.clone(),
                metric,
                share: metric.value(row) / total,
            })
        })
        .collect()
}

/// Discussion vs. video engagement per place, for stacked bars.
#[must_use]
pub fn engagement_sources(results: &[PlaceScore]) -> Vec<SourceEngagement> {
    results
        .iter()
        .flat_map(|row| {
            [
                (EngagementSource::Reddit, row.reddit_engagement),
                (EngagementSource::Youtube, row.youtube_engagement),
            ]
            .into_iter()
            .map(move |(source, value)| SourceEngagement {
                place: row.place.clone(),
                source,
                value,
            })
        })
        .collect()
}
