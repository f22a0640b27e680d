//! Search-interest time series: per-date, per-keyword interest indexes.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use footfall_core::AppConfig;
use serde::{Deserialize, Serialize};

use crate::aggregate::mean;
use crate::error::SignalError;

/// Most keywords the search-interest source accepts in one request.
pub const TRENDS_MAX_KEYWORDS: usize = 5;

/// One date's interest values, aligned with [`TrendFrame::keywords`].
///
/// `None` marks a keyword with no value on this date, which happens after
/// merging batches that cover different date ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    pub date: NaiveDate,
    pub values: Vec<Option<u32>>,
}

/// A row as returned by the search-interest source, including its
/// partial-data flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrendRow {
    pub date: NaiveDate,
    pub values: Vec<u32>,
    #[serde(default, rename = "isPartial")]
    pub is_partial: bool,
}

/// Deserialization goes through [`TrendFrame::new`], so a frame read from
/// JSON or YAML satisfies the same width and uniqueness checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTrendFrame")]
pub struct TrendFrame {
    keywords: Vec<String>,
    rows: Vec<TrendRow>,
}

#[derive(Deserialize)]
struct UncheckedTrendFrame {
    keywords: Vec<String>,
    #[serde(default)]
    rows: Vec<TrendRow>,
}

impl TryFrom<UncheckedTrendFrame> for TrendFrame {
    type Error = SignalError;

    fn try_from(raw: UncheckedTrendFrame) -> Result<Self, Self::Error> {
        Self::new(raw.keywords, raw.rows)
    }
}

impl TrendFrame {
    /// Build a frame, checking keyword and date uniqueness and row widths.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError`] if a keyword or date repeats or a row does not
    /// carry one value per keyword.
    pub fn new(keywords: Vec<String>, rows: Vec<TrendRow>) -> Result<Self, SignalError> {
        let mut seen_keywords = HashSet::new();
        for keyword in &keywords {
            if !seen_keywords.insert(keyword.as_str()) {
                return Err(SignalError::DuplicateTrendKeyword(keyword.clone()));
            }
        }

        let mut seen_dates = HashSet::new();
        for row in &rows {
            if row.values.len() != keywords.len() {
                return Err(SignalError::TrendRowWidth {
                    date: row.date,
                    expected: keywords.len(),
                    found: row.values.len(),
                });
            }
            if !seen_dates.insert(row.date) {
                return Err(SignalError::DuplicateTrendDate(row.date));
            }
        }

        Ok(Self { keywords, rows })
    }

    /// Build a frame from source rows, discarding the partial-data flag.
    ///
    /// # Errors
    ///
    /// Same as [`TrendFrame::new`].
    pub fn from_raw(keywords: Vec<String>, rows: Vec<RawTrendRow>) -> Result<Self, SignalError> {
        let rows = rows
            .into_iter()
            .map(|raw| TrendRow {
                date: raw.date,
                values: raw.values.into_iter().map(Some).collect(),
            })
            .collect();
        Self::new(keywords, rows)
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn rows(&self) -> &[TrendRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean of each keyword column's mean interest.
    ///
    /// Absent cells are skipped, as are columns with no values at all.
    /// An empty frame yields `0.0`.
    #[must_use]
    pub fn mean_interest(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let column_means: Vec<f64> = (0..self.keywords.len())
            .filter_map(|col| {
                let values: Vec<f64> = self
                    .rows
                    .iter()
                    .filter_map(|row| row.values[col])
                    .map(f64::from)
                    .collect();
                if values.is_empty() {
                    None
                } else {
                    Some(mean(&values))
                }
            })
            .collect();
        mean(&column_means)
    }
}

/// Split search topics into request-sized batches, preserving order.
///
/// A `batch_size` of zero is treated as one.
pub fn batch_keywords<S: AsRef<str>>(queries: &[S], batch_size: usize) -> Vec<Vec<String>> {
    queries
        .chunks(batch_size.max(1))
        .map(|chunk| chunk.iter().map(|q| q.as_ref().to_string()).collect())
        .collect()
}

/// Batch search topics using the configured request size, clamped to
/// [`TRENDS_MAX_KEYWORDS`].
#[must_use]
pub fn batch_queries<S: AsRef<str>>(config: &AppConfig, queries: &[S]) -> Vec<Vec<String>> {
    batch_keywords(queries, config.trends_batch_size.min(TRENDS_MAX_KEYWORDS))
}

/// Outer-merge per-batch frames on date, sorted ascending.
///
/// Frames without rows are skipped, as the source returns those for batches
/// it could not serve. Dates missing from a batch leave that batch's cells
/// absent.
///
/// # Errors
///
/// Returns [`SignalError::DuplicateTrendKeyword`] if two batches share a keyword.
pub fn merge_trend_frames<I>(frames: I) -> Result<TrendFrame, SignalError>
where
    I: IntoIterator<Item = TrendFrame>,
{
    let mut keywords: Vec<String> = Vec::new();
    let mut by_date: BTreeMap<NaiveDate, Vec<Option<u32>>> = BTreeMap::new();
    let mut merged_batches = 0_usize;

    for frame in frames {
        if frame.is_empty() {
            tracing::debug!(keywords = ?frame.keywords, "skipping empty trend batch");
            continue;
        }
        if let Some(dup) = frame.keywords.iter().find(|k| keywords.contains(k)) {
            return Err(SignalError::DuplicateTrendKeyword(dup.clone()));
        }

        let before = keywords.len();
        keywords.extend(frame.keywords);
        let width = keywords.len();

        for row in frame.rows {
            by_date
                .entry(row.date)
                .or_insert_with(|| vec![None; before])
                .extend(row.values);
        }
        for cells in by_date.values_mut() {
            cells.resize(width, None);
        }
        merged_batches += 1;
    }

    tracing::debug!(
        batches = merged_batches,
        keywords = keywords.len(),
        dates = by_date.len(),
        "merged trend batches"
    );

    let rows = by_date
        .into_iter()
        .map(|(date, values)| TrendRow { date, values })
        .collect();
    Ok(TrendFrame { keywords, rows })
}
