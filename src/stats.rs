//! Summary statistics over a window of stored responses.
//!
//! The window is whatever `read_recent` returned; records matching the
//! filter policy are summarized, the rest only count toward `total_count`.

use serde::{Deserialize, Serialize};

#[cfg(feature = "store")]
use crate::store::ResponseRecord;

/// Which records count toward the statistics.
///
/// Two policies have shipped over the product's history; the canonical one
/// is [`FilterPolicy::NonZeroTotal`]. They are deliberately kept as distinct
/// selectable policies rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Drop records whose total score is exactly zero (an all-default
    /// submission scores zero and is treated as noise).
    #[default]
    NonZeroTotal,
    /// Drop records where no answer has a value above the unanswered
    /// sentinel.
    AnyPositiveAnswer,
}

#[cfg(feature = "store")]
impl FilterPolicy {
    /// Whether a record counts under this policy.
    pub fn keeps(&self, record: &ResponseRecord) -> bool {
        match self {
            FilterPolicy::NonZeroTotal => record.total_score != 0.0,
            FilterPolicy::AnyPositiveAnswer => record.answers.iter().any(|a| a.value > 0),
        }
    }
}

/// Aggregated view of a response window.
///
/// `total_count` is the window size before filtering; `count` and the four
/// aggregates describe only the records the policy kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub total_count: usize,
}

impl Statistics {
    /// All-zero statistics for an empty filtered set.
    fn empty(total_count: usize) -> Self {
        Self {
            count: 0,
            average: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            total_count,
        }
    }
}

/// Summarize a window under a named filter policy.
#[cfg(feature = "store")]
pub fn summarize(records: &[ResponseRecord], policy: FilterPolicy) -> Statistics {
    summarize_with(records, |r| policy.keeps(r))
}

/// Summarize a window under an arbitrary predicate.
#[cfg(feature = "store")]
pub fn summarize_with<F>(records: &[ResponseRecord], keep: F) -> Statistics
where
    F: Fn(&ResponseRecord) -> bool,
{
    let scores: Vec<f64> = records
        .iter()
        .filter(|r| keep(r))
        .map(|r| r.total_score)
        .collect();
    summarize_scores(&scores, records.len())
}

/// Core aggregation over the filtered total scores.
///
/// `average` and `median` are rounded to 2 decimals; `min` and `max` are the
/// unrounded extrema.
pub fn summarize_scores(scores: &[f64], total_count: usize) -> Statistics {
    if scores.is_empty() {
        return Statistics::empty(total_count);
    }

    let sum: f64 = scores.iter().sum();
    let average = sum / scores.len() as f64;

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        let lower = sorted.get(mid - 1).copied().unwrap_or(0.0);
        let upper = sorted.get(mid).copied().unwrap_or(0.0);
        (lower + upper) / 2.0
    } else {
        sorted.get(mid).copied().unwrap_or(0.0)
    };

    let min = sorted.first().copied().unwrap_or(0.0);
    let max = sorted.last().copied().unwrap_or(0.0);

    Statistics {
        count: scores.len(),
        average: round2(average),
        median: round2(median),
        min,
        max,
        total_count,
    }
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window() {
        let stats = summarize_scores(&[], 0);
        assert_eq!(stats, Statistics::empty(0));
    }

    #[test]
    fn test_all_filtered_preserves_total_count() {
        let stats = summarize_scores(&[], 5);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_count, 5);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.median, 0.0);
    }

    #[test]
    fn test_median_even_length() {
        let stats = summarize_scores(&[1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.average, 2.5);
    }

    #[test]
    fn test_median_odd_length() {
        let stats = summarize_scores(&[3.0, 1.0, 2.0], 3);
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
    }

    #[test]
    fn test_average_is_rounded_extrema_are_not() {
        let stats = summarize_scores(&[10.005, 20.005, -3.125], 3);
        assert_eq!(stats.average, 8.96);
        assert_eq!(stats.min, -3.125);
        assert_eq!(stats.max, 20.005);
    }

    #[cfg(feature = "store")]
    mod policies {
        use super::super::*;
        use crate::scoring::Answer;
        use crate::store::ResponseRecord;

        fn record(total: f64, answers: Vec<Answer>) -> ResponseRecord {
            ResponseRecord {
                id: format!("r-{total}"),
                timestamp: 0,
                answers,
                total_score: total,
                positive_score: 0.0,
                negative_score: 0.0,
            }
        }

        #[test]
        fn test_non_zero_total_policy() {
            let records = vec![
                record(10.0, vec![Answer::new(1, 4)]),
                record(0.0, vec![Answer::new(1, 4)]),
                record(-20.0, vec![Answer::new(1, 1)]),
            ];
            let stats = summarize(&records, FilterPolicy::NonZeroTotal);
            assert_eq!(stats.count, 2);
            assert_eq!(stats.total_count, 3);
            assert_eq!(stats.average, -5.0);
        }

        #[test]
        fn test_any_positive_answer_policy() {
            // Zero total but genuinely answered: kept by the alternate
            // policy, dropped by the canonical one.
            let answered_zero = record(0.0, vec![Answer::new(1, 4)]);
            let untouched = record(0.0, vec![Answer::new(1, 0), Answer::new(2, 0)]);
            let records = vec![answered_zero, untouched];

            let canonical = summarize(&records, FilterPolicy::NonZeroTotal);
            assert_eq!(canonical.count, 0);
            assert_eq!(canonical.total_count, 2);

            let alternate = summarize(&records, FilterPolicy::AnyPositiveAnswer);
            assert_eq!(alternate.count, 1);
            assert_eq!(alternate.total_count, 2);
        }

        #[test]
        fn test_custom_predicate() {
            let records = vec![
                record(50.0, vec![]),
                record(-50.0, vec![]),
            ];
            let stats = summarize_with(&records, |r| r.total_score > 0.0);
            assert_eq!(stats.count, 1);
            assert_eq!(stats.max, 50.0);
        }
    }
}
