//! Score computation, level classification and commentary.

use serde::{Deserialize, Serialize};

use super::catalog::question_by_id;
use super::error::ScoringError;
use super::Answer;

/// One question's weighted contribution to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub question_id: u32,
    pub raw_value: u8,
    pub weight: f64,
    /// `raw_value * weight`, rounded to 2 decimals.
    pub weighted_value: f64,
}

/// Score band, by threshold on the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreLevel {
    VeryGood,
    Good,
    Neutral,
    Low,
    NeedsImprovement,
}

/// The full outcome of scoring one answer set.
///
/// `positive_score`, `negative_score` and `total_score` are each rounded to
/// 2 decimals after their own partial sum, so `total_score` is not
/// guaranteed to equal `positive_score - negative_score` to the last
/// representable digit. That is a long-standing reproducible quirk of the
/// product and callers must not "fix it up".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: f64,
    /// Sum of weighted contributions from positive-weight questions (>= 0).
    pub positive_score: f64,
    /// Absolute value of the negative-weight sum (>= 0).
    pub negative_score: f64,
    pub contributions: Vec<Contribution>,
    pub commentary: String,
    pub level: ScoreLevel,
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Classify a total score into its band.
///
/// Boundaries are half-open: exactly 60 is very-good, exactly 20 is good,
/// exactly -20 is low (not neutral) and exactly -60 is needs-improvement
/// (not low).
pub fn level_for(score: f64) -> ScoreLevel {
    if score >= 60.0 {
        ScoreLevel::VeryGood
    } else if score >= 20.0 {
        ScoreLevel::Good
    } else if score > -20.0 {
        ScoreLevel::Neutral
    } else if score > -60.0 {
        ScoreLevel::Low
    } else {
        ScoreLevel::NeedsImprovement
    }
}

/// Canned commentary for a score band.
pub fn commentary_for(level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::VeryGood => "非常に良好：高い内発的動機づけと明確な目的意識が見られます。",
        ScoreLevel::Good => "良好：ポジティブ要因が優勢です。この調子を維持しましょう。",
        ScoreLevel::Neutral => "中立：現状維持です。改善の余地があるかもしれません。",
        ScoreLevel::Low => "低め：ネガティブ要因が目立ちます。改善策の検討が必要です。",
        ScoreLevel::NeedsImprovement => {
            "要改善：動機づけの再構築が必要です。サポートや環境調整を検討してください。"
        }
    }
}

/// Score an answer set.
///
/// Every answer's question id must exist in the catalog; an unknown id is a
/// caller bug and fails with [`ScoringError::UnknownQuestion`]. Answers are
/// looked up by id, not position, so permuting the input yields an identical
/// result.
pub fn score(answers: &[Answer]) -> Result<ScoreResult, ScoringError> {
    let mut contributions = Vec::with_capacity(answers.len());

    for answer in answers {
        let question = question_by_id(answer.question_id)
            .ok_or(ScoringError::UnknownQuestion(answer.question_id))?;
        contributions.push(Contribution {
            question_id: answer.question_id,
            raw_value: answer.value,
            weight: question.weight,
            weighted_value: f64::from(answer.value) * question.weight,
        });
    }

    let total_raw: f64 = contributions.iter().map(|c| c.weighted_value).sum();
    let positive_raw: f64 = contributions
        .iter()
        .filter(|c| c.weight > 0.0)
        .map(|c| c.weighted_value)
        .sum();
    let negative_raw: f64 = contributions
        .iter()
        .filter(|c| c.weight < 0.0)
        .map(|c| c.weighted_value)
        .sum();

    let total_score = round2(total_raw);
    let level = level_for(total_score);

    Ok(ScoreResult {
        total_score,
        positive_score: round2(positive_raw),
        negative_score: round2(negative_raw.abs()),
        contributions: contributions
            .into_iter()
            .map(|c| Contribution {
                weighted_value: round2(c.weighted_value),
                ..c
            })
            .collect(),
        commentary: commentary_for(level).to_string(),
        level,
    })
}
