use std::fmt;

use persona_bank::Answer;
use serde::{Deserialize, Serialize};

/// A suspicious response pattern. Reported alongside the result, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anomaly {
    ExtremeResponsePattern,
    ExcessiveNeutralResponses,
    TooFastCompletion,
}

impl Anomaly {
    pub fn tag(self) -> &'static str {
        match self {
            Anomaly::ExtremeResponsePattern => "extreme_response_pattern",
            Anomaly::ExcessiveNeutralResponses => "excessive_neutral_responses",
            Anomaly::TooFastCompletion => "too_fast_completion",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Trigger levels for [`detect_anomalies`]. Ratios are strict lower bounds,
/// the gap is a strict upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyThresholds {
    pub extreme_ratio: f64,
    pub neutral_ratio: f64,
    pub min_mean_gap_ms: f64,
}

impl Default for AnomalyThresholds {
    fn default() -> Self {
        Self {
            extreme_ratio: 0.8,
            neutral_ratio: 0.6,
            min_mean_gap_ms: 2000.0,
        }
    }
}

/// Checks run in a fixed order; the returned tags keep that order.
pub fn detect_anomalies(answers: &[Answer], thresholds: &AnomalyThresholds) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    if answers.is_empty() {
        return anomalies;
    }

    let total = answers.len() as f64;

    let extreme = answers.iter().filter(|answer| answer.is_extreme()).count() as f64;
    if extreme / total > thresholds.extreme_ratio {
        anomalies.push(Anomaly::ExtremeResponsePattern);
    }

    let neutral = answers.iter().filter(|answer| answer.is_neutral()).count() as f64;
    if neutral / total > thresholds.neutral_ratio {
        anomalies.push(Anomaly::ExcessiveNeutralResponses);
    }

    if let Some(mean_gap) = mean_gap_ms(answers) {
        if mean_gap < thresholds.min_mean_gap_ms {
            anomalies.push(Anomaly::TooFastCompletion);
        }
    }

    anomalies
}

/// Mean gap between consecutive answers in collection order, in fractional
/// milliseconds. Out-of-order timestamps contribute negative gaps.
///
/// Consecutive gaps telescope, so their sum is the span from the first to the
/// last answer.
fn mean_gap_ms(answers: &[Answer]) -> Option<f64> {
    let (first, last) = match answers {
        [first, .., last] => (first, last),
        _ => return None,
    };
    let span = last.answered_at - first.answered_at;
    let span_ms = span
        .num_nanoseconds()
        .map(|nanos| nanos as f64 / 1e6)
        .unwrap_or_else(|| span.num_milliseconds() as f64);
    Some(span_ms / (answers.len() - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
    }

    fn paced(values: &[i8], gap_ms: i64) -> Vec<Answer> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Answer::new(i as u32 + 1, value, start() + Duration::milliseconds(gap_ms * i as i64))
            })
            .collect()
    }

    #[test]
    fn empty_input_has_no_anomalies() {
        assert!(detect_anomalies(&[], &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn nine_of_ten_extremes_is_flagged() {
        let answers = paced(&[3, -3, 3, -3, 3, -3, 3, -3, 3, 1], 5_000);
        assert_eq!(
            detect_anomalies(&answers, &AnomalyThresholds::default()),
            vec![Anomaly::ExtremeResponsePattern]
        );
    }

    #[test]
    fn exactly_eighty_percent_extremes_is_not_flagged() {
        let answers = paced(&[3, 3, 3, 3, 3, 3, 3, 3, 1, 1], 5_000);
        assert!(detect_anomalies(&answers, &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn mostly_neutral_is_flagged() {
        let answers = paced(&[0, 0, 0, 0, 0, 0, 0, 1, 2, -1], 5_000);
        assert_eq!(
            detect_anomalies(&answers, &AnomalyThresholds::default()),
            vec![Anomaly::ExcessiveNeutralResponses]
        );
    }

    #[test]
    fn fast_completion_is_flagged_in_order() {
        let answers = paced(&[3, 3, 3, 3, 3], 500);
        assert_eq!(
            detect_anomalies(&answers, &AnomalyThresholds::default()),
            vec![Anomaly::ExtremeResponsePattern, Anomaly::TooFastCompletion]
        );
    }

    #[test]
    fn single_answer_never_too_fast() {
        let answers = paced(&[1], 0);
        assert!(detect_anomalies(&answers, &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn two_second_mean_gap_is_not_too_fast() {
        let answers = paced(&[1, 2, 1], 2_000);
        assert!(detect_anomalies(&answers, &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn sub_millisecond_gaps_are_not_truncated() {
        // 2000.9 ms then 1999.9 ms: the true mean is 2000.4 ms.
        let t = start();
        let second = t + Duration::microseconds(2_000_900);
        let answers = vec![
            Answer::new(1, 1, t),
            Answer::new(2, 2, second),
            Answer::new(3, 1, second + Duration::microseconds(1_999_900)),
        ];
        let mean = mean_gap_ms(&answers).unwrap();
        assert!((mean - 2000.4).abs() < 1e-9, "mean gap {mean}");
        assert!(detect_anomalies(&answers, &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn exactly_sixty_percent_neutral_is_not_flagged() {
        let answers = paced(&[0, 0, 0, 0, 0, 0, 1, 2, -1, 1], 5_000);
        assert!(detect_anomalies(&answers, &AnomalyThresholds::default()).is_empty());
    }

    #[test]
    fn gaps_follow_collection_order() {
        // Sorted, the mean gap would be 10s.
        let t = start();
        let answers = vec![
            Answer::new(1, 1, t + Duration::seconds(20)),
            Answer::new(2, 1, t),
            Answer::new(3, 1, t + Duration::seconds(1)),
        ];
        // (-20s + 1s) / 2 = -9.5s < 2s
        assert_eq!(
            detect_anomalies(&answers, &AnomalyThresholds::default()),
            vec![Anomaly::TooFastCompletion]
        );
    }

    #[test]
    fn thresholds_are_configurable() {
        let answers = paced(&[1, 2, 1], 2_500);
        let strict = AnomalyThresholds {
            min_mean_gap_ms: 3_000.0,
            ..AnomalyThresholds::default()
        };
        assert_eq!(detect_anomalies(&answers, &strict), vec![Anomaly::TooFastCompletion]);
    }

    #[test]
    fn tags_serialize_as_snake_case() {
        let json = serde_json::to_string(&Anomaly::ExcessiveNeutralResponses).unwrap();
        assert_eq!(json, "\"excessive_neutral_responses\"");
        assert_eq!(Anomaly::TooFastCompletion.to_string(), "too_fast_completion");
    }
}
