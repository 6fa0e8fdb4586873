use persona_bank::answer::find_answer;
use persona_bank::{Answer, Dimension, DimensionSpec, QuestionBank};
use serde::{Deserialize, Serialize};

/// Score returned for a dimension no answer touched.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Normalized score of a single dimension, in `[0, 100]`.
///
/// Each matched answer contributes `value * weight` to the running score and
/// `weight` to the running weight. Unmatched questions contribute nothing.
/// The weighted mean is mapped from `[-3, 3]` onto `[0, 100]` and clamped.
///
/// A zero weight total yields [`NEUTRAL_SCORE`]. A negative total is divided
/// by as is, which flips the direction of the mean; banks whose weights sum
/// non-positive are flagged when loaded.
pub fn score_dimension(answers: &[Answer], spec: &DimensionSpec) -> f64 {
    let mut total_score = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for (question_id, weight) in spec.entries() {
        let Some(answer) = find_answer(answers, question_id) else {
            continue;
        };
        let weight = f64::from(weight);
        total_score += f64::from(answer.value) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return NEUTRAL_SCORE;
    }

    let normalized = ((total_score / total_weight) + 3.0) / 6.0 * 100.0;
    normalized.clamp(0.0, 100.0)
}

/// Scores all five dimensions of `bank`.
pub fn score_all(answers: &[Answer], bank: &QuestionBank) -> DimensionScores {
    DimensionScores {
        extraversion: score_dimension(answers, bank.spec(Dimension::Extraversion)),
        intuition: score_dimension(answers, bank.spec(Dimension::Intuition)),
        feeling: score_dimension(answers, bank.spec(Dimension::Feeling)),
        judging: score_dimension(answers, bank.spec(Dimension::Judging)),
        assertive: score_dimension(answers, bank.spec(Dimension::Assertive)),
    }
}

/// The five normalized dimension scores, keyed by dimension name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub extraversion: f64,
    pub intuition: f64,
    pub feeling: f64,
    pub judging: f64,
    pub assertive: f64,
}

impl DimensionScores {
    pub fn uniform(score: f64) -> Self {
        Self {
            extraversion: score,
            intuition: score,
            feeling: score,
            judging: score,
            assertive: score,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Extraversion => self.extraversion,
            Dimension::Intuition => self.intuition,
            Dimension::Feeling => self.feeling,
            Dimension::Judging => self.judging,
            Dimension::Assertive => self.assertive,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self::uniform(NEUTRAL_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use persona_bank::banks::standard_60;
    use proptest::prelude::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn answers(pairs: &[(u32, i8)]) -> Vec<Answer> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(question_id, value))| Answer::new(question_id, value, at(i as i64 * 5)))
            .collect()
    }

    #[test]
    fn no_matching_answers_is_neutral() {
        let spec = DimensionSpec::new(vec![1, 2, 3], vec![1, 1, 1]);
        assert_eq!(score_dimension(&[], &spec), 50.0);
        assert_eq!(score_dimension(&answers(&[(9, 3)]), &spec), 50.0);
    }

    #[test]
    fn all_positive_weights_at_max_agreement_is_100() {
        let questions: Vec<u32> = (1..=12).collect();
        let spec = DimensionSpec::new(questions.clone(), vec![1; 12]);
        let input: Vec<(u32, i8)> = questions.iter().map(|&q| (q, 3)).collect();
        assert_eq!(score_dimension(&answers(&input), &spec), 100.0);
    }

    #[test]
    fn reverse_scored_question_lowers_mixed_score() {
        let spec = DimensionSpec::new(vec![1, 2, 3], vec![1, 1, -1]);
        // total_score = 1 + 1 - 3 = -1, total_weight = 1 -> mean -1 -> 33.33.
        let score = score_dimension(&answers(&[(1, 1), (2, 1), (3, 3)]), &spec);
        assert!((score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn lone_reverse_scored_answer_divides_by_negative_total() {
        let spec = DimensionSpec::new(vec![1, 2], vec![1, -1]);
        // total_score = 3 * -1 = -3, total_weight = -1 -> mean 3 -> 100.
        assert_eq!(score_dimension(&answers(&[(2, 3)]), &spec), 100.0);
    }

    #[test]
    fn zero_weight_total_with_matches_is_neutral() {
        let spec = DimensionSpec::new(vec![1, 2], vec![1, -1]);
        assert_eq!(score_dimension(&answers(&[(1, 3), (2, -3)]), &spec), 50.0);
    }

    #[test]
    fn negative_weight_total_divides_as_is() {
        let spec = DimensionSpec::new(vec![1, 2, 3], vec![-1, -1, 1]);
        // total_score = -2 - 1 + 0 = -3, total_weight = -1 -> mean 3 -> 100.
        assert_eq!(score_dimension(&answers(&[(1, 2), (2, 1), (3, 0)]), &spec), 100.0);
    }

    #[test]
    fn out_of_range_mean_is_clamped() {
        let spec = DimensionSpec::new(vec![1, 2, 3], vec![1, 1, -1]);
        // total_score = 3 + 3 + 3 = 9, total_weight = 1 -> mean 9 -> clamped.
        assert_eq!(score_dimension(&answers(&[(1, 3), (2, 3), (3, -3)]), &spec), 100.0);
    }

    #[test]
    fn missing_weights_default_to_positive() {
        let spec = DimensionSpec::new(vec![1, 2], vec![-1]);
        // total_score = -1 * -1 + 1 * 1 = 2, total_weight = 0 -> neutral.
        assert_eq!(score_dimension(&answers(&[(1, -1), (2, 1)]), &spec), 50.0);
        // Only the defaulted question answered: mean 1 -> 66.67.
        let score = score_dimension(&answers(&[(2, 1)]), &spec);
        assert!((score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_answer_uses_first_occurrence() {
        let spec = DimensionSpec::new(vec![1], vec![1]);
        assert_eq!(score_dimension(&answers(&[(1, -3), (1, 3)]), &spec), 0.0);
    }

    #[test]
    fn score_all_on_empty_input_is_neutral_everywhere() {
        let scores = score_all(&[], &standard_60::bank());
        assert_eq!(scores, DimensionScores::default());
        assert!(scores.iter().all(|(_, score)| score == 50.0));
    }

    proptest! {
        #[test]
        fn score_stays_in_range(
            weights in prop::collection::vec(prop_oneof![Just(1_i8), Just(-1_i8)], 1..16),
            values in prop::collection::vec(-3_i8..=3, 1..16),
        ) {
            let questions: Vec<u32> = (1..=weights.len() as u32).collect();
            let spec = DimensionSpec::new(questions, weights);
            let input: Vec<(u32, i8)> = values
                .iter()
                .enumerate()
                .map(|(i, &value)| (i as u32 + 1, value))
                .collect();
            let score = score_dimension(&answers(&input), &spec);
            prop_assert!((0.0..=100.0).contains(&score), "score {score}");
        }
    }
}
