use persona_bank::answer::find_answer;
use persona_bank::{Answer, ConsistencyPair};

/// Widest possible gap between two answers on the [-3, 3] scale.
const MAX_SPREAD: f64 = 6.0;

/// Mean similarity over the pairs answered on both sides, in `[0, 1]`.
///
/// Pair similarity is `1 - |a - b| / 6`. Returns 0 when no pair is complete.
pub fn check_consistency(answers: &[Answer], pairs: &[ConsistencyPair]) -> f64 {
    let mut total = 0.0;
    let mut valid_pairs = 0_u32;

    for &ConsistencyPair(first, second) in pairs {
        let (Some(a), Some(b)) = (find_answer(answers, first), find_answer(answers, second)) else {
            continue;
        };
        let spread = (f64::from(a.value) - f64::from(b.value)).abs();
        total += 1.0 - spread / MAX_SPREAD;
        valid_pairs += 1;
    }

    if valid_pairs == 0 {
        return 0.0;
    }
    total / f64::from(valid_pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const PAIRS: [ConsistencyPair; 3] = [
        ConsistencyPair(1, 25),
        ConsistencyPair(3, 27),
        ConsistencyPair(7, 31),
    ];

    fn answers(pairs: &[(u32, i8)]) -> Vec<Answer> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(question_id, value))| {
                Answer::new(question_id, value, Utc.timestamp_opt(i as i64 * 10, 0).unwrap())
            })
            .collect()
    }

    #[test]
    fn identical_pair_is_perfectly_consistent() {
        assert_eq!(check_consistency(&answers(&[(1, 3), (25, 3)]), &PAIRS), 1.0);
    }

    #[test]
    fn opposite_pair_has_zero_similarity() {
        assert_eq!(check_consistency(&answers(&[(1, 3), (25, -3)]), &PAIRS), 0.0);
    }

    #[test]
    fn no_complete_pairs_yields_zero() {
        assert_eq!(check_consistency(&[], &PAIRS), 0.0);
        assert_eq!(check_consistency(&answers(&[(1, 3), (27, 3), (31, 1)]), &PAIRS), 0.0);
        assert_eq!(check_consistency(&answers(&[(1, 3), (25, 3)]), &[]), 0.0);
    }

    #[test]
    fn averages_over_complete_pairs_only() {
        // (1,25): 1 - 0/6 = 1, (3,27): 1 - 3/6 = 0.5, (7,31) incomplete.
        let input = answers(&[(1, 2), (25, 2), (3, -1), (27, 2), (7, 3)]);
        assert_eq!(check_consistency(&input, &PAIRS), 0.75);
    }
}
