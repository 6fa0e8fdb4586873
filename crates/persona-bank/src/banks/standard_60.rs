use crate::{BankDimensions, ConsistencyPair, DimensionSpec, QuestionBank};

pub const NAME: &str = "standard-60";

const E_I: [u32; 12] = [1, 5, 9, 13, 17, 21, 25, 29, 33, 37, 41, 45];
const S_N: [u32; 12] = [2, 6, 10, 14, 18, 22, 26, 30, 34, 38, 42, 46];
const T_F: [u32; 12] = [3, 7, 11, 15, 19, 23, 27, 31, 35, 39, 43, 47];
const J_P: [u32; 12] = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48];
const A_T: [u32; 12] = [49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60];

// +1: agreement pushes toward the high pole, -1: reverse-scored.
const E_I_WEIGHTS: [i8; 12] = [1, -1, 1, -1, 1, -1, 1, -1, 1, -1, 1, 1];
const S_N_WEIGHTS: [i8; 12] = [-1, 1, 1, -1, -1, 1, 1, -1, 1, -1, 1, 1];
const T_F_WEIGHTS: [i8; 12] = [1, 1, -1, 1, -1, 1, -1, 1, -1, 1, -1, -1];
const J_P_WEIGHTS: [i8; 12] = [1, -1, 1, -1, 1, -1, 1, -1, -1, 1, 1, -1];
const A_T_WEIGHTS: [i8; 12] = [-1, -1, 1, 1, -1, -1, 1, 1, -1, 1, 1, -1];

const PAIRS: [ConsistencyPair; 3] = [
    ConsistencyPair(1, 25),
    ConsistencyPair(3, 27),
    ConsistencyPair(7, 31),
];

fn spec(questions: [u32; 12], weights: [i8; 12]) -> DimensionSpec {
    DimensionSpec::new(questions.to_vec(), weights.to_vec())
}

/// The shipped 60-question bank, 12 questions per dimension.
pub fn bank() -> QuestionBank {
    QuestionBank {
        name: NAME.to_string(),
        consistency_pairs: PAIRS.to_vec(),
        dimensions: BankDimensions {
            extraversion: spec(E_I, E_I_WEIGHTS),
            intuition: spec(S_N, S_N_WEIGHTS),
            feeling: spec(T_F, T_F_WEIGHTS),
            judging: spec(J_P, J_P_WEIGHTS),
            assertive: spec(A_T, A_T_WEIGHTS),
        },
    }
}
