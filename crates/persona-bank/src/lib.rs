pub mod answer;
pub mod banks;
pub mod dimension;
pub mod error;
pub mod spec;

pub use answer::Answer;
pub use dimension::Dimension;
pub use error::BankError;
pub use spec::{BankDimensions, ConsistencyPair, DimensionSpec, QuestionBank};
