use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("Sample size {requested} exceeds the {available} available elements")]
    InvalidArgument { requested: usize, available: usize },
}
