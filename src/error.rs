use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid input: need at least {required} waypoint(s), got {actual}")]
    InvalidInput { required: usize, actual: usize },

    // Never produced by our own computations, the arccosine argument is clamped.
    #[error("numeric domain error: arccosine argument {0} is outside [-1, 1]")]
    NumericDomain(f64),
}
