use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("Input mismatch: {0}")]
    InputMismatch(String),

    #[error(
        "Malformed toll entry {toll_index} on leg {leg_index} (step {step_index:?}): no usable location"
    )]
    MalformedTollEntry {
        leg_index: usize,
        step_index: Option<usize>,
        toll_index: usize,
    },

    #[error("Degenerate baseline: {0}")]
    DegenerateBaseline(String),
}
