/// Errors raised by the dataset loader and the interactive prompts.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("dataset is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{0}' has no values to impute from")]
    EmptyColumn(&'static str),

    #[error("'{value}' is not a valid {expected}")]
    InvalidInput {
        value: String,
        expected: &'static str,
    },

    #[error("unexpected end of input")]
    EndOfInput,
}
