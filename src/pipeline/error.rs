//! Transformation errors.

/// Errors returned by [`crate::pipeline::transform`].
///
/// None of these are fatal. Each one is scoped to a single call and the
/// caller may retry with the same or different input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Enter some text to transform")]
    EmptyInput,

    #[error("Text is too long: {length} characters (max {max})")]
    InputTooLong { length: usize, max: usize },

    #[error("Transformation failed, please retry")]
    Failed,
}

impl TransformError {
    /// Whether the error came from validating the input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InputTooLong { .. })
    }
}
