/// Fatal sanitization failures.
///
/// Malformed data never produces one of these: bad fields, shapes, scenes
/// and animations degrade by omission. Only inputs that exceed a structural
/// resource bound are rejected outright.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("input nesting exceeds the maximum depth of {limit}")]
    TooDeep { limit: usize },

    #[error("input contains more than {limit} values")]
    TooManyNodes { limit: usize },

    #[error("input exceeds the maximum size of {limit} bytes")]
    InputTooLarge { limit: u64 },

    #[error("failed to serialize sanitized document: {message}")]
    Output { message: String },
}
