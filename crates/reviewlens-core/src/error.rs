//! Error types for ReviewLens

/// Result type alias using ReviewLens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewLens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The review batch was empty. Distinct from a legitimate low-trust
    /// result so callers can render a "no reviews yet" state instead of a
    /// misleading zero score.
    #[error("empty review batch: nothing to analyze")]
    EmptyInput,

    /// A review carried a rating outside 1..=5. Rejected rather than
    /// clamped so upstream data-quality bugs surface.
    #[error("invalid rating {rating} on review {review_id}: expected a value in 1..=5")]
    InvalidRating {
        /// Id of the offending review
        review_id: String,
        /// The out-of-range rating
        rating: u8,
    },

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Summary enrichment errors (recovered by the engine, never fatal)
    #[error("summary generation error: {0}")]
    Summary(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new summary error
    pub fn summary(msg: impl Into<String>) -> Self {
        Self::Summary(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-rating error
    pub fn invalid_rating(review_id: impl Into<String>, rating: u8) -> Self {
        Self::InvalidRating {
            review_id: review_id.into(),
            rating,
        }
    }
}
