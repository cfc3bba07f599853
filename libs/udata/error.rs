//! Error types for uncertain data construction and validation

/// Error types for uncertain value operations
#[derive(Debug, Clone, PartialEq)]
pub enum UncertainDataError {
    /// Standard deviation must be >= 0
    InvalidStdDev(f64),

    /// Sample-based representations require at least one sample
    EmptySamples,

    /// Weighted samples require a positive total weight
    InvalidTotalWeight(f64),

    /// A weight was negative or non-finite
    InvalidWeight(f64),
}

impl std::fmt::Display for UncertainDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UncertainDataError::InvalidStdDev(value) => {
                write!(f, "Invalid standard deviation {} (must be >= 0)", value)
            }
            UncertainDataError::EmptySamples => {
                write!(f, "Sample set cannot be empty")
            }
            UncertainDataError::InvalidTotalWeight(total) => {
                write!(f, "Invalid total weight {} (must be > 0)", total)
            }
            UncertainDataError::InvalidWeight(weight) => {
                write!(f, "Invalid sample weight {} (must be finite and >= 0)", weight)
            }
        }
    }
}

impl std::error::Error for UncertainDataError {}
