//! Error types for save point collection

/// Error types for save point providers and their aggregation
#[derive(Debug, Clone, PartialEq)]
pub enum SavePointError {
    /// A provider could not produce save points for the query time
    Unavailable(String),

    /// A registered provider failed during a composite query
    ///
    /// `index` is the provider's registration position in the composite.
    Provider { index: usize, reason: String },
}

impl std::fmt::Display for SavePointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavePointError::Unavailable(msg) => {
                write!(f, "Save points unavailable: {}", msg)
            }
            SavePointError::Provider { index, reason } => {
                write!(f, "Save point provider {} failed: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for SavePointError {}
