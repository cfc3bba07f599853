//! Composite save point provider
//!
//! Presents one unified "give me save points" query backed by any number of
//! independently registered providers. Registration order is preserved for
//! iteration; query results are merged, sorted ascending, and deduplicated.
//!
//! Failure policy is fail-fast: the first provider that fails aborts the
//! query and its error is surfaced to the caller with the provider's
//! registration index. Partial results are never returned.

use tracing::warn;

use crate::savepoints::error::SavePointError;
use crate::savepoints::provider::SavePointProvider;
use crate::Time;

/// Aggregates the save points of N registered providers
///
/// Providers are held by non-owning reference and must outlive the
/// composite. No deduplication happens at registration; the same provider
/// registered twice is simply queried twice.
#[derive(Default)]
pub struct CompositeSavePointProvider<'a> {
    providers: Vec<&'a dyn SavePointProvider>,
}

impl<'a> CompositeSavePointProvider<'a> {
    /// Create an empty composite
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a provider; later queries visit providers in registration
    /// order.
    pub fn add(&mut self, provider: &'a dyn SavePointProvider) {
        self.providers.push(provider);
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl SavePointProvider for CompositeSavePointProvider<'_> {
    /// Union of every registered provider's save points, sorted ascending by
    /// time with duplicates collapsed to one entry.
    ///
    /// Zero registered providers yields an empty set, not an error.
    fn save_points(&self, now: Time) -> Result<Vec<Time>, SavePointError> {
        let mut merged = Vec::new();

        for (index, provider) in self.providers.iter().enumerate() {
            match provider.save_points(now) {
                Ok(points) => merged.extend(points),
                Err(source) => {
                    warn!(provider = index, error = %source, "save point provider failed");
                    return Err(SavePointError::Provider {
                        index,
                        reason: source.to_string(),
                    });
                }
            }
        }

        // Stable sort keeps registration order among equal times before the
        // duplicates collapse.
        merged.sort_by(|a, b| a.total_cmp(b));
        merged.dedup();

        Ok(merged)
    }
}
