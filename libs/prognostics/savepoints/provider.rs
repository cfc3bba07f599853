use crate::{savepoints::error::SavePointError, Time};

/// A source of save points
///
/// Providers are queried fresh on each predict invocation; the returned
/// times may depend on the query time `now`. Providers need not return
/// sorted or unique times — the composite normalizes.
pub trait SavePointProvider {
    /// Future times at which intermediate results should be captured, given
    /// that prediction starts at `now`.
    fn save_points(&self, now: Time) -> Result<Vec<Time>, SavePointError>;
}
