/// Meeting library port trait
///
/// Defines the interface for the persisted collection of briefs.
/// Implementation: flat-file JSON array adapter.
use crate::domain::models::BriefRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for library operations
#[async_trait]
pub trait BriefLibraryPort: Send + Sync {
    /// Append a record, assigning and returning its identifier.
    /// Saved records are immutable; the oldest may be trimmed when the
    /// library exceeds its configured capacity.
    async fn save(&self, record: &BriefRecord) -> Result<i64>;

    /// All records in save order (callers reverse for display)
    async fn list(&self) -> Result<Vec<BriefRecord>>;

    /// Look up one record by identifier
    async fn get(&self, id: i64) -> Result<Option<BriefRecord>>;

    /// Remove every record and persist the empty library
    async fn clear(&self) -> Result<()>;

    /// Number of stored records
    async fn count(&self) -> Result<usize>;
}
