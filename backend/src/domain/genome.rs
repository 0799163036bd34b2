//! Genome catalogue entries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the genome catalogue.
///
/// Serialises as `{"id": 1, "name": "Alice"}`; the field set is fixed and
/// mirrors the `genomes` table.
///
/// # Examples
/// ```
/// use luckygenome::domain::GenomeRecord;
///
/// let record = GenomeRecord::new(1, "Alice");
/// assert_eq!(record.id(), 1);
/// assert_eq!(record.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenomeRecord {
    /// Primary key from the `genomes` table.
    #[schema(example = 1)]
    id: i64,
    /// Genome display name.
    #[schema(example = "Alice")]
    name: String,
}

impl GenomeRecord {
    /// Build a record from its stored columns.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stored identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Stored name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
