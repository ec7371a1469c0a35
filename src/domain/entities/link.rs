//! Link entity representing a shortened URL mapping.

/// A shortened URL link.
///
/// `id` is assigned by the store and never reused. `short_code` is unique across
/// all stored links; uniqueness is enforced by the store, not in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, original_url: String, short_code: String) -> Self {
        Self {
            id,
            original_url,
            short_code,
        }
    }
}

/// Input data for creating or replacing a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
}
