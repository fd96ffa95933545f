use serde::{Deserialize, Serialize};

/// Canonical list shape every list endpoint is normalized into by the
/// response gateway, regardless of how the backend nested its envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
        }
    }
}
