use std::collections::HashSet;

use crate::models::company::CompanyHistory;
use crate::store::record_store::RecordStore;

/// Maximum number of suggestions a query can produce.
pub const MAX_SUGGESTIONS: usize = 10;

/// Resolves a query string to candidate companies.
///
/// Pure function of (store, query); holds no state between calls.
pub struct SearchIndex;

impl SearchIndex {
    pub fn new() -> Self {
        Self
    }

    /// Find companies whose code or short name contains `query` as a
    /// case-sensitive substring.
    ///
    /// Results are deduplicated by company code, keep the identity table's
    /// first-seen order (stable, not relevance-ranked), and are capped at
    /// [`MAX_SUGGESTIONS`]. An empty query matches nothing, not everything.
    #[must_use]
    pub fn search(&self, store: &RecordStore, query: &str) -> Vec<CompanyHistory> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut seen_codes: HashSet<&str> = HashSet::new();
        let mut results = Vec::new();

        for record in store.identity_records() {
            if results.len() == MAX_SUGGESTIONS {
                break;
            }
            if !record.company_code.contains(query) && !record.short_name.contains(query) {
                continue;
            }
            if !seen_codes.insert(record.company_code.as_str()) {
                continue;
            }
            if let Some(history) = store.history_for(&record.company_code) {
                results.push(history);
            }
        }

        results
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}
