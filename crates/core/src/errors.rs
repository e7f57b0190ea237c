use thiserror::Error;

/// Unified error type for the entire portfolio-composer-core library.
///
/// The composition core itself degrades silently to safe defaults
/// (missing scores, zero contributions, no-op mutations); errors only
/// arise at the table-loading boundary and on JSON export.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Table loading ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Table source error ({source_name}): {message}")]
    Source {
        source_name: String,
        message: String,
    },

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
