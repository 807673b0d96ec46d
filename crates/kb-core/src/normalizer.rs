//! Turns raw query-bar text into the form the matcher compares.
//!
//! Normalisation is trim + lowercase. An empty result means "no query".

/// Trim surrounding whitespace and lowercase `raw`.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when `raw` normalises to the empty string.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
