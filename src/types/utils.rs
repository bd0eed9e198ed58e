//! Shared Utilities
//!
//! JSON extraction helpers for untrusted model output and small numeric
//! helpers used across the matching pipeline.

use std::collections::HashMap;
use std::fmt::Display;

// =============================================================================
// JSON Value Helpers
// =============================================================================
//
// Oracle responses are free-form JSON: every field access needs an explicit
// default. These helpers keep that policy in one place.

/// Extract string from JSON value by key.
#[inline]
pub fn json_string(value: &serde_json::Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(String::from)
}

/// Extract string with default value.
#[inline]
pub fn json_string_or(value: &serde_json::Value, key: &str, default: &str) -> String {
    json_string(value, key).unwrap_or_else(|| default.to_string())
}

/// Extract string array from JSON value by key.
#[inline]
pub fn json_string_array(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|s| s.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Extract a string→string map from JSON value by key.
/// Non-string values are skipped.
pub fn json_string_map(value: &serde_json::Value, key: &str) -> HashMap<String, String> {
    value
        .get(key)
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Round to two decimal places. All externally-visible scores use this.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Error Filtering
// =============================================================================

/// Convert a Result to Option, logging failures at warn level.
/// Used where a failed item should be skipped rather than abort a batch.
pub fn log_filter_warn<T, E: Display>(result: std::result::Result<T, E>, context: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("{}: {}", context, e);
            None
        }
    }
}
