//! Display helpers for the backend's ISO 8601 timestamps.
//!
//! The backend emits `YYYY-MM-DDTHH:MM:SS.sssZ` strings; tables and selects
//! only need minute precision, and the `datetime-local` input expects the
//! first sixteen characters verbatim.

#[cfg(test)]
#[path = "fecha_test.rs"]
mod fecha_test;

/// Date and time down to minutes, e.g. `2025-06-01 10:00`.
pub fn fecha_legible(iso: &str) -> String {
    let truncated: String = iso.chars().take(16).collect();
    truncated.replace('T', " ")
}

/// Date only, e.g. `2025-06-01`.
pub fn fecha_corta(iso: &str) -> String {
    iso.chars().take(10).collect()
}

/// The value a `datetime-local` input expects, e.g. `2025-06-01T10:00`.
pub fn fecha_input(iso: &str) -> String {
    iso.chars().take(16).collect()
}
