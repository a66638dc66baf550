use crate::resolve::defaults::{DEFAULT_HIRO_PATTERN_URL, HIRO_MARKER_SENTINEL};
use crate::session::model::MarkerType;

/// Normalize a marker URL for the tracking runtime.
///
/// Substitutes the built-in hiro pattern URL when a `hiro` record carries
/// the exact [`HIRO_MARKER_SENTINEL`]; every other input passes through
/// unchanged. No well-formedness checks happen here: a malformed URL is the
/// tracking runtime's problem to report. Pure and total.
pub fn normalize_marker_url(marker_type: MarkerType, marker_data_url: &str) -> String {
    if marker_data_url == HIRO_MARKER_SENTINEL {
        if marker_type == MarkerType::Hiro {
            return DEFAULT_HIRO_PATTERN_URL.to_string();
        }
        // Sentinel under a non-hiro marker is a backend authoring error;
        // pass it through literally and let the tracking runtime surface it.
        tracing::warn!(
            ?marker_type,
            "hiro sentinel on non-hiro marker left unresolved"
        );
    }
    marker_data_url.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/marker.rs"]
mod tests;
