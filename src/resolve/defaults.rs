//! Built-in fallback constants.
//!
//! These values are part of the public API and referenced by external
//! callers (renderers preloading the default assets, backends authoring the
//! sentinel); they must stay stable across versions.

use crate::resolve::scene::ResolvedOverlay;
use crate::session::model::OverlayKind;

/// Sentinel a backend writes into `markerDataUrl` to request the built-in
/// hiro pattern instead of an uploaded marker. Matched exactly,
/// case-sensitive, and only under the `hiro` marker type.
pub const HIRO_MARKER_SENTINEL: &str = "USE_DEFAULT_HIRO_PATTERN";

/// URL of the built-in hiro tracking pattern substituted for the sentinel.
pub const DEFAULT_HIRO_PATTERN_URL: &str = "/assets/patterns/patt.hiro";

/// Asset URL of the built-in default overlay (the logo model).
pub const DEFAULT_OVERLAY_SRC: &str = "/assets/models/default-logo.glb";

/// Per-axis scale of the built-in default overlay.
pub const DEFAULT_OVERLAY_SCALE: [f64; 3] = [0.5, 0.5, 0.5];

/// Position of the built-in default overlay relative to the marker.
pub const DEFAULT_OVERLAY_POSITION: [f64; 3] = [0.0, 0.25, 0.0];

/// Euler rotation in degrees laying the logo flat on the marker plane.
pub const DEFAULT_OVERLAY_ROTATION: [f64; 3] = [-90.0, 0.0, 0.0];

/// The built-in default overlay, fully materialized.
///
/// Unlike overlays derived from an authored [`crate::OverlaySpec`], every
/// transform field is present: renderers may rely on the default scene
/// needing no further defaulting.
pub fn builtin_default_overlay() -> ResolvedOverlay {
    ResolvedOverlay {
        kind: OverlayKind::Model,
        src: Some(DEFAULT_OVERLAY_SRC.to_string()),
        scale: Some(DEFAULT_OVERLAY_SCALE),
        position: Some(DEFAULT_OVERLAY_POSITION),
        rotation: Some(DEFAULT_OVERLAY_ROTATION),
        text: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/defaults.rs"]
mod tests;
