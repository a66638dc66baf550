use crate::foundation::error::{LumarkError, LumarkResult};
use crate::session::model::{Asset3D, MarkerType, OverlayKind, OverlaySpec};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A fully resolved, renderer-ready scene description.
///
/// This is the outbound contract a rendering component is written against:
/// the tracking target, the ordered overlay list, and the untouched session
/// metadata. Produced by [`crate::Resolver::resolve`], held in the caller's
/// view state until the scanned code or session changes.
pub struct ResolvedConfig {
    /// Tracking target kind, copied from the raw record.
    pub marker_type: MarkerType,
    /// Marker asset URL with sentinel substitution applied.
    pub marker_data_url: String,
    /// Overlays in draw order; later entries layer on top. Never empty.
    pub overlays: Vec<ResolvedOverlay>,
    /// Original session metadata, unchanged.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: serde_json::Value,
    /// Alternate model asset, passed through unchanged.
    #[serde(default, rename = "asset3D", skip_serializing_if = "Option::is_none")]
    pub asset_3d: Option<Asset3D>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One overlay of a resolved scene.
///
/// Same shape as [`OverlaySpec`]. The built-in default overlay is always
/// fully materialized (see [`crate::builtin_default_overlay`]); an overlay
/// derived from an authored spec keeps absent fields absent, leaving their
/// defaulting to the renderer.
pub struct ResolvedOverlay {
    /// Asset kind.
    #[serde(rename = "type")]
    pub kind: OverlayKind,
    /// Asset URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Per-axis scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
    /// Position relative to the tracked marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 3]>,
    /// Euler rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    /// Text content for text overlays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ResolvedOverlay {
    /// Structural copy of an authored overlay.
    ///
    /// No defaulting is injected here: absent stays absent. Materialized
    /// defaults exist only on the built-in overlay, which is constructed
    /// separately rather than derived from a partial authored spec.
    pub fn from_spec(spec: &OverlaySpec) -> Self {
        Self {
            kind: spec.kind,
            src: spec.src.clone(),
            scale: spec.scale,
            position: spec.position,
            rotation: spec.rotation,
            text: spec.text.clone(),
        }
    }
}

impl ResolvedConfig {
    /// Encode the resolved scene as compact JSON.
    pub fn to_json_string(&self) -> LumarkResult<String> {
        serde_json::to_string(self).map_err(|e| LumarkError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/scene.rs"]
mod tests;
