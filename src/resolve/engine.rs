use crate::resolve::marker::normalize_marker_url;
use crate::resolve::overlay::resolve_overlays;
use crate::resolve::scene::ResolvedConfig;
use crate::session::model::RawConfig;

/// Stateless resolver from raw session records to renderable scenes.
pub struct Resolver;

impl Resolver {
    #[tracing::instrument(skip(raw), fields(marker_type = ?raw.marker_type))]
    /// Resolve a raw session record into a renderer-ready scene.
    ///
    /// Total over any shape-valid record: marker URL normalization and
    /// overlay mode precedence are applied, `markerType`, `metadata` and
    /// `asset3D` are copied through unchanged. There is no error path and
    /// no state: identical input yields identical output, and the function
    /// is safe to call concurrently from any number of callers.
    ///
    /// Shape validation of the record (missing required fields, malformed
    /// JSON) belongs to the fetch layer via [`RawConfig::validate`] and must
    /// happen before a record reaches this point.
    pub fn resolve(raw: &RawConfig) -> ResolvedConfig {
        ResolvedConfig {
            marker_type: raw.marker_type,
            marker_data_url: normalize_marker_url(raw.marker_type, &raw.marker_data_url),
            overlays: resolve_overlays(raw.overlay_config.as_ref()),
            meta: raw.metadata.clone(),
            asset_3d: raw.asset_3d.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/engine.rs"]
mod tests;
