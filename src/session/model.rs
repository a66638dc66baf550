use crate::foundation::error::{LumarkError, LumarkResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tracking target kind a session record is authored against.
pub enum MarkerType {
    /// Author-uploaded raster marker image.
    Image,
    /// The well-known hiro fallback pattern.
    Hiro,
    /// Natural-feature-tracking target.
    Nft,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A raw session record as authored by the backend.
///
/// This is the inbound wire contract: field names and enum strings are
/// decoded bit-for-bit from the backend's JSON. The record is a pure data
/// model that can be:
/// - decoded from a fetched session response ([`RawConfig::from_json_str`])
/// - shape-checked by the fetch layer ([`RawConfig::validate`])
///
/// Turning a record into a renderable scene is performed by
/// [`crate::Resolver::resolve`].
pub struct RawConfig {
    /// Tracking target kind.
    pub marker_type: MarkerType,
    /// Marker asset URL; for [`MarkerType::Hiro`] may carry the sentinel
    /// [`crate::HIRO_MARKER_SENTINEL`] instead of a real URL.
    pub marker_data_url: String,
    /// Overlay authoring block; absent means "use the built-in default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_config: Option<OverlayConfig>,
    /// Free-form session metadata (title, description, actions, campaign,
    /// createdAt). Forwarded unchanged by resolution.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
    /// Optional alternate model asset for the generic 3D viewer.
    #[serde(default, rename = "asset3D", skip_serializing_if = "Option::is_none")]
    pub asset_3d: Option<Asset3D>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Overlay authoring block of a session record.
pub struct OverlayConfig {
    /// Overlay mode string (`"default"`, `"custom"` or `"stacked"`).
    ///
    /// Kept as a raw string at the wire layer so that unrecognized values
    /// decode instead of failing; normalization to a mode happens in
    /// [`crate::OverlayMode::from_wire`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Authored overlay, present only when an author supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<OverlaySpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Renderable overlay asset kind.
pub enum OverlayKind {
    /// 3D model asset.
    Model,
    /// Raster image asset.
    Image,
    /// Pure text overlay.
    Text,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An authored overlay.
///
/// Transform fields are passed through resolution unmodified; defaulting of
/// absent values is the renderer's job, not this crate's.
pub struct OverlaySpec {
    /// Asset kind.
    #[serde(rename = "type")]
    pub kind: OverlayKind,
    /// Asset URL; required for `model`/`image`, absent for pure text.
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
    /// Text content (meaningful for `type = "text"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Alternate 3D model asset attached to a session record.
pub struct Asset3D {
    /// Model asset URL.
    pub url: String,
    /// Any further backend-authored fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawConfig {
    /// Decode a raw session record from a JSON string.
    pub fn from_json_str(s: &str) -> LumarkResult<Self> {
        serde_json::from_str(s).map_err(|e| LumarkError::serde(e.to_string()))
    }

    /// Validate record shape invariants.
    ///
    /// This is the fetch layer's guard: it runs after decode and before the
    /// record is handed to [`crate::Resolver::resolve`], which itself never
    /// validates (resolution is total over shape-valid records).
    pub fn validate(&self) -> LumarkResult<()> {
        if self.marker_data_url.trim().is_empty() {
            return Err(LumarkError::validation("markerDataUrl must be non-empty"));
        }

        if !(self.metadata.is_null() || self.metadata.is_object()) {
            return Err(LumarkError::validation(
                "metadata must be an object when set",
            ));
        }

        if let Some(cfg) = &self.overlay_config
            && let Some(custom) = &cfg.custom
        {
            custom.validate()?;
        }

        if let Some(asset) = &self.asset_3d
            && asset.url.trim().is_empty()
        {
            return Err(LumarkError::validation("asset3D.url must be non-empty"));
        }

        Ok(())
    }
}

impl OverlaySpec {
    /// Validate authored overlay invariants.
    pub fn validate(&self) -> LumarkResult<()> {
        match self.kind {
            OverlayKind::Model | OverlayKind::Image => {
                let src_ok = self.src.as_deref().is_some_and(|s| !s.trim().is_empty());
                if !src_ok {
                    return Err(LumarkError::validation(
                        "custom overlay src must be non-empty for model/image overlays",
                    ));
                }
            }
            OverlayKind::Text => {
                let text_ok = self.text.as_deref().is_some_and(|s| !s.trim().is_empty());
                if !text_ok {
                    return Err(LumarkError::validation(
                        "custom overlay text must be non-empty for text overlays",
                    ));
                }
            }
        }

        for (name, vec) in [
            ("scale", self.scale),
            ("position", self.position),
            ("rotation", self.rotation),
        ] {
            if let Some(v) = vec
                && !v.iter().all(|c| c.is_finite())
            {
                return Err(LumarkError::validation(format!(
                    "custom overlay {name} components must be finite",
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/model.rs"]
mod tests;
