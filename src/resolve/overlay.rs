use crate::resolve::defaults::builtin_default_overlay;
use crate::resolve::scene::ResolvedOverlay;
use crate::session::model::OverlayConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Scene authoring policy: which overlays a session shows.
pub enum OverlayMode {
    /// Only the built-in default overlay.
    #[default]
    Default,
    /// Only the authored overlay.
    Custom,
    /// Built-in default first, authored overlay layered on top.
    Stacked,
}

impl OverlayMode {
    /// Normalize a wire mode string to a mode.
    ///
    /// This is the single lookup through which both "absent" and
    /// "unrecognized" resolve to [`OverlayMode::Default`]. Wire strings are
    /// exact: anything other than `"default"`, `"custom"` or `"stacked"`
    /// fails open to the default and is logged, never an error.
    pub fn from_wire(mode: Option<&str>) -> Self {
        match mode {
            None | Some("default") => Self::Default,
            Some("custom") => Self::Custom,
            Some("stacked") => Self::Stacked,
            Some(other) => {
                tracing::warn!(mode = other, "unknown overlay mode, using default");
                Self::Default
            }
        }
    }
}

/// Produce the ordered overlay list for a session's overlay block.
///
/// Mode precedence:
/// - `default`: exactly the built-in overlay; an authored `custom` is
///   ignored in this mode.
/// - `custom`: the authored overlay alone, or the built-in overlay when no
///   `custom` payload was authored.
/// - `stacked`: built-in overlay first, authored overlay on top; with no
///   payload this degrades to the single built-in overlay, never a
///   duplicated pair.
///
/// The result is never empty, and an authored overlay under
/// `mode = "custom"` is never silently dropped.
pub fn resolve_overlays(overlay_config: Option<&OverlayConfig>) -> Vec<ResolvedOverlay> {
    let mode = OverlayMode::from_wire(overlay_config.and_then(|c| c.mode.as_deref()));
    let custom = overlay_config
        .and_then(|c| c.custom.as_ref())
        .map(ResolvedOverlay::from_spec);

    match (mode, custom) {
        (OverlayMode::Default, _) => vec![builtin_default_overlay()],
        (OverlayMode::Custom, Some(custom)) => vec![custom],
        (OverlayMode::Custom, None) => vec![builtin_default_overlay()],
        (OverlayMode::Stacked, Some(custom)) => vec![builtin_default_overlay(), custom],
        (OverlayMode::Stacked, None) => vec![builtin_default_overlay()],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/overlay.rs"]
mod tests;
