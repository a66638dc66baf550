//! Lumark resolves scanned AR codes into renderable scenes.
//!
//! A physical or printed code (QR code, image marker, session id) maps to a
//! backend-authored session record ([`RawConfig`]); Lumark turns that record
//! into a complete scene description ([`ResolvedConfig`]) with all defaults,
//! fallbacks and normalizations applied.
//!
//! # Pipeline overview
//!
//! 1. **Fetch** (external): look up the raw record by code or session id
//! 2. **Resolve**: `RawConfig -> ResolvedConfig` via [`Resolver::resolve`]
//! 3. **Render** (external): the camera/tracking runtime consumes the
//!    resolved scene and performs marker detection and rendering
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total resolution**: resolving never fails; malformed authoring
//!   degrades to a safe, non-empty default scene rather than a blank one.
//! - **Pure-by-construction**: no IO, no clock reads, no shared mutable
//!   state; identical input yields identical output from any thread.
//! - **Stable wire contract**: JSON field names and enum strings are the
//!   backend's contract and round-trip bit-for-bit.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod resolve;
mod session;

pub use foundation::error::{LumarkError, LumarkResult};
pub use resolve::defaults::{
    DEFAULT_HIRO_PATTERN_URL, DEFAULT_OVERLAY_POSITION, DEFAULT_OVERLAY_ROTATION,
    DEFAULT_OVERLAY_SCALE, DEFAULT_OVERLAY_SRC, HIRO_MARKER_SENTINEL, builtin_default_overlay,
};
pub use resolve::engine::Resolver;
pub use resolve::marker::normalize_marker_url;
pub use resolve::overlay::{OverlayMode, resolve_overlays};
pub use resolve::scene::{ResolvedConfig, ResolvedOverlay};
pub use session::meta::{ActionKind, MetaAction, collect_actions};
pub use session::model::{
    Asset3D, MarkerType, OverlayConfig, OverlayKind, OverlaySpec, RawConfig,
};
