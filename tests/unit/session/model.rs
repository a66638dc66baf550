use super::*;

fn record_json() -> &'static str {
    r#"{
        "markerType": "image",
        "markerDataUrl": "https://cdn.example/markers/m1.png",
        "overlayConfig": {
            "mode": "stacked",
            "custom": {
                "type": "model",
                "src": "https://cdn.example/models/crown.glb",
                "scale": [0.2, 0.2, 0.2]
            }
        },
        "metadata": {
            "title": "Crown drop",
            "actions": [{"type": "purchase", "label": "Buy"}]
        },
        "asset3D": {"url": "https://cdn.example/models/crown.glb", "format": "glb"}
    }"#
}

#[test]
fn decodes_wire_field_names() {
    let raw = RawConfig::from_json_str(record_json()).unwrap();
    assert_eq!(raw.marker_type, MarkerType::Image);
    assert_eq!(raw.marker_data_url, "https://cdn.example/markers/m1.png");

    let cfg = raw.overlay_config.as_ref().unwrap();
    assert_eq!(cfg.mode.as_deref(), Some("stacked"));
    let custom = cfg.custom.as_ref().unwrap();
    assert_eq!(custom.kind, OverlayKind::Model);
    assert_eq!(custom.scale, Some([0.2, 0.2, 0.2]));
    assert_eq!(custom.position, None);

    assert_eq!(raw.metadata["title"], "Crown drop");
    assert_eq!(raw.asset_3d.as_ref().unwrap().url, "https://cdn.example/models/crown.glb");
}

#[test]
fn optional_blocks_default_when_absent() {
    let raw =
        RawConfig::from_json_str(r#"{"markerType": "hiro", "markerDataUrl": "u"}"#).unwrap();
    assert_eq!(raw.overlay_config, None);
    assert!(raw.metadata.is_null());
    assert_eq!(raw.asset_3d, None);
    raw.validate().unwrap();
}

#[test]
fn unknown_mode_string_still_decodes() {
    let raw = RawConfig::from_json_str(
        r#"{"markerType": "nft", "markerDataUrl": "u", "overlayConfig": {"mode": "bogus"}}"#,
    )
    .unwrap();
    assert_eq!(
        raw.overlay_config.as_ref().unwrap().mode.as_deref(),
        Some("bogus")
    );
}

#[test]
fn asset3d_extra_fields_round_trip() {
    let raw = RawConfig::from_json_str(record_json()).unwrap();
    let asset = raw.asset_3d.as_ref().unwrap();
    assert_eq!(asset.extra["format"], "glb");

    let back = serde_json::to_value(asset).unwrap();
    assert_eq!(back["url"], "https://cdn.example/models/crown.glb");
    assert_eq!(back["format"], "glb");
}

#[test]
fn serializes_wire_field_names() {
    let raw = RawConfig::from_json_str(record_json()).unwrap();
    let s = serde_json::to_string(&raw).unwrap();
    for name in ["\"markerType\"", "\"markerDataUrl\"", "\"overlayConfig\"", "\"asset3D\"", "\"type\""] {
        assert!(s.contains(name), "missing {name} in {s}");
    }
}

#[test]
fn validate_rejects_empty_marker_url() {
    let raw = RawConfig::from_json_str(r#"{"markerType": "image", "markerDataUrl": " "}"#).unwrap();
    assert!(raw.validate().is_err());
}

#[test]
fn validate_rejects_srcless_model_overlay() {
    let raw = RawConfig::from_json_str(
        r#"{"markerType": "image", "markerDataUrl": "u",
            "overlayConfig": {"mode": "custom", "custom": {"type": "model"}}}"#,
    )
    .unwrap();
    assert!(raw.validate().is_err());
}

#[test]
fn validate_rejects_textless_text_overlay() {
    let raw = RawConfig::from_json_str(
        r#"{"markerType": "image", "markerDataUrl": "u",
            "overlayConfig": {"mode": "custom", "custom": {"type": "text"}}}"#,
    )
    .unwrap();
    assert!(raw.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_transform() {
    let spec = OverlaySpec {
        kind: OverlayKind::Text,
        src: None,
        scale: Some([1.0, f64::NAN, 1.0]),
        position: None,
        rotation: None,
        text: Some("hi".to_string()),
    };
    assert!(spec.validate().is_err());
}

#[test]
fn validate_rejects_non_object_metadata() {
    let raw = RawConfig::from_json_str(
        r#"{"markerType": "image", "markerDataUrl": "u", "metadata": [1, 2]}"#,
    )
    .unwrap();
    assert!(raw.validate().is_err());
}

#[test]
fn text_overlay_without_src_is_valid() {
    let raw = RawConfig::from_json_str(
        r#"{"markerType": "image", "markerDataUrl": "u",
            "overlayConfig": {"mode": "custom", "custom": {"type": "text", "text": "hi"}}}"#,
    )
    .unwrap();
    raw.validate().unwrap();
}
