use super::*;
use crate::resolve::defaults::builtin_default_overlay;

fn resolved() -> ResolvedConfig {
    ResolvedConfig {
        marker_type: MarkerType::Hiro,
        marker_data_url: "/assets/patterns/patt.hiro".to_string(),
        overlays: vec![builtin_default_overlay()],
        meta: serde_json::json!({"title": "t"}),
        asset_3d: Some(Asset3D {
            url: "https://cdn.example/models/crown.glb".to_string(),
            extra: serde_json::Map::new(),
        }),
    }
}

#[test]
fn renderer_contract_field_names_are_stable() {
    let json = resolved().to_json_string().unwrap();
    for name in [
        "\"markerType\"",
        "\"markerDataUrl\"",
        "\"overlays\"",
        "\"meta\"",
        "\"asset3D\"",
        "\"type\":\"model\"",
    ] {
        assert!(json.contains(name), "missing {name} in {json}");
    }
}

#[test]
fn resolved_scene_round_trips() {
    let scene = resolved();
    let json = scene.to_json_string().unwrap();
    let back: ResolvedConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn absent_overlay_fields_are_omitted_from_json() {
    let overlay = ResolvedOverlay::from_spec(&OverlaySpec {
        kind: OverlayKind::Text,
        src: None,
        scale: None,
        position: None,
        rotation: None,
        text: Some("hi".to_string()),
    });
    let json = serde_json::to_string(&overlay).unwrap();
    assert!(!json.contains("\"src\""));
    assert!(!json.contains("\"scale\""));
    assert!(json.contains("\"text\":\"hi\""));
}
