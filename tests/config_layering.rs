use std::fs;

use wheel_of_fortune::core::config::SegmentSpan;
use wheel_of_fortune::WheelConfig;

#[test]
fn shipped_config_parses_and_validates() {
    let cfg = WheelConfig::load_from_file("assets/config/wheel.ron").expect("shipped config");
    assert_eq!(cfg.wheel.sectors.len(), 6);
    assert_eq!(cfg.wheel.target_sector_index, 2);
    assert_eq!(cfg.wheel.spin_cycles, 3);
    assert_eq!(cfg.wheel.total_spin_time_ms, 4000);
    assert_eq!(cfg.wheel.segment_span(), SegmentSpan::Fixed);
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_keys_and_replaces_lists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("wheel.ron");
    let local = dir.path().join("wheel.local.ron");
    fs::write(
        &base,
        r#"(
            window: (title: "Base", autoClose: 0.0),
            wheel: (
                sectors: ["red", "orange", "yellow", "green", "blue", "purple"],
                target_sector_index: 1,
                spin_cycles: 2,
                total_spin_time_ms: 2500,
            ),
        )"#,
    )
    .expect("write base");
    fs::write(
        &local,
        r#"(
            wheel: (
                sectors: ["black", "white"],
                even_segments: true,
            ),
        )"#,
    )
    .expect("write local");

    let (cfg, used, errors) = WheelConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.wheel.sectors, vec!["black".to_string(), "white".to_string()]);
    assert_eq!(cfg.wheel.target_sector_index, 1);
    assert_eq!(cfg.wheel.spin_cycles, 2);
    assert_eq!(cfg.wheel.total_spin_time_ms, 2500);
    assert_eq!(cfg.wheel.segment_span(), SegmentSpan::Even);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.layout.radius, 200.0);
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("wheel.ron");
    let broken = dir.path().join("broken.ron");
    let missing = dir.path().join("missing.ron");
    fs::write(&base, "(wheel: (spin_cycles: 7))").expect("write base");
    fs::write(&broken, "(wheel: (spin_cycles: ").expect("write broken");

    let (cfg, used, errors) = WheelConfig::load_layered([&base, &broken, &missing]);
    assert_eq!(cfg.wheel.spin_cycles, 7);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("parse error"), "{errors:?}");
    assert!(errors[1].contains("read error"), "{errors:?}");
}

#[test]
fn no_layers_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (cfg, used, errors) = WheelConfig::load_layered([dir.path().join("nope.ron")]);
    assert_eq!(cfg, WheelConfig::default());
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn load_from_file_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.ron");
    fs::write(&path, "(wheel: [").expect("write");
    let err = WheelConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("bad.ron"), "{err}");
}

#[test]
fn default_layers_skip_absent_local_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("wheel.ron"), "(wheel: (spin_cycles: 4))").expect("write base");

    let layers = WheelConfig::default_layers(dir.path());
    assert_eq!(layers, vec![dir.path().join("wheel.ron")]);
    let (cfg, used, errors) = WheelConfig::load_layered(&layers);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg.wheel.spin_cycles, 4);

    fs::write(dir.path().join("wheel.local.ron"), "(wheel: (spin_cycles: 9))").expect("write local");
    let layers = WheelConfig::default_layers(dir.path());
    assert_eq!(layers.len(), 2);
    let (cfg, _, errors) = WheelConfig::load_layered(&layers);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.wheel.spin_cycles, 9);
}

#[test]
fn missing_explicit_layer_is_still_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let explicit = dir.path().join("wheel.local.ron");
    let (_, used, errors) = WheelConfig::load_layered([&explicit]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("read error"), "{errors:?}");
}
