//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use arcanum::{
    ArcanumError, DiagramBuilder,
    config::AppConfig,
    spell::{School, SpellAttributes},
};

fn wall_of_fire() -> SpellAttributes {
    SpellAttributes::new(Some(School::Evocation), 2, 2, 5, 0, 4)
}

#[test]
fn test_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let diagram = builder.build(wall_of_fire()).expect("Failed to build diagram");
    let svg = builder.render_svg(&diagram).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"width="1600""#));
    assert!(svg.contains(r#"stroke="white""#));
}

#[test]
fn test_builder_with_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [canvas]
        width = 400.0
        height = 400.0

        [style]
        pen_color = "black"
        background_color = "white"
        "#,
    )
    .unwrap();

    let builder = DiagramBuilder::new(config);
    let diagram = builder.build(wall_of_fire()).unwrap();
    let svg = builder.render_svg(&diagram).unwrap();

    assert!(svg.contains(r#"width="400""#));
    assert!(svg.contains("<rect"));
    assert!(svg.contains(r#"stroke="black""#));
}

#[test]
fn test_invalid_pen_color_is_config_error() {
    let config: AppConfig = toml::from_str("[style]\npen_color = \"glitter\"").unwrap();

    let builder = DiagramBuilder::new(config);
    let diagram = builder.build(wall_of_fire()).unwrap();
    assert!(matches!(
        builder.render_svg(&diagram),
        Err(ArcanumError::Config(_))
    ));
}

#[test]
fn test_unknown_school_fails_before_layout() {
    let result = SpellAttributes::default().with_school_name(Some("unknown_school"));
    assert!(matches!(result, Err(ArcanumError::UnknownSchool(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.build(wall_of_fire()).unwrap();
    let second = builder
        .build(SpellAttributes::new(None, 3, 1, 1, 4, 1))
        .unwrap();

    let svg1 = builder.render_svg(&first).unwrap();
    let svg2 = builder.render_svg(&second).unwrap();

    assert_ne!(svg1, svg2);
    assert_eq!(svg1, builder.render_svg(&first).unwrap());
}

#[test]
fn test_save_svg_uses_label() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DiagramBuilder::default();
    let diagram = builder.build(wall_of_fire()).unwrap();

    let written = builder
        .save_svg(&diagram, dir.path(), "wall_of_fire")
        .unwrap();

    assert_eq!(written, dir.path().join("wall_of_fire.svg"));
    let contents = std::fs::read_to_string(&written).unwrap();
    assert_eq!(contents, builder.render_svg(&diagram).unwrap());
}

#[test]
fn test_save_svg_to_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DiagramBuilder::default();
    let diagram = builder.build(wall_of_fire()).unwrap();

    let result = builder.save_svg(&diagram, dir.path().join("does/not/exist"), "spell");
    assert!(matches!(result, Err(ArcanumError::Export(_))));
}

#[test]
fn test_save_svg_rejects_label_outside_output_dir() {
    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("out");
    std::fs::create_dir(&output_dir).unwrap();

    let builder = DiagramBuilder::default();
    let diagram = builder.build(wall_of_fire()).unwrap();

    for label in ["../escaped", "nested/escaped", ""] {
        let result = builder.save_svg(&diagram, &output_dir, label);
        assert!(
            matches!(result, Err(ArcanumError::InvalidLabel(_))),
            "{label:?} should be rejected"
        );
    }

    assert!(!root.path().join("escaped.svg").exists());
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}
