use std::io::Write;

use blueprint_style::{
    Blueprint, NavState, PresetCatalog, PresetError, Styles, Token, TokenCategory, TokenRegistry,
    TokenSourceError,
};
use serde_json::json;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_registry_changes_what_maps() {
    let file = write_temp(
        r##"
color:
  brand: "#ff5500"
spacing:
  steps: [0, 2, 4]
"##,
    );
    let tokens = TokenRegistry::from_path(file.path()).unwrap();

    let styles = Styles::from_value(json!({"bg": "brand", "text": "primary", "p": 2})).unwrap();
    assert_eq!(styles.to_classes(&tokens), "p-2 bg-brand");
    assert_eq!(tokens.get(TokenCategory::Spacing, "4"), Some(Token::Pixels(16)));
}

#[test]
fn test_registry_without_nav_uses_defaults() {
    let file = write_temp("color:\n  primary: \"#00f\"\n  neutral: \"#333\"\n");
    let tokens = TokenRegistry::from_path(file.path()).unwrap();
    assert_eq!(
        tokens.nav_classes(NavState::Default),
        "text-neutral font-normal no-underline"
    );
    assert_eq!(tokens.get(TokenCategory::Breakpoint, "lg"), Some(Token::Pixels(1024)));
}

#[test]
fn test_registry_malformed_section_reports_name() {
    let file = write_temp("radius: \"big\"\n");
    let err = TokenRegistry::from_path(file.path()).unwrap_err();
    assert!(matches!(err, TokenSourceError::Section { ref section, .. } if section == "radius"));
    assert!(err.to_string().contains("radius"));
}

#[test]
fn test_preset_catalog_from_file() {
    let file = write_temp(
        r#"
- name: Card
  styles:
    p: 6
    rounded: lg
    sm:
      p: 8
"#,
    );
    let catalog = PresetCatalog::from_path(file.path()).unwrap();
    let applied = catalog.apply("Card", &Styles::new().with("p", 2)).unwrap();
    assert_eq!(applied.to_classes(TokenRegistry::builtin()), "p-2 rounded-lg sm:p-8");
}

#[test]
fn test_preset_catalog_missing_file() {
    let result = PresetCatalog::from_path("/no/such/presets.yaml");
    assert!(matches!(result, Err(PresetError::Read { .. })));
}

#[test]
fn test_blueprint_resolves_against_custom_tokens() {
    let tokens = TokenRegistry::from_yaml(
        r##"
color:
  night: "#000"
nav:
  default: { color: night, weight: light }
  hover: { decoration: underline }
  active: { color: night, weight: black }
"##,
    )
    .unwrap();

    let blueprint = Blueprint::from_yaml(
        r#"
type: page
id: home
styles: { bg: night, text: primary }
children:
  - type: header
    id: top
    nav:
      - { label: Home, href: /, active: true }
      - { label: Blog, href: /blog }
"#,
    )
    .unwrap();

    let resolved = blueprint.resolve(&tokens);
    assert_eq!(resolved.classes, "bg-night");
    let links = &resolved.children[0].links;
    assert_eq!(links[0].classes, "text-night font-black hover:underline");
    assert_eq!(links[1].classes, "text-night font-light hover:underline");
}

#[test]
fn test_registry_keeps_good_nav_state_next_to_bad_one() {
    let tokens = TokenRegistry::from_yaml(
        r##"
color:
  brand: "#ff5500"
  primary: "#00f"
nav:
  default: { color: brand, weight: bold }
  hover: 5
"##,
    )
    .unwrap();
    assert_eq!(tokens.nav_classes(NavState::Default), "text-brand font-bold");
    assert_eq!(
        tokens.nav_classes(NavState::Hover),
        "text-primary font-medium underline"
    );
}
