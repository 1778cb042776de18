//! Integration tests for loading style sheets from disk and using the
//! resulting registry in templates.

use std::io::Write;

use counterstyle::{
    markers, Align, ConfigError, CounterFormatter, CounterStyles, Renderer, StyleSheet, Template,
};
use serde::Serialize;

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn outline() -> CounterStyles {
    StyleSheet::from_path(fixture("outline.yaml"))
        .expect("outline.yaml should parse")
        .apply(&CounterStyles::predefined())
        .expect("outline.yaml should apply")
}

#[test]
fn test_yaml_fixture_styles() {
    let styles = outline();
    assert_eq!(styles.format("part", 4).unwrap(), "IV");
    assert_eq!(styles.format("chapter", 7).unwrap(), "07");
    assert_eq!(styles.format("chapter", 12).unwrap(), "12");
    assert_eq!(styles.format("step", 1).unwrap(), "▸");
    assert_eq!(styles.format("step", 2).unwrap(), "▹");
}

#[test]
fn test_yaml_fixture_fallback_chain() {
    let styles = outline();
    assert_eq!(styles.format("appendix", 2).unwrap(), "B");
    assert_eq!(styles.format("appendix", 27).unwrap(), "27");
    assert_eq!(styles.format("appendix", 0).unwrap(), "00");
}

#[test]
fn test_yaml_fixture_padding_inside_negative() {
    let styles = outline();
    assert_eq!(styles.format("ledger", 42).unwrap(), "   42");
    assert_eq!(styles.format("ledger", -42).unwrap(), "( 42)");
    assert_eq!(styles.format("ledger", -123456).unwrap(), "(123456)");
}

#[test]
fn test_json_fixture() {
    let styles = StyleSheet::from_path(fixture("dice.json"))
        .unwrap()
        .apply(&CounterStyles::new())
        .unwrap();
    assert_eq!(styles.format("roll", 11).unwrap(), "⚅⚄");
    assert_eq!(styles.format("dice", 13).unwrap(), "⚅⚅⚀");
    assert_eq!(styles.format("dice", 0).unwrap(), "0");
}

#[test]
fn test_cycle_fixture() {
    let err = StyleSheet::from_path(fixture("cycle.yaml"))
        .unwrap()
        .apply(&CounterStyles::predefined())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::CycleDetected {
            path: vec![
                "first".to_string(),
                "second".to_string(),
                "third".to_string(),
                "first".to_string(),
            ],
        }
    );
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "answer:\n  system: fixed\n  symbols: [yes, no]").unwrap();

    let styles = StyleSheet::from_path(file.path())
        .unwrap()
        .apply(&CounterStyles::new())
        .unwrap();
    assert_eq!(styles.format("answer", 1).unwrap(), "yes");
    assert_eq!(styles.format("answer", 3).unwrap(), "3");
}

#[test]
fn test_malformed_temp_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{{ \"broken\": ").unwrap();

    let err = StyleSheet::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_template_over_loaded_styles() {
    let styles = outline();
    let heading = Template::parse("{part}.{chapter} ", &styles).unwrap();
    assert_eq!(heading.format(3), "III.03 ");
}

#[test]
fn test_marker_column_over_loaded_styles() {
    let styles = outline();
    let part = styles.get("part").unwrap();
    assert_eq!(
        markers(&part, [1, 3, 8], Align::Right),
        vec!["   I", " III", "VIII"]
    );
}

#[derive(Serialize)]
struct Manual {
    chapters: Vec<&'static str>,
}

#[test]
fn test_renderer_over_loaded_styles() {
    let mut renderer = Renderer::new(outline()).unwrap();
    renderer
        .add_template(
            "toc",
            r#"{% for c in chapters %}{{ loop.index | marker("chapter", " ") }}{{ c }}
{% endfor %}"#,
        )
        .unwrap();

    let out = renderer
        .render(
            "toc",
            &Manual {
                chapters: vec!["Install", "Configure"],
            },
        )
        .unwrap();
    assert_eq!(out, "01 Install\n02 Configure\n");
}

#[test]
fn test_renderer_rejects_dangling_alias() {
    let styles = CounterStyles::new().add("chapter", "missing");
    assert!(Renderer::new(styles).is_err());
}
