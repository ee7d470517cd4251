// JSON export is consumed by editors and CI, keep its shape stable

use locx_diagnostics::{DiagnosticEngine, RuleErrorConsumer};
use serde_json::Value;

#[test]
fn test_json_shape() {
    let mut engine = DiagnosticEngine::new();
    engine.rule_error("unterminated $(location) expression");
    engine.attribute_warning("cmd", "deprecated \"quoted\" form");

    let json: Value = serde_json::from_str(&engine.to_json().unwrap()).unwrap();
    let diagnostics = json["diagnostics"].as_array().unwrap();

    assert_eq!(diagnostics.len(), 2);

    assert_eq!(diagnostics[0]["level"], "error");
    assert_eq!(diagnostics[0]["code"], "E0100");
    assert_eq!(
        diagnostics[0]["message"],
        "unterminated $(location) expression"
    );
    assert!(diagnostics[0].get("attribute").is_none());
    assert!(diagnostics[0].get("notes").is_none());

    assert_eq!(diagnostics[1]["level"], "warning");
    assert_eq!(diagnostics[1]["attribute"], "cmd");
    assert_eq!(diagnostics[1]["message"], "deprecated \"quoted\" form");
}

#[test]
fn test_empty_engine_json() {
    let engine = DiagnosticEngine::new();
    assert_eq!(engine.to_json().unwrap(), r#"{"diagnostics":[]}"#);
}

#[test]
fn test_display_without_color() {
    colored::control::set_override(false);

    let mut engine = DiagnosticEngine::new();
    engine.attribute_error("cmd", "broken");

    let rendered = engine.diagnostics()[0].to_string();
    assert!(rendered.starts_with("error[E0200]: broken"));
    assert!(rendered.contains("--> attribute `cmd`"));
}
