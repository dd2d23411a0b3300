/// Output tests for the compact and pretty writers.
use serde_json::json;
use treewalk_core::{
    render, to_compact_string, to_pretty_string, CompactWriter, Format, Navigator, PrettyWriter,
    TreeError, Value,
};

fn compact(value: serde_json::Value) -> String {
    to_compact_string(&Value::from(value)).unwrap()
}

fn pretty(value: serde_json::Value) -> String {
    to_pretty_string(&Value::from(value)).unwrap()
}

// ============================================================================
// Compact
// ============================================================================

#[test]
fn compact_primitives() {
    assert_eq!(compact(json!(null)), "null");
    assert_eq!(compact(json!(true)), "true");
    assert_eq!(compact(json!(-12)), "-12");
    assert_eq!(compact(json!(2.5)), "2.5");
    assert_eq!(compact(json!("tab\there")), r#""tab\there""#);
}

#[test]
fn compact_drops_null_members() {
    assert_eq!(compact(json!({"a": null, "b": 1, "c": null})), r#"{"b":1}"#);
}

#[test]
fn compact_keeps_null_slots() {
    assert_eq!(compact(json!([null, 1, null])), "[null,1,null]");
}

#[test]
fn compact_empty_containers() {
    assert_eq!(compact(json!({})), "{}");
    assert_eq!(compact(json!([])), "[]");
    assert_eq!(compact(json!({"only": null})), "{}");
}

#[test]
fn compact_preserves_member_order() {
    let text = r#"{"z":1,"a":{"y":[true,false],"b":"s"}}"#;
    let value = Value::from_json_str(text).unwrap();
    assert_eq!(to_compact_string(&value).unwrap(), text);
}

#[test]
fn compact_writer_into_existing_buffer() {
    let mut writer = CompactWriter::new(b"prefix:".to_vec());
    Navigator::new()
        .navigate(&Value::from(json!([1, 2])), &mut writer)
        .unwrap();
    assert_eq!(writer.into_inner(), b"prefix:[1,2]".to_vec());
}

// ============================================================================
// Pretty
// ============================================================================

#[test]
fn pretty_nested_document() {
    let out = pretty(json!({"name": "Ada", "tags": ["x", null], "meta": {}}));
    assert_eq!(
        out,
        "{\n  \"name\": \"Ada\",\n  \"tags\": [\n    \"x\",\n    null\n  ],\n  \"meta\": {}\n}"
    );
}

#[test]
fn pretty_object_with_only_null_members_collapses() {
    assert_eq!(pretty(json!({"a": {"gone": null}})), "{\n  \"a\": {}\n}");
}

#[test]
fn pretty_custom_indent() {
    let out = render(
        &Value::from(json!({"a": [1]})),
        Format::Pretty { indent: 4 },
        &Navigator::new(),
    )
    .unwrap();
    assert_eq!(out, "{\n    \"a\": [\n        1\n    ]\n}");
}

#[test]
fn pretty_writer_default_indent() {
    let mut writer = PrettyWriter::new(Vec::new());
    Navigator::new()
        .navigate(&Value::from(json!([[]])), &mut writer)
        .unwrap();
    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "[\n  []\n]");
}

#[test]
fn pretty_output_reparses_to_compact_form() {
    let source = json!({"a": [1, {"b": null, "c": "d"}], "e": null});
    let out = pretty(source.clone());
    let reparsed = Value::from_json_str(&out).unwrap();
    assert_eq!(to_compact_string(&reparsed).unwrap(), compact(source));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn render_reports_depth_limit() {
    let value = Value::from(json!([[[1]]]));
    let err = render(&value, Format::Compact, &Navigator::with_max_depth(2)).unwrap_err();
    assert!(matches!(err, TreeError::DepthExceeded { limit: 2 }));
}

#[test]
fn write_failure_aborts_render() {
    struct Full;
    impl std::io::Write for Full {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut writer = CompactWriter::new(Full);
    let err = Navigator::new()
        .navigate(&Value::from(json!({"a": 1})), &mut writer)
        .unwrap_err();
    let io_err = err.into_visitor_error().unwrap();
    assert_eq!(io_err.kind(), std::io::ErrorKind::StorageFull);
}
