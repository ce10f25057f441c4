use serde_json::json;

use super::*;

#[test]
fn empty_objects_give_empty_table() {
    let table = normalize(&[]);
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
}

#[test]
fn columns_are_union_with_nulls() {
    let table = normalize(&[
        json!({"type": "rect", "left": 1, "width": 5}),
        json!({"type": "circle", "left": 2, "radius": 3}),
    ]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.columns, ["type", "left", "width", "radius"]);
    assert_eq!(table.cell(0, "width"), Some(&json!(5)));
    assert_eq!(table.cell(0, "radius"), Some(&json!(null)));
    assert_eq!(table.cell(1, "radius"), Some(&json!(3)));
    assert_eq!(table.cell(1, "type"), Some(&json!("circle")));
}

#[test]
fn columns_follow_component_key_order() {
    let objects: Vec<serde_json::Value> = serde_json::from_str(
        r#"[{"type": "rect", "version": "4.4.0", "originX": "left", "left": 10, "angle": 0, "fill": "red"}]"#,
    )
    .unwrap();
    let table = normalize(&objects);
    assert_eq!(table.columns, ["type", "version", "originX", "left", "angle", "fill"]);
}

#[test]
fn nested_objects_use_dotted_columns() {
    let table = normalize(&[json!({
        "type": "rect",
        "shadow": {"blur": 4, "offset": {"x": 1}},
    })]);
    assert_eq!(table.cell(0, "shadow.blur"), Some(&json!(4)));
    assert_eq!(table.cell(0, "shadow.offset.x"), Some(&json!(1)));
    assert!(table.cell(0, "shadow").is_none());
}

#[test]
fn arrays_become_json_strings() {
    let table = normalize(&[json!({"type": "path", "path": [["M", 0, 0], ["L", 1, 1]]})]);
    assert_eq!(table.cell(0, "path"), Some(&json!(r#"[["M",0,0],["L",1,1]]"#)));
}

#[test]
fn empty_nested_object_becomes_string() {
    let table = normalize(&[json!({"type": "rect", "meta": {}})]);
    assert_eq!(table.cell(0, "meta"), Some(&json!("{}")));
}

#[test]
fn cell_out_of_range_is_none() {
    let table = normalize(&[json!({"type": "rect"})]);
    assert!(table.cell(3, "type").is_none());
    assert!(table.cell(0, "missing").is_none());
}
