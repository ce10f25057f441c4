//! Object table — flatten drawn objects into rows and dotted columns.
//!
//! Objects are taken as the raw JSON the canvas sent, so columns follow the
//! component's own key order. Nested JSON objects become `parent.child`
//! columns. Columns are the union over all objects in first-seen order; a
//! cell is `null` where an object lacks the column. Arrays and any remaining
//! non-scalar values are rendered as compact JSON strings so every cell is a
//! scalar.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl ObjectTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` for `column`, if both exist.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&serde_json::Value> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)
    }
}

#[must_use]
pub fn normalize(objects: &[serde_json::Value]) -> ObjectTable {
    let flattened: Vec<Vec<(String, serde_json::Value)>> = objects
        .iter()
        .map(|obj| {
            let mut cells = Vec::new();
            flatten_into("", obj, &mut cells);
            cells
        })
        .collect();

    let mut columns: Vec<String> = Vec::new();
    for cells in &flattened {
        for (key, _) in cells {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = flattened
        .into_iter()
        .map(|cells| {
            columns
                .iter()
                .map(|col| {
                    cells
                        .iter()
                        .find(|(key, _)| key == col)
                        .map_or(serde_json::Value::Null, |(_, v)| v.clone())
                })
                .collect()
        })
        .collect();

    ObjectTable { columns, rows }
}

fn flatten_into(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, serde_json::Value)>) {
    match value {
        serde_json::Value::Object(map) if !map.is_empty() || prefix.is_empty() => {
            for (key, child) in map {
                let name = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten_into(&name, child, out);
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            out.push((prefix.to_owned(), serde_json::Value::String(value.to_string())));
        }
        scalar => out.push((prefix.to_owned(), scalar.clone())),
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
