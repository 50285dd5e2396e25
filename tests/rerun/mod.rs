//! Running the generator repeatedly against the same directory.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

use crate::{FILE_NAMES, generate_into, read_json};

fn file_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Structural fingerprint: object key sets and the distinct shapes of array elements, ignoring scalar values
/// and array lengths.
fn shape(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let inner: BTreeSet<_> = items.iter().map(shape).collect();
            format!("[{}]", inner.into_iter().collect::<Vec<_>>().join(" | "))
        }
        Value::Object(map) => {
            let fields: Vec<_> = map.iter().map(|(k, v)| format!("{k}: {}", shape(v))).collect();
            format!("{{{}}}", fields.join(", "))
        }
        _ => "scalar".to_string(),
    }
}

fn top_level_len(dir: &Path, name: &str) -> usize {
    read_json(dir, name).as_array().map_or(1, Vec::len)
}

#[test]
fn second_run_keeps_names_and_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = ["users_array.json", "product_object.json", "large_data.json", "nested_data.json"];

    generate_into(dir.path(), 1);
    let first_files = file_names(dir.path());
    let first: Vec<_> = parsed
        .iter()
        .map(|name| (shape(&read_json(dir.path(), name)), top_level_len(dir.path(), name)))
        .collect();

    generate_into(dir.path(), 2);
    let second_files = file_names(dir.path());
    let second: Vec<_> = parsed
        .iter()
        .map(|name| (shape(&read_json(dir.path(), name)), top_level_len(dir.path(), name)))
        .collect();

    assert_eq!(first_files, second_files);
    let expected: BTreeSet<String> = FILE_NAMES.iter().map(|n| n.to_string()).collect();
    assert_eq!(first_files, expected);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|(_, len)| *len).collect::<Vec<_>>(),
        [10, 1, 10_000, 1]
    );
}

#[test]
fn same_seed_reproduces_identical_files() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    generate_into(a.path(), 20231001);
    generate_into(b.path(), 20231001);

    for name in FILE_NAMES {
        let left = std::fs::read(a.path().join(name)).unwrap();
        let right = std::fs::read(b.path().join(name)).unwrap();
        assert_eq!(left, right, "{name} differs between seeded runs");
    }
}
