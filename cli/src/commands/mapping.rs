use crate::terminal::{format, print};
use shelf_common::config::Config;
use shelf_common::mapping::Mapping;
use shelf_common::value::{Key, Value};
use shelf_common::warn;

const KEY_WIDTH: usize = 11;

/// Builds a mapping from `key=value` entries; entries without `=` are
/// appended under the next integer key.
pub fn build(entries: &[String]) -> Mapping {
    let mut mapping = Mapping::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) => {
                mapping.insert(Key::parse(key), Value::parse(value));
            }
            None => {
                if mapping.push(Value::parse(entry)).is_none() {
                    warn!("No integer key left to append '{entry}', skipped");
                }
            }
        }
    }
    mapping
}

pub fn map(entries: &[String], get: Option<&str>, default: &str, cfg: &Config) {
    print::header("mapping", cfg.quiet);

    let mapping: Mapping = build(entries);
    if mapping.is_empty() {
        print::no_results(cfg.quiet);
    }
    for (key, value) in &mapping {
        print::aligned_line(&key.to_string(), format::value_colored(value), KEY_WIDTH);
    }

    print::aligned_line(
        "Associative",
        format::bool_colored(mapping.is_associative()),
        KEY_WIDTH,
    );

    if let Some(get) = get {
        let default: Value = Value::parse(default);
        let found: &Value = mapping.safe_get(&Key::parse(get), &default);
        print::aligned_line(&format!("get({get})"), format::value_colored(found), KEY_WIDTH);
    }
}
