//! Recursive JSON walker producing translation entries.

use std::collections::HashSet;

use serde_json::Value;

use super::classify::{Classifier, context_type};
use super::types::{TranslationEntry, entry_id};

/// Recursion limit of the preview estimator.
pub const PREVIEW_MAX_DEPTH: usize = 10;

/// Saturation point of the preview estimator.
pub const PREVIEW_MAX_COUNT: usize = 1000;

/// Extract every translatable string from `value` with the default classifier.
pub fn extract(value: &Value, file_path: &str) -> Vec<TranslationEntry> {
    extract_with(&Classifier::default(), value, file_path)
}

/// Extract every translatable string from `value`.
///
/// Object keys extend the dotted path; array elements do not. String
/// elements of an array are classified under their index, which never
/// matches the key vocabulary. Entries come out in document order and are
/// de-duplicated by id.
pub fn extract_with(
    classifier: &Classifier,
    value: &Value,
    file_path: &str,
) -> Vec<TranslationEntry> {
    let mut walker = Walker {
        classifier,
        file_path,
        seen: HashSet::new(),
        entries: Vec::new(),
    };
    walker.walk(value, "");
    walker.entries
}

struct Walker<'a> {
    classifier: &'a Classifier,
    file_path: &'a str,
    seen: HashSet<String>,
    entries: Vec<TranslationEntry>,
}

impl Walker<'_> {
    fn walk(&mut self, value: &Value, path: &str) {
        match value {
            Value::Object(map) => {
                for (child_key, child) in map {
                    let child_path = if path.is_empty() {
                        child_key.clone()
                    } else {
                        format!("{}.{}", path, child_key)
                    };
                    self.visit(child, &child_path, child_key);
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.visit(item, path, &index.to_string());
                }
            }
            // Scalars only matter as children of a container.
            _ => {}
        }
    }

    fn visit(&mut self, value: &Value, path: &str, key: &str) {
        match value {
            Value::String(s) => self.visit_string(s, path, key),
            Value::Object(_) | Value::Array(_) => self.walk(value, path),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    fn visit_string(&mut self, raw: &str, path: &str, key: &str) {
        let text = raw.trim();
        if text.is_empty() || !self.classifier.is_translatable(text, key) {
            return;
        }

        let id = entry_id(self.file_path, path, text);
        if !self.seen.insert(id) {
            return;
        }

        self.entries.push(TranslationEntry::new(
            self.file_path,
            path,
            text,
            context_type(key),
        ));
    }
}

/// Cheap upper-bounded count of translatable strings, for previews.
///
/// Stops descending below [`PREVIEW_MAX_DEPTH`] and never reports more than
/// [`PREVIEW_MAX_COUNT`]. Unlike [`extract_with`] it does not de-duplicate.
pub fn estimate_translatable(classifier: &Classifier, value: &Value) -> usize {
    let mut count = 0;
    estimate(classifier, value, 0, &mut count);
    count.min(PREVIEW_MAX_COUNT)
}

fn estimate(classifier: &Classifier, value: &Value, depth: usize, count: &mut usize) {
    if depth > PREVIEW_MAX_DEPTH || *count >= PREVIEW_MAX_COUNT {
        return;
    }

    let visit = |child: &Value, child_key: &str, count: &mut usize| match child {
        Value::String(s) => {
            if classifier.is_translatable(s, child_key) {
                *count += 1;
            }
        }
        Value::Object(_) | Value::Array(_) => {
            estimate(classifier, child, depth + 1, count);
        }
        _ => {}
    };

    match value {
        Value::Object(map) => {
            for (child_key, child) in map {
                if *count >= PREVIEW_MAX_COUNT {
                    break;
                }
                visit(child, child_key, count);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if *count >= PREVIEW_MAX_COUNT {
                    break;
                }
                visit(item, &index.to_string(), count);
            }
        }
        _ => {}
    }
}
