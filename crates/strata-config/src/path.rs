//! Helpers for `:`-delimited hierarchical configuration keys.
//!
//! Keys compare case-insensitively everywhere in this crate; child-key
//! enumeration orders numeric names numerically so list-style sections
//! (`servers:0`, `servers:10`) keep their intended order.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Delimiter separating the segments of a configuration key.
pub const KEY_DELIMITER: &str = ":";

/// Join two key paths, ignoring empty halves.
pub fn combine(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else if key.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}{KEY_DELIMITER}{key}")
    }
}

/// Last segment of a key path.
pub fn section_key(path: &str) -> &str {
    match path.rfind(KEY_DELIMITER) {
        Some(idx) => &path[idx + KEY_DELIMITER.len()..],
        None => path,
    }
}

/// Everything before the last segment, if there is more than one.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind(KEY_DELIMITER).map(|idx| &path[..idx])
}

/// The next segment of `key` below `parent`, or `None` when `key` does not
/// sit under `parent`. A `None` parent means the root.
pub fn child_segment<'a>(key: &'a str, parent: Option<&str>) -> Option<&'a str> {
    let rest = match parent {
        None => key,
        Some(parent) => match key.get(..parent.len()) {
            Some(head) if head.eq_ignore_ascii_case(parent) => {
                let tail = &key[parent.len()..];
                tail.strip_prefix(KEY_DELIMITER)?
            }
            _ => return None,
        },
    };
    if rest.is_empty() {
        return None;
    }
    match rest.find(KEY_DELIMITER) {
        Some(idx) => Some(&rest[..idx]),
        None => Some(rest),
    }
}

/// Ordering for child-key enumeration: numeric names sort first and
/// numerically, everything else ASCII case-insensitively.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    }
}

/// Drop case-insensitive duplicates, keeping the first occurrence.
pub(crate) fn dedup_keys(keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|key| seen.insert(key.to_ascii_lowercase()))
        .collect()
}
