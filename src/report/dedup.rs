//! Reference list deduplication

use std::collections::HashSet;

/// Merge reference lists from multiple sources, emitting each string only on
/// its first occurrence and preserving global first-seen order.
///
/// Exact string equality only: no case folding, no trimming.
pub fn dedup_references(lists: &[Vec<String>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for list in lists {
        for reference in list {
            if seen.insert(reference.clone()) {
                unique.push(reference.clone());
            }
        }
    }
    unique
}
