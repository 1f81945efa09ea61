// src/diff.rs

use std::collections::BTreeSet;

/// Activities present now but absent from the previous snapshot.
/// Pure set difference by exact string equality; output comes back in
/// BTreeSet order, so it is stable for a given pair of inputs.
pub fn new_activities(current: &BTreeSet<String>, previous: &BTreeSet<String>) -> Vec<String> {
    current.difference(previous).cloned().collect()
}
