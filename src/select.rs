//! Top-N selection
//!
//! Pure selection over two collections: take the highest-valued records
//! from each side and concatenate the results.

use crate::collection::{Record, RecordCollection};

/// Select the `n1` highest-valued records from `a` and the `n2`
/// highest-valued records from `b`, in that order.
///
/// Each side is sorted by value descending before taking; the sort is
/// stable, so equal-valued records keep their insertion order. `n` values
/// at or below zero select nothing from that side, and values above the
/// source count select everything. The inputs are never mutated; the
/// result owns copies of the selected records.
pub fn select_top_paid(
    a: &RecordCollection,
    b: &RecordCollection,
    n1: i64,
    n2: i64,
) -> RecordCollection {
    let mut selected = top_by_value(a, n1);
    selected.extend(top_by_value(b, n2));

    tracing::debug!(
        from_a = usize::try_from(n1).unwrap_or(0).min(a.len()),
        from_b = usize::try_from(n2).unwrap_or(0).min(b.len()),
        total = selected.len(),
        "selected top-paid records"
    );

    RecordCollection::from_records(selected)
}

/// Copy of the top `n` records of `list` by value, descending.
fn top_by_value(list: &RecordCollection, n: i64) -> Vec<Record> {
    let take = usize::try_from(n).unwrap_or(0).min(list.len());

    let mut sorted: Vec<Record> = list.iter().cloned().collect();
    // sort_by is stable: equal values stay in insertion order
    sorted.sort_by(|x, y| y.value().cmp(&x.value()));
    sorted.truncate(take);
    sorted
}
