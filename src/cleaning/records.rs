//! Record deduplication by key-tuple equality.

use crate::types::Value;

/// Outcome of a deduplication pass over a list of records.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupOutcome {
    /// Surviving records when duplicates were deleted, otherwise the input
    /// records unmodified.
    pub records: Vec<Value>,
    /// Number of records flagged as duplicates.
    pub duplicates_found: usize,
    /// Whether flagged duplicates were removed from `records`.
    pub deleted: bool,
}

impl DedupOutcome {
    /// Human-readable summary of the pass.
    pub fn summary(&self) -> String {
        let tail = if self.deleted {
            "Duplicates have been deleted."
        } else {
            "Duplicates have not been deleted."
        };
        format!("Total duplicates found: {} {tail}", self.duplicates_found)
    }
}

/// Deduplicate a list of records by key-tuple equality.
///
/// A record is a duplicate iff, for **every** key in `keys`, its value equals
/// the value of some earlier unique record — where "equals" uses absent-safe
/// lookup, so a key missing from both records matches. The first occurrence
/// is always kept. Entries that are not records never match anything and are
/// always kept, in keeping with best-effort cleaning of messy nested data.
///
/// With `delete_duplicates`, flagged records are removed and the survivors
/// keep their original relative order; otherwise the input comes back
/// unmodified alongside the count.
///
/// Cost is O(n·u·k) over n records, u unique survivors, and k keys — fine for
/// the small per-cell record lists this is used on.
pub fn dedup_records(records: Vec<Value>, keys: &[&str], delete_duplicates: bool) -> DedupOutcome {
    if records.len() <= 1 {
        return DedupOutcome {
            records,
            duplicates_found: 0,
            deleted: delete_duplicates,
        };
    }

    let mut unique_idxs: Vec<usize> = vec![0];
    let mut is_duplicate = vec![false; records.len()];

    for idx in 1..records.len() {
        let candidate = &records[idx];
        let duplicate = candidate.as_record().is_some()
            && unique_idxs.iter().any(|&u| {
                let unique = &records[u];
                unique.as_record().is_some()
                    && keys.iter().all(|key| candidate.get(key) == unique.get(key))
            });
        if duplicate {
            is_duplicate[idx] = true;
        } else {
            unique_idxs.push(idx);
        }
    }

    let duplicates_found = is_duplicate.iter().filter(|d| **d).count();
    let records = if delete_duplicates {
        records
            .into_iter()
            .zip(is_duplicate)
            .filter(|(_, dup)| !dup)
            .map(|(r, _)| r)
            .collect()
    } else {
        records
    };

    DedupOutcome {
        records,
        duplicates_found,
        deleted: delete_duplicates,
    }
}
