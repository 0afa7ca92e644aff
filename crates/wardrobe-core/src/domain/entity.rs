//! Entities
//!
//! Records owned by the backend, identified by a server-assigned id.

use std::collections::HashSet;
use std::hash::Hash;

/// A server-owned record with a stable identifier
pub trait Entity: Sized + Clone {
    type Id: Copy + Eq + Hash;

    fn id(&self) -> Self::Id;
}

/// Append `extra` to `records`, skipping any whose id is already present.
/// Existing records always win.
pub fn merge_by_id<E: Entity>(records: &mut Vec<E>, extra: impl IntoIterator<Item = E>) {
    let mut seen: HashSet<E::Id> = records.iter().map(E::id).collect();
    records.extend(extra.into_iter().filter(|record| seen.insert(record.id())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u8, &'static str);

    impl Entity for Row {
        type Id = u8;

        fn id(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_merge_skips_known_ids() {
        let mut rows = vec![Row(1, "fetched"), Row(2, "fetched")];
        merge_by_id(&mut rows, vec![Row(2, "sample"), Row(3, "sample"), Row(3, "dup")]);
        assert_eq!(rows, vec![Row(1, "fetched"), Row(2, "fetched"), Row(3, "sample")]);
    }
}
