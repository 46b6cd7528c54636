//! Key-based reconciliation of two collections
//!
//! Both sides are indexed by key into ordered maps (later items shadow
//! earlier ones with the same key). Every new key is then looked up and
//! consumed from the old index; whatever is left over was removed.

use std::collections::BTreeMap;

/// Classification of one key across the old and new collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing<'a, K, T> {
    /// Key exists only in the new collection
    Added { key: K, new: &'a T },
    /// Key exists in both collections
    Matched { key: K, old: &'a T, new: &'a T },
    /// Key exists only in the old collection
    Removed { key: K, old: &'a T },
}

/// Index items by key, last write wins
pub fn index_by<'a, T, K, F>(items: &'a [T], key: F) -> BTreeMap<K, &'a T>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    let mut index = BTreeMap::new();
    for item in items {
        index.insert(key(item), item);
    }
    index
}

/// Reconcile `old` against `new` by `key`.
///
/// Returns added and matched keys in ascending key order, followed by
/// removed keys in ascending key order.
pub fn reconcile<'a, T, K, F>(old: &'a [T], new: &'a [T], key: F) -> Vec<Pairing<'a, K, T>>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    let mut remaining = index_by(old, &key);
    let incoming = index_by(new, &key);

    let mut pairings = Vec::with_capacity(incoming.len() + remaining.len());

    for (k, new_item) in incoming {
        match remaining.remove(&k) {
            Some(old_item) => pairings.push(Pairing::Matched {
                key: k,
                old: old_item,
                new: new_item,
            }),
            None => pairings.push(Pairing::Added {
                key: k,
                new: new_item,
            }),
        }
    }

    pairings.extend(
        remaining
            .into_iter()
            .map(|(k, old_item)| Pairing::Removed { key: k, old: old_item }),
    );

    pairings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(pairings: &[Pairing<'a, &'a str, (&'a str, u32)>]) -> Vec<String> {
        pairings
            .iter()
            .map(|p| match p {
                Pairing::Added { key, .. } => format!("+{}", key),
                Pairing::Matched { key, .. } => format!("={}", key),
                Pairing::Removed { key, .. } => format!("-{}", key),
            })
            .collect()
    }

    #[test]
    fn test_reconcile_ordering() {
        let old = [("d", 1), ("b", 1), ("a", 1)];
        let new = [("c", 1), ("b", 2), ("e", 1)];

        let pairings = reconcile(&old, &new, |item| item.0);
        assert_eq!(keys(&pairings), ["=b", "+c", "+e", "-a", "-d"]);
    }

    #[test]
    fn test_reconcile_last_write_wins() {
        let old = [("a", 1), ("a", 2)];
        let new = [("a", 3), ("a", 2)];

        let pairings = reconcile(&old, &new, |item| item.0);
        assert_eq!(pairings.len(), 1);
        match pairings[0] {
            Pairing::Matched { old, new, .. } => {
                assert_eq!(old.1, 2);
                assert_eq!(new.1, 2);
            }
            ref other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_empty_sides() {
        let items = [("x", 1)];
        let none: [(&str, u32); 0] = [];

        let added = reconcile(&none, &items, |item| item.0);
        assert!(matches!(added[..], [Pairing::Added { key: "x", .. }]));

        let removed = reconcile(&items, &none, |item| item.0);
        assert!(matches!(removed[..], [Pairing::Removed { key: "x", .. }]));

        assert!(reconcile(&none, &none, |item| item.0).is_empty());
    }
}
