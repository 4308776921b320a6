//! Client-side grouping of flat rows by a parent key.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

/// Bucket rows by `key_of`.
///
/// Groups appear in the order their key is first seen; rows keep their
/// original relative order inside a group.
pub fn group_by_key<K, T, I, F>(rows: I, key_of: F) -> Vec<Group<K, T>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for row in rows {
        let key = key_of(&row);
        match index.get(&key) {
            Some(&pos) => groups[pos].items.push(row),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![row],
                });
            }
        }
    }

    groups
}

/// Which group's detail panel is open. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandState<K> {
    expanded: Option<K>,
}

impl<K> Default for ExpandState<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<K: PartialEq> ExpandState<K> {
    /// Open `key`, closing any other group; close it if it is already open.
    pub fn toggle(&mut self, key: K) {
        if self.expanded.as_ref() == Some(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a013_itinerary::aggregate::ItineraryStep;
    use crate::domain::common::HasParent;

    fn step(id: i64, tour_id: i64) -> ItineraryStep {
        ItineraryStep {
            id,
            tour_id: Some(tour_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_by_tour_in_first_seen_order() {
        let rows = vec![step(10, 1), step(11, 2), step(12, 1)];
        let groups = group_by_key(rows, |r| r.parent_id());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, Some(1));
        let ids: Vec<i64> = groups[0].items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 12]);
        assert_eq!(groups[1].key, Some(2));
        assert_eq!(groups[1].items.len(), 1);
    }

    #[test]
    fn test_orphans_form_their_own_group() {
        let mut orphan = step(20, 0);
        orphan.tour_id = None;
        let groups = group_by_key(vec![step(1, 3), orphan], |r| r.parent_id());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].key, None);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_key(Vec::<ItineraryStep>::new(), |r| r.parent_id());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_expand_single_key() {
        let mut state = ExpandState::default();
        state.toggle(1);
        assert!(state.is_open(&1));

        state.toggle(2);
        assert!(state.is_open(&2));
        assert!(!state.is_open(&1));

        state.toggle(2);
        assert!(!state.is_open(&2));
    }
}
