use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entrant::{Entrant, EntrantId};
use crate::group::Group;

/// An unordered match between two entrants of the same group.
/// `first` is the entrant that comes earlier in group order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub first: Entrant,
    pub second: Entrant,
}

impl Pair {
    pub fn new(first: Entrant, second: Entrant) -> Self {
        Self { first, second }
    }

    /// Order-independent identity of the pair.
    pub fn key(&self) -> (EntrantId, EntrantId) {
        let (a, b) = (self.first.id(), self.second.id());
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn involves(&self, id: EntrantId) -> bool {
        self.first.id() == id || self.second.id() == id
    }
}

/// Enumerates every unordered pair of distinct group members.
///
/// Pairs are produced in group order: `(m0, m1), (m0, m2), .., (m1, m2), ..`.
/// A group of `n` members yields `n * (n - 1) / 2` pairs.
pub fn enumerate_pairs(group: &Group) -> Vec<Pair> {
    let members = group.members();
    let n = members.len();
    let mut pairs = Vec::with_capacity(pair_count(n));
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            pairs.push(Pair::new(a.clone(), b.clone()));
        }
    }
    pairs
}

/// Number of distinct pairs among `n` entrants.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Removes every pair in `scheduled` from `pool`.
pub fn remove_scheduled(pool: &mut Vec<Pair>, scheduled: &[Pair]) {
    let keys: HashSet<(EntrantId, EntrantId)> = scheduled.iter().map(Pair::key).collect();
    pool.retain(|p| !keys.contains(&p.key()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entrant::Roster;

    fn group_of(names: &[&str]) -> Group {
        Group::new(0, Roster::from_names(names.iter().copied()).into_entrants())
    }

    #[test]
    fn four_members_give_six_pairs_in_order() {
        let pairs = enumerate_pairs(&group_of(&["A", "B", "C", "D"]));
        let labels: Vec<String> = pairs
            .iter()
            .map(|p| format!("{}{}", p.first.name(), p.second.name()))
            .collect();
        assert_eq!(labels, vec!["AB", "AC", "AD", "BC", "BD", "CD"]);
    }

    #[test]
    fn pair_count_matches_enumeration() {
        for n in 0..12 {
            let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
            let group = Group::new(0, Roster::from_names(names).into_entrants());
            let pairs = enumerate_pairs(&group);
            assert_eq!(pairs.len(), pair_count(n));
            let keys: HashSet<_> = pairs.iter().map(Pair::key).collect();
            assert_eq!(keys.len(), pairs.len());
            assert!(pairs.iter().all(|p| p.first.id() != p.second.id()));
        }
    }

    #[test]
    fn duplicate_names_are_still_paired() {
        let pairs = enumerate_pairs(&group_of(&["Ana", "Ana", "Luis"]));
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].first.name(), pairs[0].second.name());
    }

    #[test]
    fn remove_scheduled_ignores_orientation() {
        let mut pool = enumerate_pairs(&group_of(&["A", "B", "C"]));
        let flipped = Pair::new(pool[0].second.clone(), pool[0].first.clone());
        remove_scheduled(&mut pool, &[flipped]);
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|p| p.first.name() != "A" || p.second.name() != "B"));
    }
}
