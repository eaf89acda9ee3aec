//! Splitting a shuffled roster into round-robin groups.

use serde::{Deserialize, Serialize};

use crate::entrant::Entrant;
use crate::errors::TournamentError;

/// A set of entrants that play a self-contained round robin.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Zero-based position of the group in the draw
    index: usize,
    /// Members in draw order
    members: Vec<Entrant>,
}

impl Group {
    pub fn new(index: usize, members: Vec<Entrant>) -> Self {
        Self { index, members }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn members(&self) -> &[Entrant] {
        &self.members
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Largest group size accepted for `entrant_count` players.
pub fn max_group_size(entrant_count: usize) -> usize {
    entrant_count / 2
}

/// Checks that `group_size` lies in `1..=entrant_count / 2`.
///
/// # Errors
///
/// - [`TournamentError::EmptyRoster`] when there are no entrants
/// - [`TournamentError::InvalidGroupSize`] when `group_size` is zero
/// - [`TournamentError::GroupSizeTooLarge`] when more than half the roster
///   would be needed for one group
pub fn validate_group_size(group_size: usize, entrant_count: usize) -> Result<(), TournamentError> {
    if entrant_count == 0 {
        return Err(TournamentError::EmptyRoster);
    }
    if group_size == 0 {
        return Err(TournamentError::InvalidGroupSize);
    }
    let max = max_group_size(entrant_count);
    if group_size > max {
        return Err(TournamentError::GroupSizeTooLarge { group_size, max });
    }
    Ok(())
}

/// Partitions already-shuffled entrants into groups of `group_size`.
///
/// Groups are filled by taking entrants from the back of the list, so the
/// first group holds the last `group_size` entrants (last one first). The
/// `len % group_size` entrants left at the front are then handed out one per
/// group: leftover `i` joins group `i % group_count`.
///
/// # Examples
///
/// ```
/// use chessort_engine::entrant::Roster;
/// use chessort_engine::group::partition;
///
/// let roster = Roster::from_names((0..10).map(|i| format!("P{i}")));
/// let groups = partition(roster.into_entrants(), 3).unwrap();
/// let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
/// assert_eq!(sizes, vec![4, 3, 3]);
/// ```
pub fn partition(
    mut entrants: Vec<Entrant>,
    group_size: usize,
) -> Result<Vec<Group>, TournamentError> {
    validate_group_size(group_size, entrants.len())?;

    let group_count = entrants.len() / group_size;
    let mut members: Vec<Vec<Entrant>> = Vec::with_capacity(group_count);
    for _ in 0..group_count {
        let mut current = Vec::with_capacity(group_size + 1);
        for _ in 0..group_size {
            // length is at least group_count * group_size here
            if let Some(e) = entrants.pop() {
                current.push(e);
            }
        }
        members.push(current);
    }

    for (i, leftover) in entrants.into_iter().enumerate() {
        members[i % group_count].push(leftover);
    }

    Ok(members
        .into_iter()
        .enumerate()
        .map(|(index, m)| Group::new(index, m))
        .collect())
}
