//! Forming a single conflict-free round from the remaining pair pool.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::entrant::EntrantId;
use crate::pairing::Pair;

/// Default number of reshuffle attempts per round.
pub const DEFAULT_MAX_RETRIES: u32 = 12;

/// Pairs played simultaneously; no entrant appears in more than one pair.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Matches of the round, in selection order
    pairs: Vec<Pair>,
    /// Number of pairs the round was formed against
    target: usize,
}

impl Round {
    pub fn new(pairs: Vec<Pair>, target: usize) -> Self {
        Self { pairs, target }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
    pub fn target(&self) -> usize {
        self.target
    }
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when retries ran out before `target` pairs were found.
    pub fn is_degraded(&self) -> bool {
        self.pairs.len() < self.target
    }
}

/// Picks up to `target` non-conflicting pairs from `pool`.
///
/// Each attempt shuffles a copy of the pool and greedily accepts pairs whose
/// entrants are both still free in this round. The first attempt that
/// reaches `target` wins; once `max_retries` attempts have failed, the last
/// partial attempt is returned. A `target` of zero returns an empty round
/// without consuming randomness.
///
/// The pool is left untouched; callers remove the returned pairs.
///
/// # Examples
///
/// ```
/// use chessort_engine::entrant::Roster;
/// use chessort_engine::group::Group;
/// use chessort_engine::pairing::enumerate_pairs;
/// use chessort_engine::round::select_round;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let group = Group::new(0, Roster::from_names(["A", "B", "C", "D"]).into_entrants());
/// let pool = enumerate_pairs(&group);
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let round = select_round(&pool, 2, 12, &mut rng);
/// assert_eq!(round.len(), 2);
/// assert!(!round.is_degraded());
/// ```
pub fn select_round(
    pool: &[Pair],
    target: usize,
    max_retries: u32,
    rng: &mut dyn RngCore,
) -> Round {
    if target == 0 {
        return Round::new(Vec::new(), target);
    }

    let mut selected: Vec<Pair> = Vec::new();
    for _ in 0..max_retries {
        let mut shuffled: Vec<&Pair> = pool.iter().collect();
        shuffled.shuffle(&mut *rng);

        let mut used: HashSet<EntrantId> = HashSet::with_capacity(target * 2);
        selected = Vec::with_capacity(target);
        for pair in shuffled {
            let (a, b) = (pair.first.id(), pair.second.id());
            if used.contains(&a) || used.contains(&b) {
                continue;
            }
            used.insert(a);
            used.insert(b);
            selected.push(pair.clone());
            if selected.len() >= target {
                break;
            }
        }

        if selected.len() >= target {
            return Round::new(selected, target);
        }
    }

    Round::new(selected, target)
}
