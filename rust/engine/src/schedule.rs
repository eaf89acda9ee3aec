//! Round-robin schedules for a single group.
//!
//! Two strategies implement [`ScheduleStrategy`]:
//!
//! - [`RandomizedRetry`] builds `n - 1` rounds by reshuffling the remaining
//!   pair pool and greedily picking free pairs. Rounds may come out short
//!   when retries run out; the schedule never contains a repeated pair.
//! - [`CircleMethod`] rotates members around a fixed seat and always yields
//!   a complete round robin.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::pairing::{enumerate_pairs, remove_scheduled, Pair};
use crate::round::{select_round, Round, DEFAULT_MAX_RETRIES};

/// Ordered rounds for one group, plus the pairs that never got a slot.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<Round>,
    /// Pairs left in the pool after the last round
    unscheduled: Vec<Pair>,
}

impl Schedule {
    pub fn new(rounds: Vec<Round>, unscheduled: Vec<Pair>) -> Self {
        Self {
            rounds,
            unscheduled,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn unscheduled(&self) -> &[Pair] {
        &self.unscheduled
    }

    pub fn degraded_rounds(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_degraded()).count()
    }

    pub fn scheduled_pairs(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    /// True when every pair of the group meets in some round.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}

/// Builds the schedule of one group.
pub trait ScheduleStrategy {
    fn name(&self) -> &'static str;
    fn schedule(&self, group: &Group, rng: &mut dyn RngCore) -> Schedule;
}

/// Reshuffle-and-scan with a bounded number of attempts per round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RandomizedRetry {
    pub max_retries: u32,
}

impl Default for RandomizedRetry {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ScheduleStrategy for RandomizedRetry {
    fn name(&self) -> &'static str {
        StrategyKind::Randomized.as_str()
    }

    fn schedule(&self, group: &Group, rng: &mut dyn RngCore) -> Schedule {
        let n = group.len();
        let target = n / 2;
        let mut pool = enumerate_pairs(group);
        let mut rounds = Vec::with_capacity(n.saturating_sub(1));

        for _ in 0..n.saturating_sub(1) {
            let round = select_round(&pool, target, self.max_retries, &mut *rng);
            remove_scheduled(&mut pool, round.pairs());
            rounds.push(round);
        }

        Schedule::new(rounds, pool)
    }
}

/// Deterministic polygon rotation. Odd groups get a bye seat, so they need
/// `n` rounds instead of `n - 1`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CircleMethod;

impl ScheduleStrategy for CircleMethod {
    fn name(&self) -> &'static str {
        StrategyKind::Circle.as_str()
    }

    fn schedule(&self, group: &Group, _rng: &mut dyn RngCore) -> Schedule {
        let members = group.members();
        let n = members.len();
        if n < 2 {
            return Schedule::default();
        }

        // seat n is the bye when n is odd
        let seats = if n % 2 == 0 { n } else { n + 1 };
        let rotating: Vec<usize> = (1..seats).collect();
        let mut rounds = Vec::with_capacity(seats - 1);

        for r in 0..seats - 1 {
            let mut order = Vec::with_capacity(seats);
            order.push(0);
            for i in 0..seats - 1 {
                order.push(rotating[(i + r) % (seats - 1)]);
            }

            let mut pairs = Vec::with_capacity(n / 2);
            for i in 0..seats / 2 {
                let (a, b) = (order[i], order[seats - 1 - i]);
                if a >= n || b >= n {
                    continue;
                }
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                pairs.push(Pair::new(members[lo].clone(), members[hi].clone()));
            }
            rounds.push(Round::new(pairs, n / 2));
        }

        Schedule::new(rounds, Vec::new())
    }
}

/// Named strategy selector used by configuration and the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Randomized,
    Circle,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Randomized => "randomized",
            StrategyKind::Circle => "circle",
        }
    }

    /// `max_retries` only applies to [`StrategyKind::Randomized`].
    pub fn build(self, max_retries: u32) -> Box<dyn ScheduleStrategy> {
        match self {
            StrategyKind::Randomized => Box::new(RandomizedRetry { max_retries }),
            StrategyKind::Circle => Box::new(CircleMethod),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randomized" | "random" => Ok(StrategyKind::Randomized),
            "circle" => Ok(StrategyKind::Circle),
            other => Err(format!(
                "unknown strategy '{}' (expected 'randomized' or 'circle')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entrant::Roster;
    use crate::pairing::pair_count;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn group_of(n: usize) -> Group {
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        Group::new(0, Roster::from_names(names).into_entrants())
    }

    #[test]
    fn randomized_produces_n_minus_one_rounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for n in 2..9 {
            let schedule = RandomizedRetry::default().schedule(&group_of(n), &mut rng);
            assert_eq!(schedule.rounds().len(), n - 1);
            assert!(schedule.rounds().iter().all(|r| r.target() == n / 2));
            assert_eq!(
                schedule.scheduled_pairs() + schedule.unscheduled().len(),
                pair_count(n)
            );
        }
    }

    #[test]
    fn odd_groups_cannot_complete_with_randomized_retry() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let schedule = RandomizedRetry::default().schedule(&group_of(3), &mut rng);
        assert_eq!(schedule.rounds().len(), 2);
        assert_eq!(schedule.scheduled_pairs(), 2);
        assert_eq!(schedule.unscheduled().len(), 1);
        assert!(!schedule.is_complete());
    }

    #[test]
    fn circle_method_is_complete() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for n in 2..12 {
            let schedule = CircleMethod.schedule(&group_of(n), &mut rng);
            let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
            assert_eq!(schedule.rounds().len(), expected_rounds);
            assert_eq!(schedule.degraded_rounds(), 0);

            let mut keys = HashSet::new();
            for round in schedule.rounds() {
                let mut used = HashSet::new();
                for p in round.pairs() {
                    assert!(used.insert(p.first.id()));
                    assert!(used.insert(p.second.id()));
                    assert!(p.first.id() < p.second.id());
                    assert!(keys.insert(p.key()), "pair repeated for n={n}");
                }
            }
            assert_eq!(keys.len(), pair_count(n));
        }
    }

    #[test]
    fn tiny_groups_have_no_rounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(CircleMethod.schedule(&group_of(1), &mut rng).rounds().is_empty());
        assert!(RandomizedRetry::default()
            .schedule(&group_of(1), &mut rng)
            .rounds()
            .is_empty());
    }

    #[test]
    fn strategy_kind_parses_and_builds() {
        assert_eq!("circle".parse::<StrategyKind>(), Ok(StrategyKind::Circle));
        assert_eq!(" Randomized ".parse::<StrategyKind>(), Ok(StrategyKind::Randomized));
        assert!("swiss".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::Circle.build(3).name(), "circle");
        assert_eq!(StrategyKind::default().build(3).name(), "randomized");
    }
}
