use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::entrant::Roster;
use crate::errors::TournamentError;
use crate::group::{partition, validate_group_size, Group};
use crate::schedule::{RandomizedRetry, Schedule, ScheduleStrategy};

/// One group together with its round-robin schedule.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GroupDraw {
    pub group: Group,
    pub schedule: Schedule,
}

/// Result of a full draw: every group and its schedule.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Draw {
    /// Seed the organizer RNG was created with
    pub seed: u64,
    /// Requested group size (groups may hold one more)
    pub group_size: usize,
    /// Name of the strategy that produced the schedules
    pub strategy: &'static str,
    pub groups: Vec<GroupDraw>,
}

impl Draw {
    pub fn entrant_count(&self) -> usize {
        self.groups.iter().map(|g| g.group.len()).sum()
    }

    pub fn degraded_rounds(&self) -> usize {
        self.groups.iter().map(|g| g.schedule.degraded_rounds()).sum()
    }
}

/// Shuffles a roster, splits it into groups and schedules each group.
///
/// All randomness comes from a single `ChaCha20Rng`, so the same seed,
/// roster and strategy always produce the same draw.
///
/// # Examples
///
/// ```
/// use chessort_engine::engine::Organizer;
/// use chessort_engine::entrant::Roster;
/// use chessort_engine::schedule::RandomizedRetry;
///
/// let roster = Roster::from_names(["A", "B", "C", "D", "E", "F", "G", "H"]);
/// let mut organizer = Organizer::new(Some(42), Box::new(RandomizedRetry::default()));
/// let draw = organizer.draw(roster, 4).unwrap();
/// assert_eq!(draw.groups.len(), 2);
/// assert_eq!(draw.groups[0].schedule.rounds().len(), 3);
/// ```
pub struct Organizer {
    seed: u64,
    rng: ChaCha20Rng,
    strategy: Box<dyn ScheduleStrategy>,
}

impl Organizer {
    pub fn new(seed: Option<u64>, strategy: Box<dyn ScheduleStrategy>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            strategy,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn draw(&mut self, roster: Roster, group_size: usize) -> Result<Draw, TournamentError> {
        validate_group_size(group_size, roster.len())?;

        let mut entrants = roster.into_entrants();
        entrants.shuffle(&mut self.rng);
        let groups = partition(entrants, group_size)?;
        tracing::debug!(
            groups = groups.len(),
            group_size,
            strategy = self.strategy.name(),
            "partitioned roster"
        );

        let mut drawn = Vec::with_capacity(groups.len());
        for group in groups {
            let schedule = self.strategy.schedule(&group, &mut self.rng);
            report_shortfalls(&group, &schedule);
            drawn.push(GroupDraw { group, schedule });
        }

        Ok(Draw {
            seed: self.seed,
            group_size,
            strategy: self.strategy.name(),
            groups: drawn,
        })
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new(None, Box::new(RandomizedRetry::default()))
    }
}

fn report_shortfalls(group: &Group, schedule: &Schedule) {
    for (i, round) in schedule.rounds().iter().enumerate() {
        if round.is_degraded() {
            tracing::warn!(
                group = group.index() + 1,
                round = i + 1,
                pairs = round.len(),
                target = round.target(),
                "short round after exhausting retries"
            );
        }
    }
    if !schedule.is_complete() {
        tracing::debug!(
            group = group.index() + 1,
            unscheduled = schedule.unscheduled().len(),
            "pairs left without a round"
        );
    }
}
