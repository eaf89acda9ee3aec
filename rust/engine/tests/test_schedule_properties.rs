use std::collections::HashSet;

use chessort_engine::entrant::{EntrantId, Roster};
use chessort_engine::group::Group;
use chessort_engine::pairing::{enumerate_pairs, pair_count};
use chessort_engine::schedule::{CircleMethod, RandomizedRetry, Schedule, ScheduleStrategy};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn group(names: &[&str]) -> Group {
    Group::new(0, Roster::from_names(names.iter().copied()).into_entrants())
}

fn group_of(n: usize) -> Group {
    Group::new(0, Roster::from_names((0..n).map(|i| format!("P{i}"))).into_entrants())
}

fn assert_valid(schedule: &Schedule) {
    let mut seen_pairs: HashSet<(EntrantId, EntrantId)> = HashSet::new();
    for (i, round) in schedule.rounds().iter().enumerate() {
        let mut used = HashSet::new();
        for p in round.pairs() {
            assert_ne!(p.first.id(), p.second.id());
            assert!(used.insert(p.first.id()), "double booking in round {}", i + 1);
            assert!(used.insert(p.second.id()), "double booking in round {}", i + 1);
            assert!(seen_pairs.insert(p.key()), "pair repeated in round {}", i + 1);
        }
    }
    for p in schedule.unscheduled() {
        assert!(!seen_pairs.contains(&p.key()), "unscheduled pair was also played");
    }
}

#[test]
fn four_players_get_a_complete_schedule() {
    let g = group(&["A", "B", "C", "D"]);
    assert_eq!(enumerate_pairs(&g).len(), 6);

    for seed in 0..200 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let schedule = RandomizedRetry::default().schedule(&g, &mut rng);
        assert_valid(&schedule);
        assert_eq!(schedule.rounds().len(), 3);
        for round in schedule.rounds() {
            assert_eq!(round.len(), 2);
            let touched: HashSet<&str> = round
                .pairs()
                .iter()
                .flat_map(|p| [p.first.name(), p.second.name()])
                .collect();
            assert_eq!(touched.len(), 4);
        }
        assert!(schedule.is_complete(), "seed {seed} left pairs unscheduled");
        assert_eq!(schedule.scheduled_pairs(), 6);
    }
}

#[test]
fn randomized_schedules_stay_valid_when_degraded() {
    for n in 2..16 {
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed * 31 + n as u64);
            let g = group_of(n);
            let schedule = RandomizedRetry { max_retries: 1 }.schedule(&g, &mut rng);
            assert_valid(&schedule);
            assert_eq!(schedule.rounds().len(), n - 1);
            assert_eq!(
                schedule.scheduled_pairs() + schedule.unscheduled().len(),
                pair_count(n)
            );
        }
    }
}

#[test]
fn circle_method_covers_every_pair_once() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    for n in 2..20 {
        let schedule = CircleMethod.schedule(&group_of(n), &mut rng);
        assert_valid(&schedule);
        assert_eq!(schedule.scheduled_pairs(), pair_count(n));
        assert!(schedule.is_complete());
    }
}

#[test]
fn duplicate_names_do_not_suppress_pairings() {
    let g = group(&["Ana", "Ana", "Luis", "Marta"]);
    for seed in 0..50 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let schedule = RandomizedRetry::default().schedule(&g, &mut rng);
        assert_valid(&schedule);
        assert!(schedule.rounds().iter().all(|r| r.len() == 2));
        assert!(schedule.is_complete());
    }
}
