use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Draw, GroupDraw};
use crate::pairing::Pair;

/// Serializable snapshot of a [`Draw`], keyed by entrant names.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// RNG seed that reproduces this draw
    pub seed: u64,
    pub group_size: usize,
    pub strategy: String,
    /// Creation time (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
    pub groups: Vec<GroupRecord>,
}

/// One group of a [`DrawRecord`]. Numbers are one-based.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group: usize,
    pub members: Vec<String>,
    pub rounds: Vec<RoundRecord>,
    #[serde(default)]
    pub unscheduled: Vec<[String; 2]>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    pub target: usize,
    pub degraded: bool,
    pub pairs: Vec<[String; 2]>,
}

fn pair_names(p: &Pair) -> [String; 2] {
    [p.first.name().to_string(), p.second.name().to_string()]
}

impl GroupRecord {
    fn from_group_draw(gd: &GroupDraw) -> Self {
        let rounds = gd
            .schedule
            .rounds()
            .iter()
            .enumerate()
            .map(|(i, r)| RoundRecord {
                round: i + 1,
                target: r.target(),
                degraded: r.is_degraded(),
                pairs: r.pairs().iter().map(pair_names).collect(),
            })
            .collect();
        Self {
            group: gd.group.index() + 1,
            members: gd
                .group
                .members()
                .iter()
                .map(|e| e.name().to_string())
                .collect(),
            rounds,
            unscheduled: gd.schedule.unscheduled().iter().map(pair_names).collect(),
        }
    }
}

impl DrawRecord {
    pub fn from_draw(draw: &Draw) -> Self {
        Self {
            seed: draw.seed,
            group_size: draw.group_size,
            strategy: draw.strategy.to_string(),
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            groups: draw.groups.iter().map(GroupRecord::from_group_draw).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
