//! Group tables and round listings for terminal display.
//!
//! Pure functions from engine types to text. The standings table is a blank
//! scoresheet: every player starts with zero points, played, won, drawn and
//! lost games.
//!
//! ## Example
//!
//! ```rust
//! use chessort_engine::entrant::Roster;
//! use chessort_engine::group::Group;
//! use chessort_cli::formatters::format_group_table;
//!
//! let group = Group::new(0, Roster::from_names(["Ana", "Luis"]).into_entrants());
//! let table = format_group_table(&group);
//! assert!(table.starts_with("Player"));
//! assert!(table.contains("Ana ---"));
//! ```

use chessort_engine::engine::{Draw, GroupDraw};
use chessort_engine::group::Group;
use chessort_engine::pairing::Pair;
use chessort_engine::round::Round;

/// Width of the player column, hyphen padding included.
pub const NAME_COLUMN_WIDTH: usize = 30;

/// Line printed after every group.
pub const GROUP_SEPARATOR: &str = "==============================";

const SCORE_COLUMNS: &str = "PTS   P   W   D   L";
const EMPTY_SCORES: &str = "0     0   0   0   0";

/// Standings table with one zeroed row per member.
pub fn format_group_table(group: &Group) -> String {
    let mut s = format!("{:<width$}{}\n", "Player", SCORE_COLUMNS, width = NAME_COLUMN_WIDTH + 2);
    for member in group.members() {
        let name = member.name();
        let fill = NAME_COLUMN_WIDTH.saturating_sub(name.chars().count());
        s.push_str(&format!("{} {} {}\n", name, "-".repeat(fill), EMPTY_SCORES));
    }
    s
}

/// A single match line: `<A> [] vs [] <B>`.
///
/// ```rust
/// use chessort_engine::entrant::{Entrant, EntrantId};
/// use chessort_engine::pairing::Pair;
/// use chessort_cli::formatters::format_pair;
///
/// let pair = Pair::new(Entrant::new(EntrantId(0), "Ana"), Entrant::new(EntrantId(1), "Luis"));
/// assert_eq!(format_pair(&pair), "Ana [] vs [] Luis");
/// ```
pub fn format_pair(pair: &Pair) -> String {
    format!("{} [] vs [] {}", pair.first.name(), pair.second.name())
}

/// Heading plus match lines of one round. `number` is one-based.
pub fn format_round(number: usize, round: &Round) -> String {
    let mut s = if round.is_degraded() {
        format!(
            "Round {}: (short round: {}/{})\n",
            number,
            round.len(),
            round.target()
        )
    } else {
        format!("Round {}:\n", number)
    };
    for pair in round.pairs() {
        s.push_str(&format_pair(pair));
        s.push('\n');
    }
    s
}

/// Table, rounds and separator for one group.
pub fn format_group_draw(group_draw: &GroupDraw) -> String {
    let mut s = format!("Group {}\n", group_draw.group.index() + 1);
    s.push_str(&format_group_table(&group_draw.group));
    s.push('\n');
    for (i, round) in group_draw.schedule.rounds().iter().enumerate() {
        s.push_str("\n\n");
        s.push_str(&format_round(i + 1, round));
    }
    s.push('\n');
    s.push_str(GROUP_SEPARATOR);
    s.push_str("\n\n");
    s
}

/// Full text report: every group, then the seed that reproduces the draw.
pub fn format_draw(draw: &Draw) -> String {
    let mut s = String::new();
    for group_draw in &draw.groups {
        s.push_str(&format_group_draw(group_draw));
    }
    s.push_str(&format!(
        "Seed: {} (strategy: {})\n",
        draw.seed, draw.strategy
    ));
    s
}
