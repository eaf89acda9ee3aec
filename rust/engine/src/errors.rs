use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TournamentError {
    #[error("The roster has no players")]
    EmptyRoster,
    #[error("Group size must be a positive integer")]
    InvalidGroupSize,
    #[error("Group size {group_size} cannot be greater than half the number of players (max {max})")]
    GroupSizeTooLarge { group_size: usize, max: usize },
}
