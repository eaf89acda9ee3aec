//! Draw command handler.
//!
//! Reads the player list, validates the group size, runs the engine and
//! writes the groups with their rounds in the chosen output format.
//! Command-line flags override configuration values.

use std::io::Write;
use std::path::Path;

use chessort_engine::engine::Organizer;
use chessort_engine::entrant::Roster;
use chessort_engine::record::DrawRecord;
use chessort_engine::schedule::StrategyKind;

use crate::cli::{DrawArgs, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::formatters::format_draw;
use crate::io_utils::{check_input_path, read_entrant_names};
use crate::ui;
use crate::validation::{validate_group_size, validate_max_retries, validate_positive_group};

/// Handle the draw command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for a missing, non-regular or empty input
/// file and for a group size outside `1..=players / 2`, `CliError::Config`
/// for a broken configuration, and `CliError::Io` when writing fails.
pub fn handle_draw_command(
    args: DrawArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let strategy = args.strategy.unwrap_or(cfg.strategy);
    let max_retries = args.max_retries.unwrap_or(cfg.max_retries);
    let format = args.format.unwrap_or(cfg.format);
    validate_max_retries(max_retries).map_err(CliError::InvalidInput)?;
    if strategy == StrategyKind::Circle && args.max_retries.is_some() {
        ui::warn_parameter_unused(err, "max-retries", "by the circle strategy")?;
    }

    let path = Path::new(&args.input);
    check_input_path(path)?;
    validate_positive_group(args.group).map_err(CliError::InvalidInput)?;
    let names = read_entrant_names(path)?;
    let group_size = validate_group_size(args.group, names.len()).map_err(CliError::InvalidInput)?;

    let roster = Roster::from_names(names);
    let mut organizer = Organizer::new(Some(seed), strategy.build(max_retries));
    tracing::info!(
        players = roster.len(),
        group_size,
        seed = organizer.seed(),
        strategy = organizer.strategy_name(),
        "drawing groups"
    );
    let draw = organizer.draw(roster, group_size)?;
    let short = draw.degraded_rounds();
    if short > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} round(s) could not be filled; raise --max-retries or use --strategy circle",
                short
            ),
        )?;
    }

    match format {
        OutputFormat::Text => write!(out, "{}", format_draw(&draw))?,
        OutputFormat::Json => {
            let json = DrawRecord::from_draw(&draw)
                .to_json_pretty()
                .map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
