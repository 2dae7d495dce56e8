//! Command dispatch and handlers

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::render::{
    card_line, formula_summary, status_message, DeckReport, ProcessedMarks,
};
use crate::application::services::DeckGenerator;
use crate::application::{check_symbols_per_card, parse_symbols_per_card};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{construct_deck, first_violation, total_symbols};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    if cli.no_color || !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Generate {
            symbols,
            format,
            processed,
        }) => cmd_generate(
            &settings,
            symbols.as_deref(),
            format.unwrap_or(settings.format),
            processed,
        ),
        Some(Commands::Check { symbols }) => cmd_check(symbols),
        Some(Commands::Formula { symbols }) => cmd_formula(symbols),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&settings),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see 'dobble --help'".into(),
        )),
    }
}

/// Card size from the command line, or the configured default.
fn resolve_symbols(settings: &Settings, raw: Option<&str>) -> CliResult<usize> {
    let symbols_per_card = match raw {
        Some(raw) => parse_symbols_per_card(raw)?,
        None => check_symbols_per_card(settings.symbols_per_card)?,
    };
    Ok(symbols_per_card)
}

/// Build processed marks from 1-based card numbers.
fn build_marks(len: usize, processed: &[usize]) -> CliResult<ProcessedMarks> {
    let mut marks = ProcessedMarks::new(len);
    for &number in processed {
        if number == 0 || !marks.set(number - 1, true) {
            return Err(CliError::InvalidArgs(format!(
                "card {} does not exist (deck has {} cards)",
                number, len
            )));
        }
    }
    Ok(marks)
}

#[instrument(skip(settings))]
fn cmd_generate(
    settings: &Settings,
    symbols: Option<&str>,
    format: OutputFormat,
    processed: &[usize],
) -> CliResult<()> {
    let symbols_per_card = resolve_symbols(settings, symbols)?;
    let result = DeckGenerator::new().generate(symbols_per_card);
    let marks = build_marks(result.deck().len(), processed)?;
    debug!("{} cards marked processed", marks.processed_count());

    match format {
        OutputFormat::Json => {
            let report = DeckReport::new(&result, &marks);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Output(e.to_string()))?;
            output::info(&json);
        }
        OutputFormat::Text => {
            if result.is_valid() {
                output::success(&status_message(&result));
            } else {
                output::partial(&status_message(&result));
            }
            output::info(&formula_summary(
                result.symbols_per_card(),
                result.total_symbols(),
            ));
            output::header("Cards:");
            for (i, card) in result.deck().iter().enumerate() {
                let processed = marks.is_processed(i);
                let line = card_line(i, card, processed);
                if processed {
                    output::dimmed(&line);
                } else {
                    output::info(&line);
                }
            }
        }
    }
    Ok(())
}

#[instrument]
fn cmd_check(symbols: &str) -> CliResult<()> {
    let symbols_per_card = parse_symbols_per_card(symbols)?;
    let deck = construct_deck(symbols_per_card);

    match first_violation(&deck) {
        None => output::success(&format!(
            "{} symbols per card: construction is valid ({} cards)",
            symbols_per_card,
            deck.len()
        )),
        Some(v) => {
            output::failure(&format!(
                "{} symbols per card: construction is not valid ({} cards)",
                symbols_per_card,
                deck.len()
            ));
            output::detail(&format!(
                "card {} {} and card {} {} share {} symbols",
                v.first + 1,
                deck[v.first],
                v.second + 1,
                deck[v.second],
                v.common
            ));
        }
    }
    Ok(())
}

#[instrument]
fn cmd_formula(symbols: &str) -> CliResult<()> {
    let symbols_per_card = parse_symbols_per_card(symbols)?;
    output::info(&formula_summary(
        symbols_per_card,
        total_symbols(symbols_per_card),
    ));
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("(no config directory available)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_card_numbers_when_building_marks_then_sets_zero_based_marks() {
        let marks = build_marks(3, &[1, 3]).unwrap();
        assert!(marks.is_processed(0));
        assert!(!marks.is_processed(1));
        assert!(marks.is_processed(2));
    }

    #[test]
    fn given_out_of_range_card_when_building_marks_then_invalid_args() {
        assert!(matches!(build_marks(3, &[4]), Err(CliError::InvalidArgs(_))));
        assert!(matches!(build_marks(3, &[0]), Err(CliError::InvalidArgs(_))));
    }

    #[test]
    fn given_no_symbols_when_resolving_then_uses_configured_default() {
        let settings = Settings {
            symbols_per_card: 6,
            ..Settings::default()
        };
        assert_eq!(resolve_symbols(&settings, None).unwrap(), 6);
        assert_eq!(resolve_symbols(&settings, Some("3")).unwrap(), 3);
    }

    #[test]
    fn given_out_of_range_default_when_resolving_then_usage_error() {
        let settings = Settings {
            symbols_per_card: 40,
            ..Settings::default()
        };
        let err = resolve_symbols(&settings, None).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
