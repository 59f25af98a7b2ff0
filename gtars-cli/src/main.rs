mod signal;

use anyhow::Result;
use clap::{ArgAction, Command, arg};
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gtars";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Performance critical tools for working with genomic signal data.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log progress and intermediate results to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(signal::cli::create_signal_cli())
}

/// Route `log` records from the library crates to stderr. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let level = match verbose {
        true => consts::VERBOSE_LOG_LEVEL,
        false => consts::DEFAULT_LOG_LEVEL,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // SIGNAL METRICS
        //
        Some((signal::cli::SIGNAL_CMD, matches)) => match matches.subcommand() {
            Some((signal::cli::CRESTS_CMD, matches)) => {
                signal::handlers::run_crests(matches)?;
            }
            Some((signal::cli::PERCENTILE_CMD, matches)) => {
                signal::handlers::run_percentile(matches)?;
            }
            Some((signal::cli::XCORR_CMD, matches)) => {
                signal::handlers::run_xcorr(matches)?;
            }
            Some((signal::cli::ABOVE_CMD, matches)) => {
                signal::handlers::run_above(matches)?;
            }
            _ => unreachable!("Signal subcommand not found"),
        },

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_parse_xcorr_negative_delay() {
        let matches = build_parser()
            .try_get_matches_from([
                "gtars", "signal", "xcorr", "--first", "a.bedGraph", "--second", "b.bedGraph",
                "--delay", "-3", "--two-way",
            ])
            .unwrap();

        let (_, signal) = matches.subcommand().unwrap();
        let (name, xcorr) = signal.subcommand().unwrap();
        assert_eq!(name, signal::cli::XCORR_CMD);
        assert_eq!(*xcorr.get_one::<i64>("delay").unwrap(), -3);
        assert!(xcorr.get_flag("two-way"));
        assert!(!xcorr.get_flag("use-max-cutoff"));
        assert_eq!(*xcorr.get_one::<f64>("threshold").unwrap(), 0.5);
    }

    #[rstest]
    fn test_parse_above_defaults() {
        let matches = build_parser()
            .try_get_matches_from([
                "gtars", "signal", "above", "--input", "a.bedGraph", "--threshold", "5",
            ])
            .unwrap();

        let (_, signal) = matches.subcommand().unwrap();
        let (_, above) = signal.subcommand().unwrap();
        assert!(above.get_one::<String>("annotation").is_none());
        assert_eq!(*above.get_one::<i64>("bin-size").unwrap(), 1);
        assert_eq!(*above.get_one::<f64>("threshold").unwrap(), 5.0);
    }

    #[rstest]
    fn test_crests_requires_threshold() {
        let result = build_parser().try_get_matches_from([
            "gtars", "signal", "crests", "--input", "a.bedGraph",
        ]);
        assert!(result.is_err());
    }
}
