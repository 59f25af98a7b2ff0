use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SIGNAL_CMD: &str = "signal";
pub const CRESTS_CMD: &str = "crests";
pub const PERCENTILE_CMD: &str = "percentile";
pub const XCORR_CMD: &str = "xcorr";
pub const ABOVE_CMD: &str = "above";

pub const DEFAULT_XCORR_THRESHOLD: &str = "0.5";
pub const DEFAULT_BIN_SIZE: &str = "1";

fn output_arg() -> Arg {
    arg!(--output <OUTPUT>)
        .required(false)
        .help("Output JSON path (default: stdout)")
}

fn signal_input_arg() -> Arg {
    arg!(--input <INPUT>)
        .required(true)
        .help("Four-column signal file (chrom, start, end, intensity), optionally gzipped")
}

fn integer_arg(name: &'static str, default: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .default_value(default)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help(help)
}

fn create_crests_cli() -> Command {
    Command::new(CRESTS_CMD)
        .about("Count trough-crest-trough cycles in a signal region.")
        .arg(signal_input_arg())
        .arg(
            arg!(--threshold <THRESHOLD>)
                .required(true)
                .value_parser(value_parser!(f64))
                .help("Crest threshold"),
        )
        .arg(output_arg())
}

fn create_percentile_cli() -> Command {
    Command::new(PERCENTILE_CMD)
        .about("Compute the intensity at a percentile over every record of a signal file.")
        .arg(signal_input_arg())
        .arg(
            arg!(--percentile <PERCENTILE>)
                .required(true)
                .value_parser(value_parser!(f64))
                .help("Percentile as a fraction in [0, 1]"),
        )
        .arg(output_arg())
}

fn create_xcorr_cli() -> Command {
    Command::new(XCORR_CMD)
        .about("Cross-correlate two signal clusters after applying a delay.")
        .arg(
            arg!(--first <FIRST>)
                .required(true)
                .help("Four-column file holding the first cluster"),
        )
        .arg(
            arg!(--second <SECOND>)
                .required(true)
                .help("Four-column file holding the second cluster"),
        )
        .arg(integer_arg("delay", "0", "Delay (in samples) applied before comparison"))
        .arg(
            arg!(--threshold <THRESHOLD>)
                .required(false)
                .default_value(DEFAULT_XCORR_THRESHOLD)
                .value_parser(value_parser!(f64))
                .help("Minimum ratio between the two cluster maxima"),
        )
        .arg(
            Arg::new("max-cutoff")
                .long("max-cutoff")
                .default_value("0")
                .value_parser(value_parser!(f64))
                .help("Significance floor for the cluster maxima (see --use-max-cutoff)"),
        )
        .arg(
            Arg::new("use-max-cutoff")
                .long("use-max-cutoff")
                .action(ArgAction::SetTrue)
                .help("Report a correlation of 1 when both maxima are below --max-cutoff"),
        )
        .arg(
            Arg::new("two-way")
                .long("two-way")
                .action(ArgAction::SetTrue)
                .help("Shift both clusters instead of windowing the longer one"),
        )
        .arg(
            arg!(--minimum <MINIMUM>)
                .required(false)
                .default_value("0")
                .value_parser(value_parser!(f64))
                .help("A larger maximum equal to this value bypasses the ratio check"),
        )
        .arg(output_arg())
}

fn create_above_cli() -> Command {
    Command::new(ABOVE_CMD)
        .about("Count the coverage of samples above a threshold, optionally within an annotated range.")
        .arg(signal_input_arg())
        .arg(
            arg!(--threshold <THRESHOLD>)
                .required(true)
                .value_parser(value_parser!(f64))
                .help("Samples must be strictly above this value"),
        )
        .arg(
            arg!(--annotation <ANNOTATION>)
                .required(false)
                .help("Annotation label; when given, only positions in [start-anno, end-anno] count"),
        )
        .arg(integer_arg("start", "0", "Coordinate of the first sample"))
        .arg(integer_arg("end", "0", "Coordinate of the last sample (currently unused)"))
        .arg(integer_arg("start-anno", "0", "First coordinate of the annotated range"))
        .arg(integer_arg("end-anno", "0", "Last coordinate of the annotated range"))
        .arg(integer_arg("bin-size", DEFAULT_BIN_SIZE, "Coordinate width of one sample"))
        .arg(output_arg())
}

pub fn create_signal_cli() -> Command {
    Command::new(SIGNAL_CMD)
        .about("Descriptive metrics over genomic signal tracks.")
        .subcommand_required(true)
        .subcommand(create_crests_cli())
        .subcommand(create_percentile_cli())
        .subcommand(create_xcorr_cli())
        .subcommand(create_above_cli())
}
