use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates coarse-grained Go-model force-field parameters \
             from all-atom protein structures."
)]
pub struct Cli {
    /// Input TOML describing structures, groups, flexible regions and the
    /// selected generators
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the force field to PATH instead of the path named in the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_path_and_flags() {
        let cli = Cli::parse_from(["gofield", "system.toml", "-vv", "-o", "out.toml"]);
        assert_eq!(cli.input, PathBuf::from("system.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("out.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gofield", "system.toml", "-q", "-v"]).is_err());
    }
}
