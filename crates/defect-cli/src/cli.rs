use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "defect",
    version,
    about = "Introduce a substitutional point defect or vacancy into a VASP POSCAR file.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Species to substitute in, or 'Va' to leave a vacancy.
    pub substitution: String,

    /// Element whose site will be replaced.
    pub site: String,

    /// Input POSCAR file [default: POSCAR]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output filename [default: '{substitution}_{site}_POSCAR']
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Target coordinate to find the closest site atom to
    /// [default: 0.5 0.5 0.5]
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    pub target: Option<Vec<f64>>,

    /// Path to an optional configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

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

impl Cli {
    /// The `--target` triple as a fixed-size array, if given.
    pub fn target_coordinate(&self) -> Option<[f64; 3]> {
        self.target.as_ref().map(|v| [v[0], v[1], v[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_defaults() {
        let cli = Cli::try_parse_from(["defect", "Ge", "Si"]).unwrap();
        assert_eq!(cli.substitution, "Ge");
        assert_eq!(cli.site, "Si");
        assert_eq!(cli.file, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.target_coordinate(), None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn target_takes_exactly_three_values() {
        let cli =
            Cli::try_parse_from(["defect", "Va", "O", "--target", "0.1", "0.2", "0.3"]).unwrap();
        assert_eq!(cli.target_coordinate(), Some([0.1, 0.2, 0.3]));

        assert!(Cli::try_parse_from(["defect", "Va", "O", "--target", "0.1", "0.2"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["defect", "Ge", "Si", "-q", "-v"]).is_err());
    }

    #[test]
    fn negative_target_components_are_accepted() {
        let cli =
            Cli::try_parse_from(["defect", "Ge", "Si", "--target", "-0.5", "0.0", "0.5"]).unwrap();
        assert_eq!(cli.target_coordinate(), Some([-0.5, 0.0, 0.5]));
    }
}
