use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use fuelog::report::YearMonth;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("FUELOG_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("FUELOG_COMMIT_DATE");
    const IS_RELEASE: &str = env!("FUELOG_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "fuelog",
    bin_name = "fuelog",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Track fuel fill-ups and fuel consumption", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a fill-up
    Add {
        /// Liters added
        #[arg(short, long, allow_negative_numbers = true)]
        liters: Option<f64>,

        /// Odometer reading at the pump
        #[arg(short, long, allow_negative_numbers = true)]
        odometer: Option<i64>,

        /// Date of the fill-up (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Amount paid
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// List fill-ups, newest first
    #[command(alias = "ls")]
    History,

    /// Change fields of a fill-up
    Edit {
        /// Display index or record id
        selector: String,

        /// New date of the fill-up (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// New amount of liters added
        #[arg(short, long, allow_negative_numbers = true)]
        liters: Option<f64>,

        /// New odometer reading
        #[arg(short, long, allow_negative_numbers = true)]
        odometer: Option<i64>,

        /// New amount paid
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Delete fill-ups
    #[command(alias = "rm")]
    Delete {
        /// Display indexes or record ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Consumption report for a date range
    Report {
        /// Start of the range (YYYY-MM-DD)
        #[arg(long, requires = "to", conflicts_with_all = ["month", "days"])]
        from: Option<NaiveDate>,

        /// End of the range (YYYY-MM-DD)
        #[arg(long, requires = "from", conflicts_with_all = ["month", "days"])]
        to: Option<NaiveDate>,

        /// Calendar month (YYYY-MM)
        #[arg(short, long, conflicts_with = "days")]
        month: Option<YearMonth>,

        /// Trailing window in days, ending today
        #[arg(short, long)]
        days: Option<u64>,
    },

    /// Months that have at least one fill-up
    Months,

    /// Write all records to a JSON file
    Export {
        /// Target directory (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Replace all records with the contents of a JSON file
    Import {
        /// File produced by `fuelog export`
        file: PathBuf,
    },

    /// Delete every record
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration values
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Records,
    Reports,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Records => "Record Commands:",
            CommandGroup::Reports => "Report Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "history" | "edit" | "delete" => Some(CommandGroup::Records),
            "report" | "months" => Some(CommandGroup::Reports),
            "export" | "import" | "reset" => Some(CommandGroup::Data),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Records,
            CommandGroup::Reports,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("fuelog {version}\n"));
    output.push_str("Track fuel fill-ups and fuel consumption\n");
    output.push('\n');
    output.push_str("Usage: fuelog [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = get_grouped_help();
        assert!(help.contains("Record Commands:"));
        assert!(help.contains("report"));
        assert!(help.contains("import"));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from(["fuelog", "add", "--liters", "40", "--odometer", "1000"])
            .unwrap();
        match cli.command {
            Some(Commands::Add {
                liters,
                odometer,
                date,
                price,
            }) => {
                assert_eq!(liters, Some(40.0));
                assert_eq!(odometer, Some(1000));
                assert_eq!(date, None);
                assert_eq!(price, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_month_filter() {
        let cli = Cli::try_parse_from(["fuelog", "report", "--month", "2024-02"]).unwrap();
        match cli.command {
            Some(Commands::Report { month, .. }) => {
                assert_eq!(month.unwrap().to_string(), "2024-02");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn range_needs_both_ends() {
        assert!(Cli::try_parse_from(["fuelog", "report", "--from", "2024-01-01"]).is_err());
    }

    #[test]
    fn month_and_days_conflict() {
        assert!(
            Cli::try_parse_from(["fuelog", "report", "--month", "2024-02", "--days", "7"]).is_err()
        );
    }

    #[test]
    fn every_flag_has_help_text() {
        for sc in Cli::command().get_subcommands() {
            for arg in sc.get_arguments() {
                assert!(
                    arg.get_help().is_some(),
                    "{} --{} has no help text",
                    sc.get_name(),
                    arg.get_id()
                );
            }
        }
    }

    #[test]
    fn ls_is_history() {
        let cli = Cli::try_parse_from(["fuelog", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::History)));
    }
}
