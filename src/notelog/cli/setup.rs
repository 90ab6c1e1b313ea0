use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

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
#[command(name = "notelog", bin_name = "notelog", version = get_version())]
#[command(about = "Log what you are doing, one line at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding config.json
    #[arg(long, global = true, env = "NOTELOG_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a logging session (default)
    #[command(alias = "s")]
    Session {
        /// Hint shown above the prompt, overrides the configured placeholder
        #[arg(long)]
        placeholder: Option<String>,

        /// Print every logged entry when the session ends
        #[arg(long)]
        summary: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (placeholder, count-label, timestamp-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["notelog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn session_flags_parse() {
        let cli =
            Cli::try_parse_from(["notelog", "session", "--summary", "--placeholder", "What now?"])
                .unwrap();
        match cli.command {
            Some(Commands::Session {
                placeholder,
                summary,
            }) => {
                assert_eq!(placeholder.as_deref(), Some("What now?"));
                assert!(summary);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_set_parses() {
        let cli = Cli::try_parse_from(["notelog", "config", "count-label", "Done"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("count-label"));
                assert_eq!(value.as_deref(), Some("Done"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "notelog",
            "config",
            "--config-dir",
            "/tmp/notelog",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/notelog")));
    }
}
