//! Command-line interface definitions.
//!
//! Lives in the library so the xtask crate can render the man page from the
//! same definitions the binary parses.

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use once_cell::sync::Lazy;

/// Version line shown by `tmix --version`.
static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    let mut version = env!("CARGO_PKG_VERSION").to_string();
    if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
        let short: String = sha.chars().take(7).collect();
        version.push_str(&format!(" ({})", short));
    }
    version.push_str(&format!(" built {}", env!("TMIX_BUILD_DATE")));
    version
});

/// Vary text with homoglyphs, templates and emoji.
#[derive(Debug, Parser)]
#[command(
    name = "tmix",
    version,
    long_version = LONG_VERSION.as_str(),
    about = "Vary text with homoglyphs, templates and emoji",
    long_about = "Vary text with homoglyphs, templates and emoji.\n\n\
        Cyrillic letters are swapped for look-alike characters, [a|b|c] template \
        groups pick one variant, and emoji are sprinkled between words. URLs are \
        never modified."
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transform text once and print the result
    #[command(long_about = "Transform text once and print the result.\n\n\
        Text comes from the argument, or from stdin with --stdin or when piped. \
        Unset options fall back to the [defaults] section of the config file.\n\n\
        EXAMPLES:\n    \
        tmix run 'Привет, как дела?' --percent 50\n    \
        tmix run -a '[Hi|Hello] there' --interval 2 --copy\n    \
        echo 'текст' | tmix run --seed 7")]
    Run(RunArgs),

    /// Open the interactive randomizer
    Ui,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for a one-shot transform.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Text to transform
    #[arg(conflicts_with = "stdin")]
    pub text: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Chance of replacing each Cyrillic look-alike (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percent: Option<u8>,

    /// Insert an emoji after every N words (0 disables)
    #[arg(short, long)]
    pub interval: Option<usize>,

    /// Expand [a|b|c] template groups
    #[arg(short, long)]
    pub advanced: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply changes without asking
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_all_options() {
        let cli = Cli::try_parse_from([
            "tmix", "run", "hello", "-p", "40", "-i", "3", "-a", "--seed", "9", "-c",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.text.as_deref(), Some("hello"));
        assert_eq!(args.percent, Some(40));
        assert_eq!(args.interval, Some(3));
        assert!(args.advanced);
        assert_eq!(args.seed, Some(9));
        assert!(args.copy);
    }

    #[test]
    fn percent_above_100_is_rejected() {
        assert!(Cli::try_parse_from(["tmix", "run", "x", "-p", "101"]).is_err());
    }

    #[test]
    fn text_and_stdin_conflict() {
        assert!(Cli::try_parse_from(["tmix", "run", "x", "--stdin"]).is_err());
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["tmix", "ui", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
