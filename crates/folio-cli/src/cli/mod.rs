use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - portfolio data client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL, overriding config and FOLIO_API__BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--verbose", "health"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "social", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Social));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "xml", "profile"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn projects_flags() {
        let cli = Cli::try_parse_from(["folio", "projects", "--featured", "--origin"])
            .expect("cli should parse");
        let Commands::Projects(args) = cli.command else {
            panic!("expected projects");
        };
        assert!(args.featured);
        assert!(args.origin);
    }

    #[test]
    fn classify_collects_repeated_topics() {
        let cli = Cli::try_parse_from([
            "folio", "classify", "dotfiles", "--stars", "3", "--topic", "AI", "--topic", "rust",
        ])
        .expect("cli should parse");
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.name, "dotfiles");
        assert_eq!(args.stars, 3);
        assert_eq!(args.forks, 0);
        assert_eq!(args.topics, vec!["AI", "rust"]);
    }

    #[test]
    fn subcommands_are_kebab_case() {
        for name in ["projects-sync", "projects-stats", "videos-sync", "sync-all", "system-stats"] {
            assert!(Cli::try_parse_from(["folio", name]).is_ok(), "{name}");
        }
    }

    #[test]
    fn base_url_is_copied_into_flags() {
        let cli = Cli::try_parse_from(["folio", "--base-url", "http://10.0.0.2:8001/api", "page"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("http://10.0.0.2:8001/api"));
    }
}
