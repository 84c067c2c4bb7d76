//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Endpoint options are scoped to their subcommand: `--left` on `push` is
//!   an unknown option, not an ignored one
//! - Every parse failure becomes `SyncError::Usage` (exit status 2); help and
//!   version output are not errors

use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::domain::entities::{Operation, SyncRequest};
use crate::domain::value_objects::{ExclusionSet, Side};
use crate::error::{SyncError, SyncResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// dirsync - two-way folder sync with unison, falling back to rsync
#[derive(Parser, Debug)]
#[command(name = "dirsync")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Remote paths may be written as ssh://user@host//abs/path or user@host:/abs/path."
)]
pub struct Cli {
    /// Emit progress events as NDJSON on stderr
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Two-way sync between LEFT and RIGHT
    Sync {
        /// Left endpoint (local path or remote)
        #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
        left: String,

        /// Right endpoint (local path or remote)
        #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
        right: String,

        /// Side whose content wins conflicts the engine cannot settle
        #[arg(long, value_enum, value_name = "SIDE")]
        prefer: Option<Side>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// One-way copy of SRC contents into DST (local to remote)
    Push {
        #[command(flatten)]
        endpoints: TransferArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// One-way copy of SRC contents into DST (remote to local)
    Pull {
        #[command(flatten)]
        endpoints: TransferArgs,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    /// Source endpoint; its contents are copied
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    pub src: String,

    /// Destination endpoint; files missing from SRC are deleted here
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    pub dst: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Pattern to exclude (repeatable, order preserved)
    #[arg(long = "exclude", value_name = "PATTERN", allow_hyphen_values = true)]
    pub exclude: Vec<String>,

    /// Print the engine commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Result of reading the command line
#[derive(Debug)]
pub enum ParseOutcome {
    /// A command to carry out
    Run(Cli),
    /// Help or version text; print it and exit successfully
    Info(String),
}

/// Parse raw arguments (including the program name)
pub fn parse_args<I, T>(args: I) -> SyncResult<ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(ParseOutcome::Run(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(ParseOutcome::Info(err.render().to_string()))
            }
            _ => Err(SyncError::usage(err.render().to_string().trim_end())),
        },
    }
}

impl Cli {
    /// Validated request for the chosen command
    pub fn to_request(&self) -> SyncResult<SyncRequest> {
        let (operation, common) = match &self.command {
            Commands::Sync {
                left,
                right,
                prefer,
                common,
            } => (
                Operation::Sync {
                    left: left.as_str().into(),
                    right: right.as_str().into(),
                    prefer: *prefer,
                },
                common,
            ),
            Commands::Push { endpoints, common } => (
                Operation::Push {
                    src: endpoints.src.as_str().into(),
                    dst: endpoints.dst.as_str().into(),
                },
                common,
            ),
            Commands::Pull { endpoints, common } => (
                Operation::Pull {
                    src: endpoints.src.as_str().into(),
                    dst: endpoints.dst.as_str().into(),
                },
                common,
            ),
        };

        SyncRequest::new(
            operation,
            ExclusionSet::new(common.exclude.iter().cloned()),
            common.dry_run,
        )
        .map_err(with_usage)
    }
}

/// Append the usage line to a usage error raised after parsing
fn with_usage(err: SyncError) -> SyncError {
    match err {
        SyncError::Usage { message } => {
            let usage = Cli::command().render_usage().to_string();
            SyncError::usage(format!(
                "error: {}\n\n{}\n\nFor more information, try '--help'.",
                message, usage
            ))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CommandKind;

    fn run(args: &[&str]) -> Cli {
        match parse_args(std::iter::once("dirsync").chain(args.iter().copied())) {
            Ok(ParseOutcome::Run(cli)) => cli,
            other => panic!("expected a command, got {other:?}"),
        }
    }

    fn usage_error(args: &[&str]) -> SyncError {
        let err = parse_args(std::iter::once("dirsync").chain(args.iter().copied())).unwrap_err();
        assert!(err.is_usage(), "expected usage error, got {err:?}");
        err
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sync_with_all_options() {
        let cli = run(&[
            "sync", "--left", "/a", "--right", "ssh://u@h//b", "--exclude", "logs/**",
            "--exclude", "*.tmp", "--prefer", "right", "--dry-run",
        ]);
        let req = cli.to_request().unwrap();
        assert_eq!(req.kind(), CommandKind::Sync);
        assert!(req.dry_run());
        assert_eq!(req.exclusions().patterns(), ["logs/**", "*.tmp"]);
        assert_eq!(
            req.operation(),
            &Operation::Sync {
                left: "/a".into(),
                right: "ssh://u@h//b".into(),
                prefer: Some(Side::Right),
            }
        );
    }

    #[test]
    fn parses_push_and_pull() {
        let req = run(&["push", "--src", "data1", "--dst", "u@h:/d"]).to_request().unwrap();
        assert_eq!(req.kind(), CommandKind::Push);
        assert!(!req.dry_run());

        let req = run(&["pull", "--src", "u@h:/d", "--dst", "data1"]).to_request().unwrap();
        assert_eq!(
            req.operation(),
            &Operation::Pull {
                src: "u@h:/d".into(),
                dst: "data1".into(),
            }
        );
    }

    #[test]
    fn exclude_accepts_leading_hyphen() {
        let req = run(&[
            "push", "--src", "a", "--dst", "b", "--exclude", "-x", "--exclude", "*.tmp", "--dry-run",
        ])
        .to_request()
        .unwrap();
        assert_eq!(req.exclusions().patterns(), ["-x", "*.tmp"]);
        assert!(req.dry_run());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = run(&["push", "--src", "a", "--dst", "b", "-vv", "--json", "--color", "never"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn missing_command_is_usage_error() {
        assert_eq!(usage_error(&[]).exit_code(), 2);
    }

    #[test]
    fn unknown_command_is_usage_error() {
        usage_error(&["merge", "--left", "/a"]);
    }

    #[test]
    fn missing_right_is_usage_error() {
        let err = usage_error(&["sync", "--left", "/a"]);
        assert!(err.to_string().contains("--right"));
    }

    #[test]
    fn missing_src_is_usage_error() {
        usage_error(&["push", "--dst", "/b"]);
        usage_error(&["pull", "--src", "/a"]);
    }

    #[test]
    fn invalid_preference_is_usage_error() {
        let err = usage_error(&["sync", "--left", "/a", "--right", "/b", "--prefer", "mid"]);
        assert!(err.to_string().contains("mid"));
    }

    #[test]
    fn options_of_other_commands_are_unknown() {
        usage_error(&["push", "--src", "a", "--dst", "b", "--prefer", "left"]);
        usage_error(&["sync", "--left", "a", "--right", "b", "--src", "c"]);
        usage_error(&["sync", "--left", "a", "--right", "b", "--bogus"]);
    }

    #[test]
    fn empty_path_is_usage_error() {
        usage_error(&["sync", "--left", "", "--right", "/b"]);
    }

    #[test]
    fn help_is_not_an_error() {
        for flag in ["-h", "--help"] {
            let outcome = parse_args(["dirsync", flag]).unwrap();
            match outcome {
                ParseOutcome::Info(text) => assert!(text.contains("Usage:")),
                other => panic!("expected help, got {other:?}"),
            }
        }
    }

    #[test]
    fn subcommand_help_lists_its_options() {
        match parse_args(["dirsync", "sync", "--help"]).unwrap() {
            ParseOutcome::Info(text) => {
                assert!(text.contains("--left"));
                assert!(text.contains("--prefer"));
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn late_validation_errors_carry_usage() {
        let err = with_usage(SyncError::usage("sync requires a non-empty path for '--left'"));
        let text = err.to_string();
        assert!(text.starts_with("error: sync requires"));
        assert!(text.contains("Usage:"));
        assert_eq!(err.exit_code(), 2);
    }
}
