//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use retro_dump_core::{MediaType, System};

#[derive(Parser)]
#[command(name = "retro-dump")]
#[command(about = "Dump optical discs with DiscImageCreator and prepare redump.org submissions", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The disc being dumped.
#[derive(Args, Clone)]
pub(crate) struct DiscArgs {
    /// System name or alias (e.g., ps1, ps2, saturn, dc, xbox, pc)
    pub system: System,

    /// Media type (e.g., cd, dvd, bd, gd)
    pub media: MediaType,
}

/// What to do with the outputs once they are on disk.
#[derive(Args, Clone)]
pub(crate) struct SubmissionArgs {
    /// JSON submission whose fields override the extracted ones
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Look the dump up on redump.org (overrides the redump.enabled option)
    #[arg(long)]
    pub redump: bool,

    /// Skip the redump.org lookup even if enabled in the options
    #[arg(long, conflicts_with = "redump")]
    pub no_redump: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build or check DiscImageCreator command lines
    Params {
        #[command(subcommand)]
        action: ParamsAction,
    },

    /// Dump a disc, then write the submission files
    Dump {
        #[command(flatten)]
        disc: DiscArgs,

        /// Drive letter or device path (e.g., D or /dev/sr0)
        #[arg(short, long)]
        drive: Option<String>,

        /// Output image path (e.g., "dumps/Game/Game.bin")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drive speed (default: the configured speed for the media)
        #[arg(short, long)]
        speed: Option<i32>,

        /// Use this DiscImageCreator command line instead of the defaults
        #[arg(long, conflicts_with_all = ["drive", "output", "speed"])]
        command: Option<String>,

        /// Print the command line without running it
        #[arg(short = 'n', long)]
        dry_run: bool,

        #[command(flatten)]
        submission: SubmissionArgs,
    },

    /// Extract a submission from an existing dump
    Check {
        #[command(flatten)]
        disc: DiscArgs,

        /// Image path the dump was written to
        image: PathBuf,

        #[command(flatten)]
        submission: SubmissionArgs,
    },

    /// List supported systems, media, commands or flags
    List {
        #[arg(value_enum, default_value_t = ListTarget::Systems)]
        what: ListTarget,
    },

    /// Manage retro-dump options
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage redump.org credentials
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ParamsAction {
    /// Print the default command line for a disc
    Build {
        #[command(flatten)]
        disc: DiscArgs,

        /// Drive letter or device path
        drive: String,

        /// Output image path
        filename: String,

        /// Drive speed (default: the configured speed for the media)
        #[arg(short, long)]
        speed: Option<i32>,
    },

    /// Parse and validate a command line
    Validate {
        /// The full command line, quoted (e.g., 'cd D "out.bin" 8 /c2 20')
        line: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ListTarget {
    Systems,
    Media,
    Commands,
    Flags,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show every option and its current value
    Show,

    /// Set an option (see `config show` for keys)
    Set { key: String, value: String },

    /// Print the options file path
    Path,
}

#[derive(Subcommand)]
pub(crate) enum CredentialsAction {
    /// Show current credentials and their sources
    Show,

    /// Interactively set up credentials
    Setup,

    /// Test credentials by logging in to redump.org
    Test,

    /// Print the credentials file path
    Path,
}
