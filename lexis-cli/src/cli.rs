//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use lexis_core::WorkspaceConfig;

#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
#[command(about = "Extract unfamiliar vocabulary from foreign-language text")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(global = true, short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the words of the input that are neither ignored nor known (default)
    Extract {
        #[command(flatten)]
        files: FileArgs,
        /// Print run statistics to stdout
        #[arg(long)]
        stats: bool,
    },
    /// Merge the output list into the known-word list
    Learn {
        #[command(flatten)]
        files: FileArgs,
    },
}

/// Locations of the list files. Relative paths resolve against `--dir`.
#[derive(Debug, Default, Args)]
pub struct FileArgs {
    /// Directory holding the list files (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Raw text to extract from [default: input.txt]
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Strings stripped before tokenization [default: special-chars.txt]
    #[arg(long, value_name = "FILE")]
    pub special_chars: Option<PathBuf>,
    /// Words excluded without being known [default: ignored-words.txt]
    #[arg(long, value_name = "FILE")]
    pub ignored_words: Option<PathBuf>,
    /// Words already mastered [default: known-words.txt]
    #[arg(long, value_name = "FILE")]
    pub known_words: Option<PathBuf>,
    /// Where the extracted words go [default: output.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl From<FileArgs> for WorkspaceConfig {
    fn from(args: FileArgs) -> Self {
        WorkspaceConfig {
            dir: args.dir,
            input: args.input,
            special_chars: args.special_chars,
            ignored_words: args.ignored_words,
            known_words: args.known_words,
            output: args.output,
        }
    }
}
