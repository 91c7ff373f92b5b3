//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::engine::ArgValueCompleter;

use crate::cli::complete::{complete_packages, complete_tags};

/// Tagga pacchetti APT installati
#[derive(Parser, Debug)]
#[command(name = "pkgtag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Tag database file (default: ~/.local/share/pkg-tags.json)
    #[arg(long = "db", global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package and tag it
    Install {
        /// Package to install
        package: String,
        /// Tags to assign
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Tag an installed package
    Tag {
        /// Installed package
        #[arg(add = ArgValueCompleter::new(complete_packages))]
        package: String,
        /// Tags to assign
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// List packages carrying a tag
    List {
        /// Tag to look for
        #[arg(add = ArgValueCompleter::new(complete_tags))]
        tag: String,
    },

    /// Show the tags of a package
    Tags {
        /// Tagged package
        #[arg(add = ArgValueCompleter::new(complete_packages))]
        package: String,
    },

    /// Remove a tag from a package
    Untag {
        /// Tagged package
        #[arg(add = ArgValueCompleter::new(complete_packages))]
        package: String,
        /// Tag to remove
        #[arg(add = ArgValueCompleter::new(complete_tags))]
        tag: String,
    },

    /// Forget a package and all its tags
    Remove {
        /// Tagged package
        #[arg(add = ArgValueCompleter::new(complete_packages))]
        package: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config and database paths
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
