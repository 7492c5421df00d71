// CLI argument parsing and definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tracadm")]
#[command(about = "Project lifecycle administration for the TurnKey Trac appliance")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom settings file (default: ~/.tracadm/settings.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host entry from the settings file to operate on (default: prod)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Initialize a project on the Trac appliance
    Setup {
        /// Project name (letters, digits, internal hyphens/periods)
        project_name: String,
        /// Version-control backend: git, svn, bzr or hg
        #[arg(default_value = "git")]
        project_type: String,
    },
    /// Remove a project from the Trac appliance
    Remove {
        /// Project name
        project_name: String,
        /// Version-control backend: git, svn, bzr or hg
        #[arg(default_value = "git")]
        project_type: String,
        /// Answer yes to all confirmation prompts
        #[arg(long)]
        yes: bool,
    },
    /// Developer helper: user and group management
    #[command(hide = true)]
    Users {
        #[command(subcommand)]
        command: UsersSubcommand,
    },
    /// Developer helper: re-run the config-file updates for a project
    #[command(hide = true)]
    Files {
        #[command(subcommand)]
        command: FilesSubcommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum UsersSubcommand {
    /// Delete the project's OS user and group (failures are warnings)
    Remove {
        /// User to delete
        username: String,
        /// Project whose group should be deleted
        project_name: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FilesSubcommand {
    /// Apply the hook-config and trac.ini edits for a project
    Update {
        /// Project name
        project_name: String,
        /// Version-control backend: git, svn, bzr or hg
        #[arg(default_value = "git")]
        project_type: String,
    },
}
