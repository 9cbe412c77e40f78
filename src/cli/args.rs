//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// gov - Go virtual environment tool
#[derive(Parser, Debug)]
#[command(name = "gov")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Run as if gov was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Go project
    #[command(
        name = "init",
        long_about = "Initialize a new Go project in the current directory.\n\n\
            Runs `git init`, then `go mod init <module>` unless a go.mod already \
            exists. The module name comes from the `module_name` config key \
            (default: project).",
        after_help = "\
EXAMPLES:
    gov init
    gov config set module_name example.com/hello && gov init"
    )]
    Init,

    /// Build the project
    #[command(name = "build")]
    Build,

    /// Create a new virtual environment Go project
    #[command(
        name = "create",
        long_about = "Create a new virtual environment Go project.\n\n\
            Creates the directory <NAME> (with parents), then runs the same steps \
            as `gov init` inside it.",
        after_help = "\
EXAMPLES:
    gov create hello
    gov create services/api"
    )]
    Create {
        /// Directory name for the new project
        name: PathBuf,
    },

    /// Manage dependencies (go mod tidy)
    #[command(name = "deps")]
    Deps,

    /// Activate virtual environment
    #[command(
        name = "activate",
        long_about = "Activate the virtual environment.\n\n\
            Points GOROOT at ~/.gov/go and puts ~/.gov/go/bin first on PATH. \
            A program cannot change its parent shell's environment, so the change \
            only applies to gov itself unless --print is used with eval.",
        after_help = "\
EXAMPLES:
    eval \"$(gov activate --print)\""
    )]
    Activate {
        /// Print shell statements applying the change
        #[arg(long)]
        print: bool,
    },

    /// Deactivate virtual environment
    #[command(
        name = "deactivate",
        after_help = "\
EXAMPLES:
    eval \"$(gov deactivate --print)\""
    )]
    Deactivate {
        /// Print shell statements applying the change
        #[arg(long)]
        print: bool,
    },

    /// Use specified Go version in virtual environment
    #[command(name = "use")]
    Use {
        /// Go version, e.g. 1.22.3 or go1.22.3
        version: String,
    },

    /// Save Go binary to .gov directory
    #[command(
        name = "save-bin",
        long_about = "Save the Go binary to the .gov directory.\n\n\
            Copies the `go_binary` config value (default: /usr/local/go/bin/go) \
            to ~/.gov/go."
    )]
    SaveBin,

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (module_name, go_binary)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (module_name, go_binary)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Shell type for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
