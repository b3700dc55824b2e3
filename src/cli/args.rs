use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "uglify",
    about = "Composable ESLint flat-config generator",
    long_about = "Assembles ESLint flat-config files from named presets: create a config, \
                  add targets to it, or remove them again along with their override blocks",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Config file to operate on (default: eslint.config.js)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Machine-readable output format ("json")
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new config file with the given targets
    #[command(alias = "new")]
    Init {
        /// Targets to activate (see `uglify list`)
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },

    /// Add targets to an existing config file
    Add {
        /// Targets to add
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },

    /// Remove targets and their override blocks from the config file
    Remove {
        /// Targets to remove
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },

    /// List known targets and their default file patterns
    List {
        /// Only environment presets
        #[arg(long)]
        environments: bool,

        /// Only lint rulesets
        #[arg(long)]
        rulesets: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}
