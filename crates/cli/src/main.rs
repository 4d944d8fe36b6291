mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use varopts_core::config::loader::ConfigLoader;
use varopts_core::config::types::{OutputFormat, ResolvedConfig};

#[derive(Debug, Parser)]
#[command(name = "varopts", version, about = "Edit per-variable import options of tabular data")]
struct Cli {
    /// Path to config.toml (default: ~/.config/varopts/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Set options on selected variables (setvaropts)
    Set(SetArgs),

    /// Rename selected variables
    Rename(RenameArgs),

    /// Print the variables of an options document
    Show(ShowArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Yaml,
    Json,
    Table,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
        }
    }
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Options document (.yaml, .yml, .toml or .json)
    pub file: PathBuf,

    /// [SELECTION] NAME VALUE [NAME VALUE]...; each parsed as a YAML value,
    /// e.g. `A`, `[A, C]`, `2`, `[1, 3]`, `[true, false]`, `:`, `.nan`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Write the result back to FILE instead of printing it
    #[arg(long, short = 'i')]
    pub in_place: bool,

    /// Output format (default from config, else yaml)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Options document (.yaml, .yml, .toml or .json)
    pub file: PathBuf,

    /// Variables to rename, parsed as a YAML value (e.g. `B`, `[1, 3]`, `:`)
    pub selection: String,

    /// New names, one per selected variable
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Write the result back to FILE instead of printing it
    #[arg(long, short = 'i')]
    pub in_place: bool,

    /// Output format (default from config, else yaml)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Options document (.yaml, .yml, .toml or .json)
    pub file: PathBuf,

    /// Output format (default: table)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    if let Commands::Doctor = cli.command {
        cmd::doctor::run(config);
        return;
    }

    let rc = load_config(config);
    let _guard = logging::init(&rc);

    match cli.command {
        Commands::Set(args) => cmd::set::run(&rc, &args),
        Commands::Rename(args) => cmd::rename::run(&rc, &args),
        Commands::Show(args) => cmd::show::run(&args),
        Commands::Doctor => {}
    }
}

fn load_config(config: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}
