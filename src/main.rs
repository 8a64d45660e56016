use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docset::config::{self, ConfigFile};
use docset::docset::summarize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Build Dash docsets from generated Javadoc",
    long_about = None
)]
struct Cli {
    /// Print the full cause chain when a build fails
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a docset from a Javadoc directory
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Show the entries of an existing docset's search index
    Inspect {
        /// Path to the docset directory
        docset: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// File name of the docset to create (e.g. Guava.docset)
    #[arg(short, long)]
    name: Option<String>,

    /// Root directory of the Javadoc
    #[arg(short, long)]
    javadoc: Option<PathBuf>,

    /// Name shown in Dash (defaults to --name)
    #[arg(long)]
    display_name: Option<String>,

    /// Search keyword for the docset (defaults to --name)
    #[arg(short, long)]
    keyword: Option<String>,

    /// 32x32 PNG to embed in the docset
    #[arg(short, long)]
    icon: Option<PathBuf>,

    /// Directory to create the docset in (defaults to the current directory)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Drop repeated (name, type, path) entries from the search index
    #[arg(long)]
    dedupe: bool,

    /// TOML file with build settings; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    fn into_settings(self) -> (Option<PathBuf>, ConfigFile) {
        let settings = ConfigFile {
            name: self.name,
            javadoc: self.javadoc,
            display_name: self.display_name,
            keyword: self.keyword,
            icon: self.icon,
            output: self.out,
            dedupe: self.dedupe.then_some(true),
        };
        (self.config, settings)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    config::set_verbose(cli.verbose);
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build { args } => {
            let (config_path, overrides) = args.into_settings();
            let base = match config_path {
                Some(path) => ConfigFile::load(&path)?,
                None => ConfigFile::default(),
            };
            let config = base.merge(overrides).resolve()?;

            if docset::builder::run(config).is_err() {
                std::process::exit(1);
            }
        }
        Commands::Inspect { docset: path } => {
            let summary = summarize(&path)
                .with_context(|| format!("Failed to inspect docset {}", path.display()))?;

            println!("📚 {}", path.display());
            println!("  • Entries: {}", summary.total);
            for (kind, count) in summary.by_type {
                println!("  • {}: {}", kind, count);
            }
        }
    }

    Ok(())
}
