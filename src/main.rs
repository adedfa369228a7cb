use clap::Parser;
use gityup::config::{Config, Verbosity};
use gityup::{args, deps, output, repo};

/// Pull every clean git repository found directly under ROOT.
#[derive(Debug, Parser)]
#[command(name = "gityup", version, about)]
struct Cli {
    /// Directory whose immediate children are scanned for git repositories
    root: String,

    /// Suppress informational output
    #[arg(short, long)]
    quiet: bool,

    /// Echo every git command as it runs
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config {
        verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
    };

    let root = args::parse_root(&cli.root)?;
    deps::check_dependencies()?;

    output::print_working_dir(&root, &config);
    repo::update_projects(&root, &config)
}
