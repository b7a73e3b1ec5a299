mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    catalog::CatalogSubcommand, coach::CoachSubcommand, config::ConfigSubcommand,
    member::MemberSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "strengths",
    about = "Strength Manager: record CliftonStrengths for you and your team and see how the team fits together",
    version,
    propagate_version = true
)]
struct Cli {
    /// Team store root (default: auto-detect from .strengths/ or .git/)
    #[arg(long, global = true, env = "STRENGTHS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .strengths/ team store in the current directory
    Init {
        /// Team name written to config.yaml
        #[arg(long, default_value = "My Team")]
        team_name: String,
    },

    /// Record your own top 5 strengths
    Onboard {
        /// Your name
        #[arg(long)]
        name: String,
        /// Exactly five strength names (space or comma separated)
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        strengths: Vec<String>,
    },

    /// Show your profile
    Profile,

    /// Manage team members
    Member {
        #[command(subcommand)]
        subcommand: MemberSubcommand,
    },

    /// Browse the strengths encyclopedia
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Check a top-5 selection without saving it
    Validate {
        #[arg(num_args = 0.., value_delimiter = ',')]
        strengths: Vec<String>,
    },

    /// Order strengths by domain, then alphabetically
    Sort {
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        strengths: Vec<String>,
    },

    /// Team dashboard: domain balance, top strengths, who holds what
    Team,

    /// Under-represented domains and strengths nobody on the team has
    Gaps,

    /// Compare two people ("you" for yourself, or a member name / id)
    Compare {
        first: String,
        second: String,
        /// Print the collaboration-insight prompt for the coaching assistant
        #[arg(long)]
        prompt: bool,
    },

    /// Coaching assistant request payloads
    Coach {
        #[command(subcommand)]
        subcommand: CoachSubcommand,
    },

    /// Inspect and validate the team configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved team store root");

    let result = match cli.command {
        Commands::Init { team_name } => cmd::init::run(&root, &team_name),
        Commands::Onboard { name, strengths } => {
            cmd::profile::onboard(&root, &name, strengths, cli.json)
        }
        Commands::Profile => cmd::profile::show(&root, cli.json),
        Commands::Member { subcommand } => cmd::member::run(&root, subcommand, cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(subcommand, cli.json),
        Commands::Validate { strengths } => cmd::selection::validate(strengths, cli.json),
        Commands::Sort { strengths } => cmd::selection::sort(strengths, cli.json),
        Commands::Team => cmd::team::run(&root, cli.json),
        Commands::Gaps => cmd::gaps::run(&root, cli.json),
        Commands::Compare {
            first,
            second,
            prompt,
        } => cmd::compare::run(&root, &first, &second, prompt, cli.json),
        Commands::Coach { subcommand } => cmd::coach::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
