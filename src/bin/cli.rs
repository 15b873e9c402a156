use clap::{Args, Parser, Subcommand};
use scheme_finder::providers::StaticCatalog;
use scheme_finder::{
    CategoryFilter, FinderConfig, PoolOrigin, Profile, RuleScorer, SchemeFinder, ScoredScheme,
    Session, SortBy,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scheme-finder")]
#[command(about = "Match government schemes to a citizen profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank schemes for a profile
    Find {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Rank the bundled catalog without contacting any portal
        #[arg(long)]
        offline: bool,

        /// Fixed jitter seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Category filter (`all`, `scholarship`, `loan`, ...)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Sort by `match` or `amount`
        #[arg(short, long, default_value = "match")]
        sort: String,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Show which scoring rules fired for each scheme
        #[arg(long)]
        explain: bool,

        /// Write the plain-text report to this path
        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },

    /// Print the bundled fallback catalog
    Catalog,
}

#[derive(Args)]
struct ProfileArgs {
    /// student, farmer, businessman, other
    #[arg(long, default_value = "")]
    occupation: String,

    /// Social category: sc, st, obc, general
    #[arg(long, default_value = "")]
    category: String,

    /// male, female, other
    #[arg(long, default_value = "")]
    gender: String,

    /// Poverty line status (`bpl` when below)
    #[arg(long = "bpl", default_value = "")]
    bpl_status: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    age: String,

    #[arg(long, default_value = "")]
    state: String,

    #[arg(long, default_value = "")]
    district: String,

    #[arg(long, default_value = "")]
    income: String,

    #[arg(long, default_value = "")]
    education_level: String,
}

impl From<ProfileArgs> for Profile {
    fn from(args: ProfileArgs) -> Self {
        let mut profile = Profile::new(args.occupation, args.category, args.gender, args.bpl_status)
            .with_name(args.name);
        profile.age = args.age;
        profile.state = args.state;
        profile.district = args.district;
        profile.income = args.income;
        profile.education_level = args.education_level;
        profile
    }
}

fn print_card(index: usize, scored: &ScoredScheme) {
    let scheme = &scored.scheme;
    let source: &str = if scheme.source.is_empty() { "Gov Portal" } else { &scheme.source };

    println!(
        "\n{}. {} ({}% match) [{}]",
        index + 1,
        scheme.name,
        scored.match_score,
        scheme.category.to_uppercase()
    );
    println!("   💰 {}   📅 {}   🌐 {}", scheme.amount, scheme.deadline, source);
    println!("   Eligibility: {}", scheme.eligibility);
    for step in scheme.how_to_apply.lines() {
        println!("     {}", step);
    }
    println!("   Apply: {}", scheme.link);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr keeps --json output clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scheme_finder=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find { profile, offline, seed, filter, sort, json, explain, export } => {
            let filter: CategoryFilter = filter.parse()?;
            let sort: SortBy = sort.parse()?;

            let mut config = FinderConfig::from_env()?;
            config.offline |= offline;
            if seed.is_some() {
                config.jitter_seed = seed;
            }

            let finder = SchemeFinder::from_config(&config)?;
            let session = Session::submit(&finder, profile.into()).await?;
            let schemes = session.view(&filter, sort);

            if json {
                println!("{}", serde_json::to_string_pretty(&schemes)?);
            } else {
                if session.origin() == PoolOrigin::Fallback {
                    println!("⚠️  Portals unavailable, showing the bundled catalog");
                }
                println!("🎯 {} schemes matched (filter: {})", schemes.len(), filter);

                if schemes.is_empty() {
                    println!("\nNo schemes found matching your profile. Try adjusting your filters.");
                }

                let scorer = RuleScorer::new();
                for (i, scored) in schemes.iter().enumerate() {
                    print_card(i, scored);
                    if explain {
                        let rules = scorer.matched_rules(session.profile(), &scored.scheme);
                        if rules.is_empty() {
                            println!("   Rules: none");
                        } else {
                            println!("   Rules: {}", rules.join(", "));
                        }
                    }
                }
            }

            if let Some(path) = export {
                std::fs::write(&path, session.report())?;
                eprintln!("📄 Report written to {}", path.display());
            }
        }

        Commands::Catalog => {
            let catalog = StaticCatalog::bundled()?;

            println!("📚 Bundled catalog ({} schemes):", catalog.len());
            for (i, scheme) in catalog.schemes().iter().enumerate() {
                println!("   {}. {} [{}] {}", i + 1, scheme.name, scheme.category, scheme.amount);
            }
        }
    }

    Ok(())
}
