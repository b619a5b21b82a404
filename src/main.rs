use clap::{Parser, Subcommand};
use pressroom::store::ContentStore;
use pressroom::{archive, assets, config, filter, output, related, resolve, store, tags};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pressroom")]
#[command(about = "Content normalization and derived-view engine")]
#[command(long_about = "\
Content normalization and derived-view engine

Feed it a JSON export of content-store records and it produces the
canonical domain model plus the derived views listing pages consume.

Store document layout (either shape):

  [ { ...post }, { ...post } ]

  {
    \"posts\":      [ ... ],
    \"authors\":    [ ... ],
    \"categories\": [ ... ]
  }

Records are partial by contract: any field may be missing, wrong-typed, or
union-shaped (slug as string or {current} wrapper, image as URL or opaque
asset ref). Resolution never fails — missing data degrades to documented
fallbacks and malformed asset refs degrade to the configured default image.

Run 'pressroom gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Store document (JSON) to read records from
    #[arg(long, default_value = "content.json", global = true)]
    records: PathBuf,

    /// Engine configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve all post records into canonical posts
    Resolve,
    /// Resolve all category records into canonical categories
    Categories,
    /// Resolve one author record by id
    Author {
        /// Author record id
        id: String,
    },
    /// Group posts into month/year archive buckets
    Archive,
    /// List the deduplicated tag universe with post counts
    Tags,
    /// Select related posts for one post by slug
    Related {
        /// Slug of the subject post
        slug: String,
        /// Override the configured related-posts limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Filter posts by category and/or search text
    Filter {
        /// Category slug, or "all"
        #[arg(long, default_value = filter::ALL_CATEGORIES)]
        category: String,
        /// Case-insensitive search text over title and excerpt
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let engine_config = config::load_config(&cli.config)?;
    let builder = assets::CdnUrlBuilder::new(engine_config.assets.cdn_base_url.clone());
    let resolver = resolve::Resolver::new(&engine_config, builder);
    let store = store::JsonStore::from_path(&cli.records)?;

    match cli.command {
        Command::Resolve => {
            let posts = resolver.resolve_posts(&store.fetch_all_posts()?);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                output::print_post_list(&posts);
            }
        }
        Command::Categories => {
            let categories: Vec<_> = store
                .fetch_all_categories()?
                .iter()
                .map(|raw| resolver.resolve_category(raw))
                .collect();
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        Command::Author { id } => match store.fetch_author_by_id(&id)? {
            Some(raw) => {
                let author = resolver.resolve_author(&raw);
                println!("{}", serde_json::to_string_pretty(&author)?);
            }
            None => {
                eprintln!("No author record with id '{id}'");
                std::process::exit(1);
            }
        },
        Command::Archive => {
            let posts = resolver.resolve_posts(&store.fetch_all_posts()?);
            let buckets = archive::group_by_month(&posts);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else {
                output::print_archive(&buckets);
            }
        }
        Command::Tags => {
            let posts = resolver.resolve_posts(&store.fetch_all_posts()?);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tags::all_tags(&posts))?);
            } else {
                output::print_tag_list(&posts);
            }
        }
        Command::Related { slug, limit } => {
            let posts = resolver.resolve_posts(&store.fetch_all_posts()?);
            let Some(subject) = posts.iter().find(|p| p.slug == slug) else {
                eprintln!("No post with slug '{slug}'");
                std::process::exit(1);
            };
            let limit = limit.unwrap_or(engine_config.views.related_limit);
            let picks = related::select_related(subject, &posts, limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&picks)?);
            } else {
                output::print_related(subject, &picks);
            }
        }
        Command::Filter { category, query } => {
            let posts = resolver.resolve_posts(&store.fetch_all_posts()?);
            let matches = filter::filter_posts(&posts, &category, &query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                output::print_post_list(&matches);
            }
        }
        Command::GenConfig => unreachable!("handled before store loading"),
    }

    Ok(())
}
