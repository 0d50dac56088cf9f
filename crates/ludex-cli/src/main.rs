use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

mod output;

use ludex_core::{CatalogSession, CatalogSource, SessionOptions, load_detail};
use ludex_rawg::RawgClient;
use output::ColorMode;

/// ludex — query the RAWG game catalog from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// RAWG API key (falls back to RAWG_API_KEY, then the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List top-rated games, optionally narrowed by filters
    Top {
        /// Number of catalog pages to accumulate
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Only games released in this year
        #[arg(long)]
        year: Option<i32>,

        /// Only games with this genre label
        #[arg(long)]
        genre: Option<String>,

        /// Only games on this platform
        #[arg(long)]
        platform: Option<String>,

        /// Only games carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Search the catalog by free text
    Search {
        /// The query string
        query: String,
    },

    /// Show the full record for one game
    Show {
        /// RAWG game id
        id: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let color = ColorMode(!cli.no_color);

    // Resolve the key: CLI flag > env var > config file
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("RAWG_API_KEY").ok())
        .or_else(|| {
            ludex_core::config_file::load_config()
                .api_key()
                .map(String::from)
        });
    let Some(api_key) = api_key else {
        anyhow::bail!(
            "no RAWG API key configured; pass --api-key, set RAWG_API_KEY, \
             or add it to the config file"
        );
    };
    let client = RawgClient::new(api_key);

    match cli.command {
        Command::Top {
            pages,
            year,
            genre,
            platform,
            tag,
        } => top(&client, pages, year, genre, platform, tag, color).await,
        Command::Search { query } => search(&client, &query, color).await,
        Command::Show { id } => show(&client, id, color).await,
    }
}

async fn top(
    client: &RawgClient,
    pages: u32,
    year: Option<i32>,
    genre: Option<String>,
    platform: Option<String>,
    tag: Option<String>,
    color: ColorMode,
) -> anyhow::Result<()> {
    let mut session = CatalogSession::new(SessionOptions::default());
    session.set_year(year);
    session.set_genre(genre);
    session.set_platform(platform);
    session.set_tag(tag);

    let bar = ProgressBar::new(pages as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} fetching page {pos}/{len}")
            .expect("static template"),
    );

    for _ in 0..pages {
        // The session stops handing out pages once the stream is exhausted.
        let Some(page) = session.begin_page_fetch() else {
            break;
        };
        let outcome = CatalogSource::list_page(client, page).await;
        session.on_page_loaded(page, outcome);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    output::print_games(&mut w, &session.visible(), color)?;
    if session.no_results() {
        output::print_note(&mut w, "No games match the selected filters.", color)?;
    }
    if !session.has_more() {
        output::print_note(&mut w, "No more games available.", color)?;
    }
    Ok(())
}

async fn search(client: &RawgClient, query: &str, color: ColorMode) -> anyhow::Result<()> {
    let results = CatalogSource::search(client, query)
        .await
        .map_err(|e| anyhow::anyhow!("search failed: {e}"))?;

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    let refs: Vec<&ludex_rawg::GameSummary> = results.iter().collect();
    output::print_games(&mut w, &refs, color)?;
    if refs.is_empty() {
        output::print_note(&mut w, "No games found.", color)?;
    }
    Ok(())
}

async fn show(client: &RawgClient, id: u64, color: ColorMode) -> anyhow::Result<()> {
    let bundle = load_detail(client, id).await;

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    if !bundle.is_found() {
        output::print_note(&mut w, "Game details not found.", color)?;
        return Ok(());
    }
    output::print_detail(&mut w, &bundle, color)?;
    Ok(())
}
