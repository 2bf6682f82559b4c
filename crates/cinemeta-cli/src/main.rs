//! cinemeta - TMDB metadata lookup CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, TmdbConfig, resolve_config_path};
use cinemeta_api::types::{
    Certifications, GenreList, MediaSummary, MovieSummary, Paged, SearchMovieParams,
    SearchTvParams, TimeWindow, TvSummary,
};
use cinemeta_api::{LocalTmdbApi, QueryParam, TmdbClient, fetch_series_with_seasons};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Manage the config file.
    Config(ConfigCommand),
    /// Search TMDB.
    Search(SearchCommand),
    /// Movie lookups.
    Movie(MovieCommand),
    /// TV series lookups.
    Tv(TvCommand),
    /// Discover titles with arbitrary filters.
    Discover(DiscoverCommand),
    /// Trending titles and people.
    Trending(TrendingArgs),
    /// Official genre list.
    Genres(KindArgs),
    /// Content certifications per country.
    Certifications(CertificationsArgs),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Create or update the config file.
    Init(ConfigInitArgs),
    /// Print the config path and settings (credentials redacted).
    Show,
}

/// Arguments for `config init`.
#[derive(clap::Args)]
struct ConfigInitArgs {
    /// TMDB v3 API key.
    #[arg(long, conflicts_with = "bearer_token")]
    api_key: Option<String>,

    /// TMDB v4 read access token.
    #[arg(long)]
    bearer_token: Option<String>,

    /// Default response language.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchCommand {
    /// Search subcommand to run.
    #[command(subcommand)]
    command: SearchSubcommands,
}

/// Available search subcommands.
#[derive(Subcommand)]
enum SearchSubcommands {
    /// Search TV series.
    Tv(SearchArgs),
    /// Search movies.
    Movie(SearchArgs),
    /// Search movies, series and people at once.
    Multi(SearchArgs),
}

/// Arguments shared by the search subcommands.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query.
    #[arg(long, required = true)]
    query: String,

    /// Response language (defaults to config, then en-US).
    #[arg(long)]
    language: Option<String>,

    /// Release / first air year filter.
    #[arg(long)]
    year: Option<u32>,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Subcommand)]
enum MovieSubcommands {
    /// Movie details.
    Details(DetailsArgs),
}

/// Arguments for a details lookup by TMDB ID.
#[derive(clap::Args)]
struct DetailsArgs {
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,

    /// Response language.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvCommand {
    /// TV subcommand to run.
    #[command(subcommand)]
    command: TvSubcommands,
}

/// Available TV subcommands.
#[derive(Subcommand)]
enum TvSubcommands {
    /// Series details.
    Details(TvDetailsArgs),
    /// Season details with episode list.
    Season(TvSeasonArgs),
}

/// Arguments for `tv details`.
#[derive(clap::Args)]
struct TvDetailsArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,

    /// Response language.
    #[arg(long)]
    language: Option<String>,

    /// Also fetch every season's episode list.
    #[arg(long)]
    with_seasons: bool,
}

/// Arguments for `tv season`.
#[derive(clap::Args)]
struct TvSeasonArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,

    /// Season number.
    #[arg(long, required = true)]
    season: u32,

    /// Response language.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
struct DiscoverCommand {
    /// What to discover.
    #[arg(value_enum)]
    kind: MediaKind,

    /// Single-valued filter as `key=value` (repeatable).
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_single_param)]
    params: Vec<QueryParam>,

    /// Multi-valued filter as `key=v1,v2` (repeatable).
    #[arg(long = "multi", value_name = "KEY=V1,V2", value_parser = parse_multi_param)]
    multi: Vec<QueryParam>,
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Media type.
    #[arg(long, value_enum, default_value_t = TrendingMedia::All)]
    media: TrendingMedia,

    /// Aggregation window.
    #[arg(long, value_enum, default_value_t = WindowArg::Day)]
    window: WindowArg,

    /// Response language.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for `genres`.
#[derive(clap::Args)]
struct KindArgs {
    /// Movie or TV.
    #[arg(value_enum)]
    kind: MediaKind,

    /// Response language.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for `certifications`.
#[derive(clap::Args)]
struct CertificationsArgs {
    /// Movie or TV.
    #[arg(value_enum)]
    kind: MediaKind,
}

/// Movie or TV selector.
#[derive(Clone, Copy, ValueEnum)]
enum MediaKind {
    /// Movies.
    Movie,
    /// TV series.
    Tv,
}

/// Trending media selector.
#[derive(Clone, Copy, ValueEnum)]
enum TrendingMedia {
    /// Movies, series and people.
    All,
    /// Movies.
    Movie,
    /// TV series.
    Tv,
    /// People.
    Person,
}

/// Trending window selector.
#[derive(Clone, Copy, ValueEnum)]
enum WindowArg {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Day => Self::Day,
            WindowArg::Week => Self::Week,
        }
    }
}

/// Splits `key=value` at the first `=`.
fn split_key_value(s: &str) -> Result<(&str, &str), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key, value))
}

/// Parses `--param key=value`.
fn parse_single_param(s: &str) -> Result<QueryParam, String> {
    let (key, value) = split_key_value(s)?;
    Ok(QueryParam::single(key, value))
}

/// Parses `--multi key=v1,v2`.
fn parse_multi_param(s: &str) -> Result<QueryParam, String> {
    let (key, values) = split_key_value(s)?;
    Ok(QueryParam::multi(key, values.split(',').filter(|v| !v.is_empty())))
}

/// Loads the config file selected by `--dir`.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir)?;
    AppConfig::load(&config_path)
}

/// Builds a `TmdbClient` from env credentials and the config file.
///
/// # Errors
///
/// Returns an error if no credential is available or the client fails to build.
fn build_tmdb_client(tmdb: &TmdbConfig) -> Result<TmdbClient> {
    let auth = tmdb.resolve_auth(
        std::env::var("TMDB_API_TOKEN").ok(),
        std::env::var("TMDB_API_KEY").ok(),
    )?;
    TmdbClient::builder(auth)
        .options(tmdb.client_options()?)
        .build()
        .context("failed to build TMDB client")
}

/// Picks the explicit language, then the configured one.
fn language<'a>(explicit: Option<&'a str>, tmdb: &'a TmdbConfig) -> &'a str {
    explicit.unwrap_or_else(|| tmdb.language_or_default())
}

/// Runs the `config init` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be read or written.
fn run_config_init(args: &ConfigInitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir)?;
    let mut config = AppConfig::load(&config_path)?;

    if let Some(ref key) = args.api_key {
        config.tmdb.api_key = Some(key.clone());
        config.tmdb.bearer_token = None;
    }
    if let Some(ref token) = args.bearer_token {
        config.tmdb.bearer_token = Some(token.clone());
        config.tmdb.api_key = None;
    }
    if let Some(ref language) = args.language {
        config.tmdb.language = Some(language.clone());
    }

    config.save(&config_path)?;
    tracing::info!("Config saved to {}", config_path.display());
    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be read or serialized.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir)?;
    let config = AppConfig::load(&config_path)?;

    tracing::info!("Config file: {}", config_path.display());
    let rendered =
        toml::to_string_pretty(&config.redacted()).context("failed to serialize config")?;
    for line in rendered.lines() {
        tracing::info!("{line}");
    }
    Ok(())
}

/// Prints a page of series.
fn print_tv_results(response: &Paged<TvSummary>) {
    tracing::info!(
        "Total results: {} (page {}/{})",
        response.total_results,
        response.page,
        response.total_pages
    );
    tracing::info!("ID\tName\t\t\tOrigLang\tCountry\t\tFirstAirDate");
    for result in &response.results {
        tracing::info!(
            "{}\t\t{}\t{}\t\t{}\t\t{}",
            result.id,
            result.name,
            result.original_language,
            result.origin_country.join(","),
            result.first_air_date.as_deref().unwrap_or("-"),
        );
    }
}

/// Prints a page of movies.
fn print_movie_results(response: &Paged<MovieSummary>) {
    tracing::info!(
        "Total results: {} (page {}/{})",
        response.total_results,
        response.page,
        response.total_pages
    );
    tracing::info!("ID\tTitle\t\t\tOrigLang\tReleaseDate");
    for result in &response.results {
        tracing::info!(
            "{}\t\t{}\t{}\t\t{}",
            result.id,
            result.title,
            result.original_language,
            result.release_date.as_deref().unwrap_or("-"),
        );
    }
}

/// Prints a page of mixed media.
fn print_media_results(response: &Paged<MediaSummary>) {
    tracing::info!(
        "Total results: {} (page {}/{})",
        response.total_results,
        response.page,
        response.total_pages
    );
    tracing::info!("Type\tID\tName");
    for result in &response.results {
        let media_type = match result {
            MediaSummary::Movie(_) => "movie",
            MediaSummary::Tv(_) => "tv",
            MediaSummary::Person(_) => "person",
            MediaSummary::Other => "other",
        };
        tracing::info!(
            "{}\t{}\t{}",
            media_type,
            result.id().map_or_else(|| String::from("-"), |id| id.to_string()),
            result.display_name(),
        );
    }
}

/// Runs the `search` subcommands.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(command: SearchSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    match command {
        SearchSubcommands::Tv(args) => {
            let mut params = SearchTvParams::new(&args.query)
                .language(language(args.language.as_deref(), &config.tmdb))
                .page(args.page);
            if let Some(year) = args.year {
                params = params.first_air_date_year(year);
            }
            let response = client
                .search_tv(&params)
                .await
                .context("TMDB search/tv request failed")?;
            print_tv_results(&response);
        }
        SearchSubcommands::Movie(args) => {
            let mut params = SearchMovieParams::new(&args.query)
                .language(language(args.language.as_deref(), &config.tmdb))
                .page(args.page);
            if let Some(year) = args.year {
                params = params.year(year);
            }
            let response = client
                .search_movie(&params)
                .await
                .context("TMDB search/movie request failed")?;
            print_movie_results(&response);
        }
        SearchSubcommands::Multi(args) => {
            let mut params = vec![
                QueryParam::single("query", &args.query),
                QueryParam::single(
                    "language",
                    language(args.language.as_deref(), &config.tmdb),
                ),
                QueryParam::single("page", args.page),
            ];
            if let Some(year) = args.year {
                params.push(QueryParam::single("year", year));
            }
            let response = client
                .search()
                .multi(&params)
                .await
                .context("TMDB search/multi request failed")?;
            print_media_results(&response);
        }
    }

    Ok(())
}

/// Runs the `movie details` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_details(args: &DetailsArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let details = client
        .movie_details(args.id, language(args.language.as_deref(), &config.tmdb))
        .await
        .context("TMDB movie details request failed")?;

    tracing::info!("ID: {}", details.id);
    tracing::info!("Title: {}", details.title);
    tracing::info!("Original Title: {}", details.original_title);
    tracing::info!("IMDb: {}", details.imdb_id.as_deref().unwrap_or("-"));
    tracing::info!(
        "Release Date: {}",
        details.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        details
            .runtime
            .map_or_else(|| String::from("-"), |m| format!("{m} min"))
    );
    tracing::info!(
        "Genres: {}",
        details
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if let Some(ref collection) = details.belongs_to_collection {
        tracing::info!("Collection: {} ({})", collection.name, collection.id);
    }
    tracing::info!("Overview: {}", details.overview.as_deref().unwrap_or("-"));

    Ok(())
}

/// Runs the `tv details` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or any API request fails.
#[instrument(skip_all)]
async fn run_tv_details(args: &TvDetailsArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;
    let lang = language(args.language.as_deref(), &config.tmdb);

    let (details, seasons) = if args.with_seasons {
        fetch_series_with_seasons(&client, args.id, lang)
            .await
            .context("TMDB tv details with seasons request failed")?
    } else {
        let details = client
            .tv_details(args.id, lang)
            .await
            .context("TMDB tv details request failed")?;
        (details, Vec::new())
    };

    tracing::info!("ID: {}", details.id);
    tracing::info!("Name: {}", details.name);
    tracing::info!("Original Name: {}", details.original_name);
    tracing::info!(
        "First Air Date: {}",
        details.first_air_date.as_deref().unwrap_or("-")
    );
    tracing::info!("Status: {}", details.status.as_deref().unwrap_or("-"));
    tracing::info!("Seasons: {}", details.number_of_seasons);
    tracing::info!("Episodes: {}", details.number_of_episodes);
    tracing::info!("---");
    tracing::info!("Season\tEpisodes\tAirDate\t\tName");
    for season in &details.seasons {
        tracing::info!(
            "{}\t{}\t\t{}\t{}",
            season.season_number,
            season.episode_count,
            season.air_date.as_deref().unwrap_or("-"),
            season.name,
        );
    }

    for season in &seasons {
        tracing::info!("--- Season {} ---", season.season_number);
        for entry in &season.episodes {
            tracing::info!(
                "  E{:02}\t{}\t{}",
                entry.episode.episode_number,
                entry.episode.air_date.as_deref().unwrap_or("-"),
                entry.episode.name,
            );
        }
    }

    Ok(())
}

/// Runs the `tv season` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv_season(args: &TvSeasonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let season = client
        .tv_season(
            args.id,
            args.season,
            language(args.language.as_deref(), &config.tmdb),
        )
        .await
        .context("TMDB tv season request failed")?;

    tracing::info!("Season: {}", season.season_number);
    tracing::info!("Name: {}", season.name.as_deref().unwrap_or("-"));
    tracing::info!("Air Date: {}", season.air_date.as_deref().unwrap_or("-"));
    tracing::info!("Episodes:");
    tracing::info!("  No.\tAirDate\t\tRuntime\tName");
    for entry in &season.episodes {
        tracing::info!(
            "  {}\t{}\t{}\t{}",
            entry.episode.episode_number,
            entry.episode.air_date.as_deref().unwrap_or("-"),
            entry
                .episode
                .runtime
                .map_or_else(|| String::from("-"), |r| r.to_string()),
            entry.episode.name,
        );
    }

    Ok(())
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_discover(args: DiscoverCommand, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let mut params = args.params;
    params.extend(args.multi);

    match args.kind {
        MediaKind::Movie => {
            let response = client
                .discover()
                .movie(&params)
                .await
                .context("TMDB discover/movie request failed")?;
            print_movie_results(&response);
        }
        MediaKind::Tv => {
            let response = client
                .discover()
                .tv(&params)
                .await
                .context("TMDB discover/tv request failed")?;
            print_tv_results(&response);
        }
    }

    Ok(())
}

/// Runs the `trending` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_trending(args: &TrendingArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;
    let window = TimeWindow::from(args.window);
    let params = [QueryParam::single(
        "language",
        language(args.language.as_deref(), &config.tmdb),
    )];
    let trending = client.trending();

    match args.media {
        TrendingMedia::All => {
            let response = trending
                .all(window, &params)
                .await
                .context("TMDB trending request failed")?;
            print_media_results(&response);
        }
        TrendingMedia::Movie => {
            let response = trending
                .movies(window, &params)
                .await
                .context("TMDB trending request failed")?;
            print_movie_results(&response);
        }
        TrendingMedia::Tv => {
            let response = trending
                .tv(window, &params)
                .await
                .context("TMDB trending request failed")?;
            print_tv_results(&response);
        }
        TrendingMedia::Person => {
            let response = trending
                .people(window, &params)
                .await
                .context("TMDB trending request failed")?;
            tracing::info!("Total results: {}", response.total_results);
            tracing::info!("ID\tName\t\t\tDepartment");
            for person in &response.results {
                tracing::info!(
                    "{}\t{}\t\t{}",
                    person.id,
                    person.name,
                    person.known_for_department.as_deref().unwrap_or("-"),
                );
            }
        }
    }

    Ok(())
}

/// Prints a genre list.
fn print_genres(list: &GenreList) {
    tracing::info!("ID\tName");
    for genre in &list.genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genres(args: &KindArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;
    let params = [QueryParam::single(
        "language",
        language(args.language.as_deref(), &config.tmdb),
    )];

    let list = match args.kind {
        MediaKind::Movie => client.genres().movie_list(&params).await,
        MediaKind::Tv => client.genres().tv_list(&params).await,
    }
    .context("TMDB genre list request failed")?;

    print_genres(&list);
    Ok(())
}

/// Prints certifications grouped by country.
fn print_certifications(certifications: &Certifications) {
    for (country, entries) in &certifications.certifications {
        let labels: Vec<&str> = entries.iter().map(|c| c.certification.as_str()).collect();
        tracing::info!("{}\t{}", country, labels.join(", "));
    }
}

/// Runs the `certifications` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_certifications(args: &CertificationsArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let certifications = match args.kind {
        MediaKind::Movie => client.certifications().movie().await,
        MediaKind::Tv => client.certifications().tv().await,
    }
    .context("TMDB certification list request failed")?;

    print_certifications(&certifications);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Init(args) => run_config_init(&args, dir),
            ConfigSubcommands::Show => run_config_show(dir),
        },
        Commands::Search(cmd) => run_search(cmd.command, dir).await,
        Commands::Movie(cmd) => match cmd.command {
            MovieSubcommands::Details(args) => run_movie_details(&args, dir).await,
        },
        Commands::Tv(cmd) => match cmd.command {
            TvSubcommands::Details(args) => run_tv_details(&args, dir).await,
            TvSubcommands::Season(args) => run_tv_season(&args, dir).await,
        },
        Commands::Discover(args) => run_discover(args, dir).await,
        Commands::Trending(args) => run_trending(&args, dir).await,
        Commands::Genres(args) => run_genres(&args, dir).await,
        Commands::Certifications(args) => run_certifications(&args, dir).await,
    }
}
