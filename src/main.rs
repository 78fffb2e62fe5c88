use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use url::Url;

use valhalla_gallery::{
    Config,
    artists::ArtistRepository,
    gallery::GalleryFilterEngine,
    loader::{ConnectionQuality, FileFetcher, ImageLoader, ImageSlot},
    routing, startup_checks,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Global options that apply to all commands
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate artist data and the on-disk image layout (default)
    Check,

    /// List artists in display order with portfolio counts
    Artists,

    /// Show the filter facets derived from one artist's portfolio
    Facets {
        /// Artist slug, e.g. "kason"
        slug: String,
    },

    /// Load an artist's portfolio images from disk with the retry and
    /// fallback pipeline
    Preload {
        /// Artist slug
        slug: String,

        /// Simulated connection quality: slow-2g, 2g, 3g, 4g or unknown
        #[arg(long, default_value = "4g")]
        connection: String,

        /// Use the staggered single-attempt recovery path
        #[arg(long)]
        conservative: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Set up logging first
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli.config)?;
    info!("Starting {}", config.app.name);

    match cli.command {
        Some(Commands::Artists) => {
            let repository = load_repository(&config).await;
            list_artists(&repository);
            Ok(())
        }
        Some(Commands::Facets { slug }) => {
            let repository = load_repository(&config).await;
            show_facets(&config, &repository, &slug)
        }
        Some(Commands::Preload {
            slug,
            connection,
            conservative,
        }) => {
            let repository = load_repository(&config).await;
            preload(&config, &repository, &slug, &connection, conservative).await
        }
        Some(Commands::Check) | None => run_checks(&config).await,
    }
}

fn load_config(config_path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if config_path.exists() {
        let config_content = std::fs::read_to_string(config_path)?;
        let config = toml_edit::de::from_str::<Config>(&config_content)?;
        info!("Configuration loaded from: {:?}", config_path);
        config
    } else {
        info!("Config file not found at {:?}, using defaults", config_path);
        Config::default()
    };
    Ok(config)
}

/// Load artist data, falling back to an empty repository rather than
/// aborting. A data problem should degrade the gallery, not take the whole
/// site down with it.
async fn load_repository(config: &Config) -> Arc<ArtistRepository> {
    match ArtistRepository::load_from_directory(&config.studio.data_directory).await {
        Ok(repository) => {
            info!("Loaded {} artists", repository.len());
            Arc::new(repository)
        }
        Err(e) => {
            warn!("Artist data unavailable, continuing with none: {}", e);
            Arc::new(ArtistRepository::from_artists(Vec::new()))
        }
    }
}

async fn run_checks(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match startup_checks::perform_startup_checks(config).await {
        Ok(()) => {}
        Err(errors) => {
            let critical_error = errors.iter().any(|e| e.is_critical());
            if critical_error {
                tracing::error!("Critical startup check failed, exiting");
                return Err("Critical startup check failed".into());
            } else {
                warn!("Non-critical startup checks failed, continuing");
            }
        }
    }

    let repository = load_repository(config).await;
    for (slug, report) in repository.validation_reports() {
        if !report.is_valid {
            warn!(
                "Artist '{}' failed validation: {}",
                slug,
                report.errors.join("; ")
            );
        }
    }

    info!("Checks complete: {} artists available", repository.len());
    Ok(())
}

fn list_artists(repository: &ArtistRepository) {
    if repository.is_empty() {
        println!("No artists loaded");
        return;
    }
    for artist in repository.artists() {
        println!(
            "{:<10} {} ({} portfolio images)",
            artist.slug,
            artist.name,
            artist.portfolio.len()
        );
    }
}

fn show_facets(
    config: &Config,
    repository: &ArtistRepository,
    slug: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(portfolio) = repository.portfolio(slug) else {
        return Err(format!("Unknown artist: {}", slug).into());
    };

    let engine = GalleryFilterEngine::new(config.gallery.clone());
    match engine.facet_menu(portfolio) {
        Some(menu) => {
            if menu.show_style_controls {
                let styles: Vec<&str> = menu.styles.iter().map(|s| s.as_str()).collect();
                println!("Styles: {}", styles.join(", "));
            }
            if menu.show_tag_controls {
                println!("Tags: {}", menu.tags.join(", "));
                println!("Popular: {}", menu.popular_tags.join(", "));
            }
        }
        None => println!("Portfolio too uniform for filter controls"),
    }
    Ok(())
}

async fn preload(
    config: &Config,
    repository: &ArtistRepository,
    slug: &str,
    connection: &str,
    conservative: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(portfolio) = repository.portfolio(slug) else {
        return Err(format!("Unknown artist: {}", slug).into());
    };

    let base = match &config.app.base_url {
        Some(base) => Url::parse(base)?,
        None => Url::parse("https://valhallatattoo.com/")?,
    };
    let quality = ConnectionQuality::from_effective_type(connection);

    let fetcher = Arc::new(FileFetcher::new(config.studio.image_root.clone()));
    let loader = ImageLoader::new(fetcher, &config.loader, &config.studio.placeholder_filename);

    let mut slots = Vec::with_capacity(portfolio.len());
    for image in portfolio {
        let url = routing::portfolio_image_url(&base, slug, &image.filename)?;
        slots.push(ImageSlot::new(url, &image.title));
    }

    let loaded = if conservative {
        loader.load_all_staggered(&mut slots, quality).await
    } else {
        let mut loaded = 0;
        for slot in &mut slots {
            if loader.load(slot, quality).await.is_ok() {
                loaded += 1;
            }
        }
        loaded
    };

    println!(
        "Loaded {}/{} images for {} on a {} connection",
        loaded,
        slots.len(),
        slug,
        quality.as_str()
    );
    for error in loader.tracker().recent() {
        println!(
            "  [{:?}] {} ({}, {})",
            error.kind,
            error.message,
            error.path,
            error.connection.as_str()
        );
    }
    Ok(())
}
