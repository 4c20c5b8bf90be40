//! Wayfinder CLI
//!
//! Plans routes in-process with the same configuration as the server, and
//! checks a running server's health.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::sync::Arc;

use application::{Geocoder, GeocodingPort, PipelineError, PlaceImageService, RoutePlanner};
use clap::{Parser, Subcommand};
use domain::entities::RouteSet;
use domain::value_objects::TravelMode;
use infrastructure::{AppConfig, GraphHopperAdapter, UnsplashAdapter};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wayfinder CLI
#[derive(Parser)]
#[command(name = "wayfinder-cli")]
#[command(author, version, about = "Wayfinder route planning CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional, may be absent)
    #[arg(short, long, default_value = "config", env = "WAYFINDER_CONFIG")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan alternative routes between two places
    ///
    /// Example: wayfinder-cli plan "Pune" "Hyderabad" --mode bike
    Plan {
        /// Start place (city, landmark, address)
        start: String,

        /// End place (city, landmark, address)
        end: String,

        /// Routing profile passed to the provider
        #[arg(short, long, default_value = "car")]
        mode: String,

        /// Also look up a photo for each place
        #[arg(long)]
        with_images: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve one place to coordinates, with the locale fallback
    Geocode {
        /// Place to resolve
        place: String,
    },

    /// Check a running server's health
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
}

/// JSON printed by `plan`
#[derive(Debug, Serialize)]
struct PlanOutput {
    route_set: RouteSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_image: Option<String>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Trimmed place text, or the missing-input message when it is blank
fn place_query(place: &str) -> Result<&str, &'static str> {
    let place = place.trim();
    if place.is_empty() {
        return Err(PipelineError::MissingInput.user_message());
    }
    Ok(place)
}

fn build_geocoder(config: &AppConfig, graphhopper: &Arc<GraphHopperAdapter>) -> Geocoder {
    let geocoding: Arc<dyn GeocodingPort> = graphhopper.clone();
    Geocoder::new(geocoding, config.geocoder.to_geocoder_config())
}

fn build_images(config: &AppConfig) -> anyhow::Result<Option<PlaceImageService>> {
    let Some(unsplash) = config.unsplash_enabled() else {
        tracing::warn!("Place images requested but no Unsplash access key is configured");
        return Ok(None);
    };
    let adapter = UnsplashAdapter::new(unsplash)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Unsplash client: {e}"))?;
    Ok(Some(PlaceImageService::new(Arc::new(adapter))))
}

async fn plan(
    config: &AppConfig,
    start: &str,
    end: &str,
    mode: TravelMode,
    with_images: bool,
) -> anyhow::Result<Result<PlanOutput, &'static str>> {
    let graphhopper = Arc::new(
        GraphHopperAdapter::new(&config.graphhopper)
            .map_err(|e| anyhow::anyhow!("Failed to initialize GraphHopper client: {e}"))?,
    );
    let planner = RoutePlanner::new(build_geocoder(config, &graphhopper), graphhopper);
    let images = if with_images { build_images(config)? } else { None };

    let image_lookup = async {
        match &images {
            Some(images) => images.images_for(start, end).await,
            None => (None, None),
        }
    };

    let (planned, (start_image, end_image)) =
        tokio::join!(planner.plan(start, end, mode), image_lookup);

    Ok(match planned {
        Ok(route_set) => Ok(PlanOutput {
            route_set,
            start_image,
            end_image,
        }),
        Err(e) => {
            tracing::debug!(error = ?e, "Planning failed");
            Err(e.user_message())
        },
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Plan {
            start,
            end,
            mode,
            with_images,
            pretty,
        } => {
            let config = AppConfig::load_from(&cli.config)?;
            config.validate()?;

            let mode = TravelMode::from(mode.trim());
            match plan(&config, &start, &end, mode, with_images).await? {
                Ok(output) => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&output)?
                    } else {
                        serde_json::to_string(&output)?
                    };
                    println!("{json}");
                },
                Err(message) => {
                    eprintln!("{message}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Geocode { place } => {
            let place = match place_query(&place) {
                Ok(place) => place,
                Err(message) => {
                    eprintln!("{message}");
                    std::process::exit(1);
                },
            };

            let config = AppConfig::load_from(&cli.config)?;
            config.validate()?;

            let graphhopper = Arc::new(
                GraphHopperAdapter::new(&config.graphhopper)
                    .map_err(|e| anyhow::anyhow!("Failed to initialize GraphHopper client: {e}"))?,
            );

            match build_geocoder(&config, &graphhopper).resolve(place).await {
                Some(point) => println!("{}", serde_json::to_string(&point)?),
                None => {
                    eprintln!("Could not geocode \"{place}\".");
                    std::process::exit(1);
                },
            }
        },

        Commands::Health { url } => {
            let client = reqwest::Client::new();
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body = resp.json::<serde_json::Value>().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                },
                Ok(resp) => {
                    eprintln!("Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    eprintln!("Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
