use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use dronepath::api::RestClient;
use dronepath::config::FileConfig;
use dronepath::domain::OrderStatus;
use dronepath::output::{ArtifactPaths, write_deliveries, write_drone_geojson, write_flightpath};
use dronepath::planner::{Airspace, PathManager};
use dronepath::validation::validate_order;

/// Plan the day's pizza delivery drone flights
///
/// Examples:
///   # Plan all orders for a date against the default service
///   dronepath 2023-09-01
///
///   # Use a different service and output directory
///   dronepath 2023-09-01 http://localhost:8080 -o out
#[derive(Parser, Debug)]
#[command(name = "dronepath")]
#[command(version, about, long_about = None)]
struct Args {
    /// Order date, YYYY-MM-DD
    date: NaiveDate,

    /// Base URL of the REST service (defaults to the configured URL)
    base_url: Option<String>,

    /// Path to config file (optional, auto-searches dronepath.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the result files
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let mut skipped_configs = Vec::new();
    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        let lookup = FileConfig::load();
        skipped_configs = lookup.skipped;
        lookup.config.unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    init_tracing(verbose)?;
    for (path, error) in &skipped_configs {
        tracing::warn!("Failed to parse config file {:?}: {}", path, error);
    }

    let base_url = args.base_url.clone().unwrap_or(file_config.base_url.clone());
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or(file_config.output_dir.clone());

    println!("dronepath - Delivery Drone Path Planner");
    println!("=======================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Date: {}", args.date);
        println!("  Service: {}", base_url);
        println!(
            "  Delivery point: ({}, {})",
            file_config.delivery_point.lng, file_config.delivery_point.lat
        );
        println!("  Max search steps: {}", file_config.planner.max_steps);
        println!(
            "  Verify return leg: {}",
            if file_config.planner.verify_return_leg {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("  Output: {}", output_dir.display());
        println!();
    }

    let client = RestClient::new(&base_url, &file_config.rest)?;

    let spinner = create_spinner("Checking service...");
    if !client.is_alive().context("Failed to reach REST service")? {
        bail!("Unresponsive service: {} is not alive", base_url);
    }
    spinner.finish_with_message(format!("Service {} is alive", base_url));

    let spinner = create_spinner("Collecting data from the REST service...");
    let start = Instant::now();
    let restaurants = client.restaurants().context("Failed to fetch restaurants")?;
    let mut orders = client
        .orders(args.date)
        .context("Failed to fetch orders")?;
    let no_fly_zones = client.no_fly_zones().context("Failed to fetch no-fly zones")?;
    let central_area = client.central_area().context("Failed to fetch central area")?;
    spinner.finish_with_message(format!(
        "Fetched {} restaurants, {} orders, {} no-fly zones [{:.1}s]",
        restaurants.len(),
        orders.len(),
        no_fly_zones.len(),
        start.elapsed().as_secs_f32()
    ));

    if !central_area.is_valid() {
        bail!("Central area '{}' has fewer than 3 vertices", central_area.name);
    }

    let spinner = create_spinner("Validating orders...");
    for order in orders.iter_mut() {
        validate_order(order, &restaurants);
    }
    let valid = orders
        .iter()
        .filter(|o| o.order_status == OrderStatus::ValidButNotDelivered)
        .count();
    spinner.finish_with_message(format!("{} of {} orders valid", valid, orders.len()));

    let spinner = create_spinner("Evaluating navigation paths for delivery drones...");
    let start = Instant::now();
    let airspace = Airspace::new(no_fly_zones, central_area);
    let mut manager = PathManager::new(
        airspace,
        restaurants,
        file_config.delivery_point,
        file_config.planner.clone(),
    );
    let plan = manager.determine_routes(&mut orders);
    spinner.finish_with_message(format!(
        "Planned {} deliveries, {} movements, {} distinct routes [{:.1}s]",
        plan.delivered,
        plan.movements.len(),
        manager.cache().len(),
        start.elapsed().as_secs_f32()
    ));

    for failure in &plan.failed {
        println!("  Skipped order {}: {}", failure.order_no, failure.error);
    }

    let spinner = create_spinner("Writing result files...");
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    let paths = ArtifactPaths::new(&output_dir, args.date);
    write_deliveries(&paths.deliveries, &orders).context("Failed to write deliveries")?;
    write_flightpath(&paths.flightpath, &plan.movements).context("Failed to write flight path")?;
    write_drone_geojson(&paths.drone, &plan.movements).context("Failed to write drone GeoJSON")?;
    spinner.finish_with_message("Result files written");

    println!();
    println!("Created {}", paths.deliveries.display());
    println!("Created {}", paths.flightpath.display());
    println!("Created {}", paths.drone.display());
    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "dronepath=debug" } else { "dronepath=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
