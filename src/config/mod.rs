use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::LngLat;

/// Fixed system constants shared by the planner and order validation.
///
/// Distances are in degrees on the planar lng/lat grid.
pub mod constants {
    use crate::domain::LngLat;

    /// Length of every non-hover move
    pub const DRONE_MOVE_DISTANCE: f64 = 0.00015;
    /// A position strictly closer than this to the goal has arrived
    pub const DRONE_IS_CLOSE_DISTANCE: f64 = 0.00015;

    /// Sentinel heading for "no movement": hovering or arrival
    pub const HOVER_ANGLE: f64 = 999.0;
    pub const ANGLE_STEP: f64 = 22.5;

    pub const MAX_PIZZAS_PER_ORDER: usize = 4;
    pub const ORDER_CHARGE_IN_PENCE: u32 = 100;

    /// Default delivery point shared by all orders
    pub const APPLETON_TOWER: LngLat = LngLat::new(-3.186874, 55.944494);
}

fn default_base_url() -> String {
    "https://ilp-rest.azurewebsites.net".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("resultfiles")
}
fn default_delivery_point() -> LngLat {
    constants::APPLETON_TOWER
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_delivery_point")]
    pub delivery_point: LngLat,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub rest: RestConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
            verbose: false,
            delivery_point: default_delivery_point(),
            planner: PlannerConfig::default(),
            rest: RestConfig::default(),
        }
    }
}

fn default_max_steps() -> usize {
    100_000
}

/// Search limits and return-leg policy
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Moves allowed in one search before it is reported as exhausted
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Check the mirrored return leg and search it independently if illegal
    #[serde(default)]
    pub verify_return_leg: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            verify_return_leg: false,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_verify_return_leg(mut self, verify: bool) -> Self {
        self.verify_return_leg = verify;
        self
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

/// Result of searching the standard config locations
#[derive(Debug, Default)]
pub struct ConfigLookup {
    /// First config file that parsed
    pub config: Option<FileConfig>,
    /// Files found earlier in the search that failed to parse, with the error
    pub skipped: Vec<(PathBuf, String)>,
}

impl FileConfig {
    /// Load the first config file found in the standard locations
    pub fn load() -> ConfigLookup {
        Self::load_from(get_config_paths())
    }

    fn load_from(config_paths: Vec<PathBuf>) -> ConfigLookup {
        let mut lookup = ConfigLookup::default();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        lookup.config = Some(config);
                        break;
                    }
                    Err(e) => lookup.skipped.push((path, e.to_string())),
                }
            }
        }
        lookup
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("dronepath.toml"));
    paths.push(PathBuf::from(".dronepath.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dronepath").join("config.toml"));
        paths.push(config_dir.join("dronepath.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".dronepath.toml"));
    }

    paths
}
