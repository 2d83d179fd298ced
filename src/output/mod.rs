pub mod deliveries;
pub mod flightpath;
pub mod geojson;

pub use deliveries::write_deliveries;
pub use flightpath::write_flightpath;
pub use geojson::write_drone_geojson;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output file locations for one day's run
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub deliveries: PathBuf,
    pub flightpath: PathBuf,
    pub drone: PathBuf,
}

impl ArtifactPaths {
    pub fn new(dir: &Path, date: NaiveDate) -> Self {
        let day = date.format("%Y-%m-%d");
        Self {
            deliveries: dir.join(format!("deliveries-{}.json", day)),
            flightpath: dir.join(format!("flightpath-{}.json", day)),
            drone: dir.join(format!("drone-{}.geojson", day)),
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    writer.flush()?;

    Ok(())
}
