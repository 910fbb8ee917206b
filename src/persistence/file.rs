use super::{PersistenceResult, PlanStorage};
use crate::PlanEntry;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Writes the whole sequence as a pretty-printed JSON array, replacing any
/// existing file in place.
pub fn save_plans_to_json<P: AsRef<Path>>(plans: &[PlanEntry], path: P) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    plans.serialize(&mut serializer)?;
    writer.flush()?;
    debug!(path = %path.display(), count = plans.len(), "saved plans");
    Ok(())
}

pub fn load_plans_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<PlanEntry>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let plans: Vec<PlanEntry> = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), count = plans.len(), "loaded plans");
    Ok(plans)
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStorage for JsonFileStorage {
    fn save_plans(&self, plans: &[PlanEntry]) -> PersistenceResult<()> {
        save_plans_to_json(plans, &self.path)
    }

    fn load_plans(&self) -> PersistenceResult<Vec<PlanEntry>> {
        load_plans_from_json(&self.path)
    }
}
