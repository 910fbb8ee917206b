use crate::PlanEntry;
use serde_json::Error as SerdeJsonError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl PersistenceError {
    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Backend that holds the full plan sequence between runs.
pub trait PlanStorage {
    fn save_plans(&self, plans: &[PlanEntry]) -> PersistenceResult<()>;
    fn load_plans(&self) -> PersistenceResult<Vec<PlanEntry>>;
}

pub mod file;

pub use file::{JsonFileStorage, load_plans_from_json, save_plans_to_json};
