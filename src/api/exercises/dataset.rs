// The exercise catalog ships embedded in the binary and is parsed once.

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

use crate::models::exercise::Exercise;

static RAW_DATASET: &str = include_str!("../../../data/exercises.json");

static DATASET: Lazy<Result<Vec<Exercise>, serde_json::Error>> =
    Lazy::new(|| serde_json::from_str(RAW_DATASET));

/// Returns the full catalog, or an error if the embedded JSON is corrupt.
pub fn all() -> Result<&'static [Exercise]> {
    match &*DATASET {
        Ok(exercises) => Ok(exercises),
        Err(err) => Err(anyhow!("embedded exercise dataset is corrupt: {err}")),
    }
}
