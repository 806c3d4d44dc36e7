// Wire format for exercise records. Field names stay camelCase to match
// the published API contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable zero-padded identifier, e.g. "0001"
    pub id: String,
    pub name: String,
    pub body_part: String,
    /// Primary target muscle
    pub target: String,
    pub equipment: String,
    pub gif_url: String,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
}
