// Data shapes exchanged with the backend. All of these are
// server-authoritative snapshots: the client deserializes them and
// never constructs or mutates them beyond reading optional fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Processing record the backend tracks for an uploaded image. Every
/// field is optional because the server fills them in as the job moves
/// through its lifecycle.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Job {
    pub job_id: Option<String>,
    pub completed: Option<bool>,
    pub completed_at: Option<String>,
    /// Named progress counters, e.g. `{"circles": 40.0}`.
    pub progress: Option<HashMap<String, f64>>,
    pub error: Option<String>,
    pub failed: Option<bool>,
    pub failed_at: Option<String>,
}

/// Image metadata returned by the API service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Image {
    pub id: String,
    pub created_at: Option<String>,
    pub resolution: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub job: Option<Job>,
}

/// Response from the upload service after a successful upload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UploadResponse {
    pub uuid: String,
    pub filename: String,
}
