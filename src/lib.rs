// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `config`: Resolves the backend base URLs from the environment and
//   holds the process-wide config value.
// - `models`: Data shapes exchanged with the backend (Image, Job,
//   UploadResponse).
// - `services`: HTTP wrappers for the images API and the upload server.
// - `ui`: Implements the terminal-based user interface flows and
//   delegates requests to the services.
pub mod config;
pub mod models;
pub mod services;
pub mod ui;

pub use config::AppConfig;
pub use models::{Image, Job, UploadResponse};
