// Image service: read-only wrappers around the API service's `/images`
// endpoints plus a pure URL builder for display purposes.

use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AppConfig;
use crate::models::Image;
use crate::services::error_message;

/// Client for the images API. Holds the base URL explicitly; construct
/// one per process (or per test) and pass it to consumers.
#[derive(Clone)]
pub struct ImageService {
    client: Client,
    base_url: String,
}

impl ImageService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ImageService {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api_service_url.clone())
    }

    /// Fetch metadata for all images on the server.
    pub fn get_images(&self) -> Result<Vec<Image>> {
        let url = format!("{}/images", self.base_url);
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send images request")?;

        if !res.status().is_success() {
            bail!("{}", error_message(res, "Failed to fetch images"));
        }

        let images: Vec<Image> = res.json().context("Parsing images response json")?;
        debug!("Retrieved {} images", images.len());
        Ok(images)
    }

    /// Fetch one image's raw bytes by id. A 404 maps to the dedicated
    /// not-found message the UI shows verbatim.
    pub fn get_image(&self, image_id: &str) -> Result<Vec<u8>> {
        let url = format!("{}/images/{}", self.base_url, image_id);
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send image request")?;

        if res.status() == StatusCode::NOT_FOUND {
            bail!("Image not found");
        }
        if !res.status().is_success() {
            bail!("{}", error_message(res, "Failed to fetch image"));
        }

        let bytes = res.bytes().context("Reading image body")?;
        Ok(bytes.to_vec())
    }

    /// Build the display URL for an image. The `t` query parameter busts
    /// any cache sitting between the viewer and the server. No network
    /// call is made.
    pub fn get_image_url(&self, image_id: &str) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("{}/images/{}?t={}", self.base_url, image_id, now)
    }
}
