// Upload service: posts a local image file as multipart/form-data to
// the upload server and returns the identifier the server assigned.

use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::blocking::{multipart, Client};
use std::path::Path;

use crate::config::AppConfig;
use crate::models::UploadResponse;
use crate::services::error_message;

/// Client for the upload service. Like `ImageService`, the base URL is
/// passed in explicitly.
#[derive(Clone)]
pub struct UploadService {
    client: Client,
    base_url: String,
}

impl UploadService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(UploadService {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.upload_service_url.clone())
    }

    /// Upload an image file. The media type is derived from the file
    /// extension and must be `image/*`; anything else fails before any
    /// network activity.
    pub fn upload_image(&self, path: &Path) -> Result<UploadResponse> {
        let Some(mime) = image_mime_type(path) else {
            bail!("File must be an image");
        };

        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();
        let data = std::fs::read(path).context("Failed to read image file")?;

        let part = multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime)
            .context("Invalid media type")?;
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.base_url);
        debug!("POST {}", url);
        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;

        if !res.status().is_success() {
            bail!("{}", error_message(res, "Upload failed"));
        }

        let resp: UploadResponse = res.json().context("Parsing upload response json")?;
        debug!("Uploaded {} as {}", resp.filename, resp.uuid);
        Ok(resp)
    }
}

/// Map a file extension to its `image/*` media type. Returns `None` for
/// anything that is not a recognized image format.
fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_type_covers_common_image_extensions() {
        assert_eq!(
            image_mime_type(&PathBuf::from("photo.JPG")),
            Some("image/jpeg")
        );
        assert_eq!(
            image_mime_type(&PathBuf::from("photo.png")),
            Some("image/png")
        );
        assert_eq!(image_mime_type(&PathBuf::from("notes.txt")), None);
        assert_eq!(image_mime_type(&PathBuf::from("no_extension")), None);
    }

    #[test]
    fn non_image_file_is_rejected_before_any_io() {
        // The base URL is unroutable and the path does not exist; the
        // validation error proves neither was touched.
        let service = UploadService::new("http://127.0.0.1:1").unwrap();
        let err = service
            .upload_image(&PathBuf::from("/nonexistent/report.pdf"))
            .unwrap_err();
        assert_eq!(err.to_string(), "File must be an image");
    }
}
