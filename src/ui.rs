// UI layer: provides a simple interactive menu using `dialoguer`.
// Service errors are printed and the loop continues; only setup
// failures abort the process.

use crate::models::{Image, Job};
use crate::services::image::ImageService;
use crate::services::upload::UploadService;
use anyhow::Result;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Main interactive menu. Receives the two service clients and runs a
/// select loop until the user chooses "Exit".
pub fn main_menu(images: ImageService, uploader: UploadService) -> Result<()> {
    loop {
        let items = vec!["Upload image", "List images", "Download image", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_upload(&uploader)?,
            1 => handle_list(&images)?,
            2 => handle_download(&images)?,
            3 => break,
            _ => {}
        }
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb
}

/// Prompt for a local file path and upload it.
fn handle_upload(uploader: &UploadService) -> Result<()> {
    let path: String = Input::new().with_prompt("Image file path").interact_text()?;
    let path = PathBuf::from(path);

    let pb = spinner("Uploading...");
    let result = uploader.upload_image(&path);
    pb.finish_and_clear();

    match result {
        Ok(resp) => println!("Uploaded {} (id {})", resp.filename, resp.uuid),
        Err(e) => println!("Upload failed: {}", e),
    }
    Ok(())
}

/// Fetch and print the metadata of every image on the server.
fn handle_list(images: &ImageService) -> Result<()> {
    let pb = spinner("Fetching images...");
    let result = images.get_images();
    pb.finish_and_clear();

    match result {
        Ok(list) if list.is_empty() => println!("No images on the server yet."),
        Ok(list) => {
            for image in &list {
                print_image(image);
            }
        }
        Err(e) => println!("Could not list images: {}", e),
    }
    Ok(())
}

fn print_image(image: &Image) {
    println!(
        "{}  created: {}  resolution: {}  size: {}  [{}]",
        image.id,
        image.created_at.as_deref().unwrap_or("-"),
        image.resolution.as_deref().unwrap_or("-"),
        image.size.as_deref().unwrap_or("-"),
        job_status(image.job.as_ref()),
    );
}

/// Short status line for the server-side processing record.
fn job_status(job: Option<&Job>) -> String {
    match job {
        None => "no job".into(),
        Some(job) if job.failed.unwrap_or(false) => match &job.error {
            Some(err) => format!("failed: {}", err),
            None => "failed".into(),
        },
        Some(job) if job.completed.unwrap_or(false) => "completed".into(),
        Some(job) => match &job.progress {
            Some(progress) => {
                let mut counters: Vec<String> = progress
                    .iter()
                    .map(|(name, value)| format!("{} {:.0}%", name, value))
                    .collect();
                counters.sort();
                format!("in progress: {}", counters.join(", "))
            }
            None => "in progress".into(),
        },
    }
}

/// List images, let the user pick one, and save its bytes next to the
/// user's other downloads.
fn handle_download(images: &ImageService) -> Result<()> {
    let pb = spinner("Fetching images...");
    let result = images.get_images();
    pb.finish_and_clear();

    let list = match result {
        Ok(list) if list.is_empty() => {
            println!("No images on the server yet.");
            return Ok(());
        }
        Ok(list) => list,
        Err(e) => {
            println!("Could not list images: {}", e);
            return Ok(());
        }
    };

    let labels: Vec<String> = list
        .iter()
        .map(|image| {
            format!(
                "{} ({})",
                image.id,
                image.created_at.as_deref().unwrap_or("unknown date")
            )
        })
        .collect();
    let choice = Select::new().items(&labels).default(0).interact()?;
    let image = &list[choice];

    let pb = spinner("Downloading...");
    let result = images.get_image(&image.id);
    pb.finish_and_clear();

    match result {
        Ok(bytes) => {
            // The backend serves JPEG bodies, see its /images/{id} handler.
            let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
            let path = dir.join(format!("{}.jpg", image.id));
            std::fs::write(&path, bytes)?;
            println!("Saved to {}", path.display());
            println!("Shareable URL: {}", images.get_image_url(&image.id));
        }
        Err(e) => println!("Download failed: {}", e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_summarizes_lifecycle() {
        assert_eq!(job_status(None), "no job");

        let completed = Job {
            completed: Some(true),
            ..Job::default()
        };
        assert_eq!(job_status(Some(&completed)), "completed");

        let failed = Job {
            failed: Some(true),
            error: Some("boom".into()),
            ..Job::default()
        };
        assert_eq!(job_status(Some(&failed)), "failed: boom");

        let mut counters = std::collections::HashMap::new();
        counters.insert("circles".to_string(), 40.0);
        let running = Job {
            completed: Some(false),
            progress: Some(counters),
            ..Job::default()
        };
        assert_eq!(job_status(Some(&running)), "in progress: circles 40%");
    }
}
