// Entrypoint for the CLI application.
// - Keeps `main` small: resolve config once, build the two service
//   clients, hand them to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use imagomortis_cli::config::{self, AppConfig};
use imagomortis_cli::services::image::ImageService;
use imagomortis_cli::services::upload::UploadService;
use imagomortis_cli::ui::main_menu;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Configuration comes from `UPLOAD_SERVICE_URL` / `API_SERVICE_URL`,
    // defaulting to http://localhost:8000. This is the one place that
    // initializes the process-wide copy.
    let app_config = AppConfig::from_env();
    config::init_global_config(app_config.clone());

    let images = ImageService::from_config(&app_config)?;
    let uploader = UploadService::from_config(&app_config)?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(images, uploader)?;
    Ok(())
}
