use std::path::PathBuf;

use anyhow::Result;

use super::super::args::CommonArgs;
use crate::config::load_config;
use crate::service::{ExtractionService, Upload};

/// Build a service from the nearest config file plus command-line overrides.
pub fn load_service(common: &CommonArgs) -> Result<ExtractionService> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd)?.config;

    if let Some(dir) = &common.scratch_dir {
        config.scratch_dir = Some(dir.to_string_lossy().to_string());
    }

    ExtractionService::from_config(&config)
}

/// Upload local files into a fresh session.
pub fn upload(common: &CommonArgs, files: &[PathBuf]) -> Result<(ExtractionService, Upload)> {
    let service = load_service(common)?;
    let upload = service.upload_paths(files)?;
    Ok((service, upload))
}
