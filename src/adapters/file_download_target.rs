use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::core::interfaces::adapters::{DownloadTarget, ObjectReference};
use crate::global_constants;

pub struct FileDownloadTarget {
    staging_directory: PathBuf,
    download_directory: PathBuf,
}

impl FileDownloadTarget {
    pub fn new(download_directory: PathBuf) -> Self {
        Self::with_staging_directory(std::env::temp_dir(), download_directory)
    }

    pub fn with_staging_directory(staging_directory: PathBuf, download_directory: PathBuf) -> Self {
        Self {
            staging_directory,
            download_directory,
        }
    }
}

impl DownloadTarget for FileDownloadTarget {
    fn create_object_reference(&self, bytes: &[u8]) -> Result<ObjectReference> {
        let id = Uuid::new_v4().to_string();
        let location = self.staging_directory.join(format!(
            "{}-{}.json",
            global_constants::EXPORT_STAGING_PREFIX,
            id
        ));

        fs::create_dir_all(&self.staging_directory)
            .with_context(|| format!("Unable to create staging directory {:?}", self.staging_directory))?;
        fs::write(&location, bytes)
            .with_context(|| format!("Unable to stage export at {:?}", location))?;

        log::debug!("[EXPORT] Staged {} bytes at {:?}", bytes.len(), location);
        Ok(ObjectReference { id, location })
    }

    fn deliver(&self, reference: &ObjectReference, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.download_directory).with_context(|| {
            format!(
                "Unable to create download directory {:?}",
                self.download_directory
            )
        })?;

        let destination = self.download_directory.join(file_name);
        fs::copy(&reference.location, &destination)
            .with_context(|| format!("Unable to write {:?}", destination))?;

        log::info!("[EXPORT] Delivered {} to {:?}", reference.id, destination);
        Ok(destination)
    }

    fn release(&self, reference: ObjectReference) {
        if let Err(e) = fs::remove_file(&reference.location) {
            log::warn!(
                "[EXPORT] Failed to release staged export {:?}: {}",
                reference.location,
                e
            );
        } else {
            log::debug!("[EXPORT] Released {}", reference.id);
        }
    }
}
