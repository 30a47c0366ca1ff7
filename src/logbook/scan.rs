use crate::error::{AeriaError, AeriaResult};
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;

const IGC_EXTENSION: &str = "igc";

#[async_recursion]
async fn get_all_files(dir_path: &Path, recursive: bool) -> AeriaResult<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        let file_type = entry.file_type().await?;

        if file_type.is_dir() {
            if recursive {
                files.append(&mut get_all_files(&path, recursive).await?);
            }
        } else if file_type.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

fn is_igc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IGC_EXTENSION))
}

/// All `.igc` files below `dir_path`, sorted by path.
pub async fn find_igc_files(dir_path: &Path, recursive: bool) -> AeriaResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = get_all_files(dir_path, recursive)
        .await?
        .into_iter()
        .filter(|file| is_igc_file(file))
        .collect();

    if files.is_empty() {
        return Err(AeriaError::NoIgcFilesFound(dir_path.to_path_buf()));
    }

    files.sort();

    Ok(files)
}
