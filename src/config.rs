use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::error::AppError;

/// How many requests per category the "all" tab shows.
pub const ALL_VIEW_PER_CATEGORY: usize = 2;

pub const DEFAULT_REMOTE_URL: &str = "http://localhost:8080/api";

pub const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Overrides the database location.
pub const DB_PATH_ENV: &str = "SOCIALSPHERE_DB";

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "socialsphere", "socialsphere")
        .ok_or_else(|| AppError::Config("Could not determine home directory".into()).into())
}

pub fn db_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        return Ok(path);
    }

    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(AppError::from)?;
    Ok(data_dir.join("socialsphere.db"))
}
