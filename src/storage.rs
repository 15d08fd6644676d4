use crate::errors::AppError;
use crate::models::LedgerData;
use chrono::Utc;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

/// Loads the snapshot at `path`; a missing file is an empty ledger.
///
/// A file that exists but does not parse is renamed to
/// `<path>.corrupt-<timestamp>` before an empty ledger is returned, so the next
/// persist cannot overwrite it. If it cannot be moved aside, or cannot be read
/// at all, the error is returned and the service refuses to start.
pub async fn load_data(path: &Path) -> Result<LedgerData, std::io::Error> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LedgerData::default());
        }
        Err(err) => {
            error!(path = %path.display(), "failed to read data file: {err}");
            return Err(err);
        }
    };

    match serde_json::from_slice::<LedgerData>(&bytes) {
        Ok(data) => {
            info!(promos = data.promos.len(), "loaded ledger snapshot");
            Ok(data)
        }
        Err(err) => {
            error!(path = %path.display(), "failed to parse data file: {err}");
            let aside = quarantine(path).await?;
            warn!(kept = %aside.display(), "unreadable data file moved aside; starting empty");
            Ok(LedgerData::default())
        }
    }
}

/// Writes to a sibling `.tmp` file and renames it over `path`.
pub async fn persist_data(path: &Path, data: &LedgerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let staging = with_suffix(path, ".tmp");
    fs::write(&staging, payload).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}

async fn quarantine(path: &Path) -> Result<PathBuf, std::io::Error> {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
    let target = with_suffix(path, &format!(".corrupt-{stamp}"));
    fs::rename(path, &target).await?;
    Ok(target)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
