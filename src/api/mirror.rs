use super::SyncReconciler;
use crate::libs::error::SyncError;
use crate::libs::record_set::UserRecordSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Keeps one `<user>.json` copy per user in a directory.
#[derive(Debug, Clone)]
pub struct LocalMirror {
    dir: PathBuf,
}

impl LocalMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `user_id`'s copy.
    ///
    /// Letters, digits, `-` and `.` are kept; every other byte, `_`
    /// included, becomes `_XX` (uppercase hex). Distinct user ids therefore
    /// never share a file: `jane@corp.com` is `jane_40corp.com.json` and
    /// `jane_corp.com` is `jane_5Fcorp.com.json`.
    pub fn file_path(&self, user_id: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(user_id.len());
        for byte in user_id.bytes() {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.') {
                file_stem.push(byte as char);
            } else {
                file_stem.push_str(&format!("_{:02X}", byte));
            }
        }
        self.dir.join(format!("{}.json", file_stem))
    }
}

impl SyncReconciler for LocalMirror {
    fn name(&self) -> String {
        format!("local mirror ({})", self.dir.display())
    }

    async fn push(&self, user_id: &str, records: &UserRecordSet) -> Result<(), SyncError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.file_path(user_id);
        let tmp_path = path.with_extension("json.tmp");

        let data = serde_json::to_vec_pretty(records)?;
        fs::write(&tmp_path, data).await?;
        fs::rename(&tmp_path, &path).await?;
        debug!(user_id, path = %path.display(), "mirror written");
        Ok(())
    }

    async fn pull(&self, user_id: &str) -> Result<Option<UserRecordSet>, SyncError> {
        let path = self.file_path(user_id);
        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }
}
