//! CSV export downloads: dated filenames and writing the fetched blob to
//! disk.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// `<prefix>-YYYY-MM-DD.csv`, matching the admin download naming.
pub fn export_filename(prefix: &str, date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    // The format description is static and infallible for a Date.
    let stamp = date.format(&format).unwrap_or_default();
    format!("{prefix}-{stamp}.csv")
}

/// Write an export blob into `dir` under a filename embedding today's date.
/// Returns the path written.
pub async fn save_export(dir: &Path, prefix: &str, bytes: Bytes) -> Result<PathBuf, ExportError> {
    let name = export_filename(prefix, OffsetDateTime::now_utc().date());
    let path = dir.join(name);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn filename_embeds_the_date() {
        assert_eq!(
            export_filename("enrollments", date!(2026 - 08 - 26)),
            "enrollments-2026-08-26.csv"
        );
        assert_eq!(
            export_filename("volunteer-applications", date!(2026 - 01 - 05)),
            "volunteer-applications-2026-01-05.csv"
        );
    }

    #[tokio::test]
    async fn save_writes_one_file_with_todays_date() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = save_export(dir.path(), "enrollments", Bytes::from_static(b"a,b\n1,2\n"))
            .await
            .expect("saved");

        let today = export_filename("enrollments", OffsetDateTime::now_utc().date());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(today.as_str()));
        let written = tokio::fs::read(&path).await.expect("read back");
        assert_eq!(written, b"a,b\n1,2\n");
        assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 1);
    }
}
