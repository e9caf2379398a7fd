//! File-backed export sink.

use super::types::{ExportError, ExportSink};
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes exported PNGs into a directory with timestamped names.
#[derive(Debug, Clone)]
pub struct FileSink {
    /// Directory to save exports to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl FileSink {
    pub fn new(save_directory: PathBuf, filename_template: impl Into<String>) -> Self {
        Self {
            save_directory,
            filename_template: filename_template.into(),
        }
    }

    /// Builds a sink from the `[export]` config section.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(
            expand_tilde(&config.save_directory),
            config.filename_template.clone(),
        )
    }
}

impl ExportSink for FileSink {
    fn save(&mut self, png: &[u8]) -> Result<Option<PathBuf>, ExportError> {
        let directory = ensure_directory_exists(&self.save_directory)?;
        let file_path = unique_path(&directory, &self.filename_template);

        log::info!(
            "Saving export to: {} ({} bytes)",
            file_path.display(),
            png.len()
        );
        fs::write(&file_path, png)?;

        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
        }

        Ok(Some(file_path))
    }
}

/// Generate a `.png` filename from the template and the current local time.
pub fn generate_filename(template: &str) -> String {
    format!("{}.png", Local::now().format(template))
}

/// Picks a path in `directory` that does not exist yet.
///
/// Several exports within the same second share a timestamp, so a numeric
/// suffix is appended until the name is free.
fn unique_path(directory: &Path, template: &str) -> PathBuf {
    let filename = generate_filename(template);
    let candidate = directory.join(&filename);
    if !candidate.exists() {
        return candidate;
    }

    let stem = filename.trim_end_matches(".png");
    (1..)
        .map(|n| directory.join(format!("{stem}-{n}.png")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    Ok(directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf()))
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_has_png_extension() {
        let filename = generate_filename("sketch_%Y%m%d");
        assert!(filename.starts_with("sketch_20"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn tilde_is_expanded() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn sink_creates_directory_and_never_overwrites() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut sink = FileSink::new(temp.path().join("nested"), "fixed");

        let first = sink.save(b"one").unwrap().unwrap();
        let second = sink.save(b"two").unwrap().unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read(&first).unwrap(), b"one");
        assert_eq!(fs::read(&second).unwrap(), b"two");
        assert!(second.ends_with("fixed-1.png"));
    }
}
