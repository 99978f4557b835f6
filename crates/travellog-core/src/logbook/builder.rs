//! Builder for creating and configuring Logbook instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Logbook;
use crate::{
    db::Database,
    error::{LogbookError, Result},
};

/// Resolves the database location and prepares the schema.
#[derive(Debug, Clone, Default)]
pub struct LogbookBuilder {
    database_path: Option<PathBuf>,
}

impl LogbookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/travellog/travellog.db` or
    /// `~/.local/share/travellog/travellog.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates parent directories and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::FileSystem` if the parent directory cannot be
    /// created, `LogbookError::XdgDirectory` if no default location can be
    /// resolved, and `LogbookError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Logbook> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LogbookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(LogbookError::join)??;

        log::debug!("Using travel log database at {}", db_path.display());
        Ok(Logbook::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("travellog")
            .place_data_file("travellog.db")
            .map_err(|e| LogbookError::XdgDirectory(e.to_string()))
    }
}
