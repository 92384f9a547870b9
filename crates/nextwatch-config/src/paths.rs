use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override from the environment, used in containers and
/// tests where platform directories are unavailable or undesirable.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("NEXTWATCH_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("nextwatch");
        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// JSON snapshot of the watchlist collection
    pub fn library_file(&self) -> PathBuf {
        self.data_dir.join("watchlist.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("nextwatch.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".nextwatch")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_base() {
        let manager = PathManager::from_base(PathBuf::from("/tmp/nw"));
        assert_eq!(manager.config_file(), PathBuf::from("/tmp/nw/config.toml"));
        assert_eq!(
            manager.library_file(),
            PathBuf::from("/tmp/nw/data/watchlist.json")
        );
        assert_eq!(manager.log_file(), PathBuf::from("/tmp/nw/logs/nextwatch.log"));
    }
}
