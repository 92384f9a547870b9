pub mod add;
pub mod batch;
pub mod config;
pub mod list;
pub mod stats;
pub mod update;

use std::path::PathBuf;

use color_eyre::Result;
use nextwatch_config::{Config, PathManager};
use nextwatch_core::{GroupOption, SortOption, StatusFilter, WatchlistController};

use crate::store;

/// Resolved configuration and paths shared by every subcommand.
pub struct Workspace {
    pub config: Config,
    pub paths: PathManager,
    pub library: PathBuf,
}

impl Workspace {
    pub fn open(library_override: Option<PathBuf>) -> Result<Self> {
        let paths = PathManager::default();
        let config = Config::load(&paths.config_file())
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))?;
        let library = library_override
            .or_else(|| config.library.path.clone())
            .unwrap_or_else(|| paths.library_file());

        Ok(Self {
            config,
            paths,
            library,
        })
    }

    /// Configured view defaults, validated through the engine parsers so
    /// a typo in config.toml fails loudly instead of falling back.
    pub fn default_options(&self) -> Result<(StatusFilter, SortOption, GroupOption)> {
        let filter: StatusFilter = self.config.view.filter.parse()?;
        let sort: SortOption = self.config.view.sort.parse()?;
        let group: GroupOption = self.config.view.group.parse()?;
        Ok((filter, sort, group))
    }

    /// Build a controller over the current snapshot, with configured
    /// view defaults applied.
    pub fn controller(&self) -> Result<WatchlistController> {
        let (filter, sort, group) = self.default_options()?;
        let mut controller = WatchlistController::with_options(filter, sort, group);
        let items = store::load_items(&self.library)?;
        controller.load(items)?;
        Ok(controller)
    }

    pub fn save(&self, controller: &WatchlistController) -> Result<()> {
        store::save_items(&self.library, controller.items())
    }
}
