// JSON snapshot persistence for the watchlist collection. The engine is
// storage-agnostic; this host hands it a fresh snapshot per invocation
// and writes the canonical collection back after each command.

use color_eyre::eyre::Context;
use color_eyre::Result;
use nextwatch_models::WatchlistItem;
use std::path::Path;
use tracing::debug;

pub fn load_items(path: &Path) -> Result<Vec<WatchlistItem>> {
    if !path.exists() {
        debug!("load_items: no snapshot at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read watchlist snapshot at {}", path.display()))?;
    let items: Vec<WatchlistItem> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Failed to parse watchlist snapshot at {}", path.display()))?;

    debug!("load_items: loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

pub fn save_items(path: &Path, items: &[WatchlistItem]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(items)?;
    std::fs::write(path, contents)
        .wrap_err_with(|| format!("Failed to write watchlist snapshot at {}", path.display()))?;

    debug!("save_items: wrote {} items to {}", items.len(), path.display());
    Ok(())
}
