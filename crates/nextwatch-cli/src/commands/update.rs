// Single-item commands: status, priority, progress, removal.

use color_eyre::Result;

use nextwatch_core::WatchlistController;
use nextwatch_models::{Priority, WatchStatus};

use crate::commands::Workspace;
use crate::output::Output;

pub fn run_set_status(
    id: &str,
    status: WatchStatus,
    workspace: &Workspace,
    output: &Output,
) -> Result<()> {
    let mut controller = workspace.controller()?;
    if !exists(&controller, id, output) {
        return Ok(());
    }

    controller.update_status(id, status);
    workspace.save(&controller)?;
    output.success(format!("Marked {} as {}", id, status));
    Ok(())
}

pub fn run_set_priority(
    id: &str,
    priority: Priority,
    workspace: &Workspace,
    output: &Output,
) -> Result<()> {
    let mut controller = workspace.controller()?;
    if !exists(&controller, id, output) {
        return Ok(());
    }

    controller.update_priority(id, priority);
    workspace.save(&controller)?;
    output.success(format!("Set priority of {} to {}", id, priority));
    Ok(())
}

pub fn run_progress(id: &str, percent: u8, workspace: &Workspace, output: &Output) -> Result<()> {
    let mut controller = workspace.controller()?;
    if !exists(&controller, id, output) {
        return Ok(());
    }

    controller.update_progress(id, percent)?;
    workspace.save(&controller)?;

    if percent == 100 {
        output.success(format!("{} finished, marked as watched", id));
    } else {
        output.success(format!("Progress of {} set to {}%", id, percent));
    }
    Ok(())
}

pub fn run_remove(id: &str, workspace: &Workspace, output: &Output) -> Result<()> {
    let mut controller = workspace.controller()?;
    if !exists(&controller, id, output) {
        return Ok(());
    }

    controller.remove(id);
    workspace.save(&controller)?;
    output.success(format!(
        "Removed {} ({} titles remaining)",
        id,
        controller.view().stats.total
    ));
    Ok(())
}

// The engine treats a missing id as a no-op; surface it to the user
// instead of silently succeeding.
fn exists(controller: &WatchlistController, id: &str, output: &Output) -> bool {
    let found = controller.items().iter().any(|item| item.id == id);
    if !found {
        output.warn(format!("No watchlist item with id {}", id));
    }
    found
}
