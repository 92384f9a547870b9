use color_eyre::Result;
use dialoguer::MultiSelect;

use nextwatch_core::StatusFilter;
use nextwatch_models::{Priority, WatchStatus};

use crate::commands::Workspace;
use crate::output::Output;

pub fn run_batch(
    set_status: Option<WatchStatus>,
    set_priority: Option<Priority>,
    remove: bool,
    filter: Option<StatusFilter>,
    workspace: &Workspace,
    output: &Output,
) -> Result<()> {
    let operations =
        usize::from(set_status.is_some()) + usize::from(set_priority.is_some()) + usize::from(remove);
    if operations == 0 {
        output.warn("No batch operation specified. Use --set-status, --set-priority, or --remove");
        output.println("\nExample: nextwatch batch --set-priority high");
        return Ok(());
    }
    if operations > 1 {
        output.error("--set-status, --set-priority, and --remove are mutually exclusive");
        return Ok(());
    }
    if output.is_quiet() {
        output.error("Batch selection is interactive and cannot run with --quiet");
        return Ok(());
    }

    let mut controller = workspace.controller()?;
    if let Some(filter) = filter {
        controller.set_filter(filter);
    }
    controller.enter_batch_mode();

    // Selection happens over the visible (post-filter) set, in view order
    let visible: Vec<(String, String)> = controller
        .view()
        .groups
        .iter()
        .flat_map(|(_, items)| {
            items.iter().map(|item| {
                (
                    item.id.clone(),
                    format!("{} [{} / {}]", item.title, item.status, item.priority),
                )
            })
        })
        .collect();

    if visible.is_empty() {
        output.info("No items match the current filter");
        return Ok(());
    }

    let labels: Vec<&String> = visible.iter().map(|(_, label)| label).collect();
    let chosen = MultiSelect::new()
        .with_prompt("Select items (space toggles, enter confirms)")
        .items(&labels)
        .interact()?;

    for index in chosen {
        controller.toggle_selection(&visible[index].0);
    }

    let selected_count = controller.view().selection.len();
    if selected_count == 0 {
        controller.exit_batch_mode();
        output.info("Nothing selected, no changes made");
        return Ok(());
    }

    if let Some(status) = set_status {
        controller.apply_batch_status(status);
        output.success(format!("Set status to {} on {} items", status, selected_count));
    } else if let Some(priority) = set_priority {
        controller.apply_batch_priority(priority);
        output.success(format!(
            "Set priority to {} on {} items",
            priority, selected_count
        ));
    } else {
        controller.apply_batch_remove();
        output.success(format!(
            "Removed {} items ({} titles remaining)",
            selected_count,
            controller.view().stats.total
        ));
    }

    workspace.save(&controller)?;
    Ok(())
}
