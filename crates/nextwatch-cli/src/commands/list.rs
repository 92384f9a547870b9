use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::json;

use nextwatch_core::{GroupKey, GroupOption, SortOption, StatusFilter};
use nextwatch_models::WatchlistItem;

use crate::commands::Workspace;
use crate::output::{Output, OutputFormat};

pub fn run_list(
    filter: Option<StatusFilter>,
    sort: Option<SortOption>,
    group: Option<GroupOption>,
    workspace: &Workspace,
    output: &Output,
) -> Result<()> {
    let mut controller = workspace.controller()?;
    if let Some(filter) = filter {
        controller.set_filter(filter);
    }
    if let Some(sort) = sort {
        controller.set_sort(sort);
    }
    if let Some(group) = group {
        controller.set_group(group);
    }

    let view = controller.view();

    match output.format() {
        OutputFormat::Human => {
            if view.groups.is_empty() {
                output.info("No items match the current filter");
                return Ok(());
            }
            for (key, items) in &view.groups {
                if *key != GroupKey::Ungrouped {
                    output.println(format!("\n{} ({})", key.to_string().bold(), items.len()));
                }
                output.println(render_table(items));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let payload = json!({
                "groups": view
                    .groups
                    .iter()
                    .map(|(key, items)| json!({
                        "key": key.to_string(),
                        "items": items,
                    }))
                    .collect::<Vec<_>>(),
                "stats": view.stats,
            });
            output.json(&payload);
        }
    }

    Ok(())
}

fn render_table(items: &[WatchlistItem]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID", "Title", "Status", "Priority", "Progress", "Rating", "Year",
    ]);

    for item in items {
        table.add_row(vec![
            item.id.clone(),
            item.title.clone(),
            item.status.to_string(),
            item.priority.to_string(),
            item.progress.map(|p| format!("{}%", p)).unwrap_or_default(),
            item.rating.map(|r| format!("{:.1}", r)).unwrap_or_default(),
            item.release_year().to_string(),
        ]);
    }

    table.to_string()
}
