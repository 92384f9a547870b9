use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::json;

use crate::commands::Workspace;
use crate::output::{Output, OutputFormat};

pub fn run_stats(workspace: &Workspace, output: &Output) -> Result<()> {
    let controller = workspace.controller()?;
    let stats = &controller.view().stats;

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.add_row(vec!["Total titles".to_string(), stats.total.to_string()]);
            table.add_row(vec!["Watched".to_string(), stats.watched.to_string()]);
            table.add_row(vec!["Watching".to_string(), stats.watching.to_string()]);
            table.add_row(vec!["Want to watch".to_string(), stats.want_to_watch.to_string()]);
            table.add_row(vec!["High priority".to_string(), stats.high_priority.to_string()]);
            table.add_row(vec!["Medium priority".to_string(), stats.medium_priority.to_string()]);
            table.add_row(vec!["Low priority".to_string(), stats.low_priority.to_string()]);
            table.add_row(vec![
                "Upcoming releases".to_string(),
                stats.upcoming_releases.to_string(),
            ]);
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!(stats));
        }
    }

    Ok(())
}
